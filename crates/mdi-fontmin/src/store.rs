//! Filesystem access used by the orchestration.

use std::{fs, io, path::Path};

/// Minimal filesystem surface needed by a [`Subsetter`](crate::Subsetter).
///
/// Abstracted behind a trait so that tests can run the full orchestration
/// against an in-memory store.
pub trait FileStore {
    /// Checks whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Recursively creates the directory at `path`.
    ///
    /// # Errors
    ///
    /// Propagates underlying I/O errors.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Reads the file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Propagates underlying I/O errors; non-UTF-8 contents are an
    /// [`InvalidData`](io::ErrorKind::InvalidData) error.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Reads the file at `path` as raw bytes.
    ///
    /// # Errors
    ///
    /// Propagates underlying I/O errors.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Propagates underlying I/O errors.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

impl<S: FileStore + ?Sized> FileStore for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }
}

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}
