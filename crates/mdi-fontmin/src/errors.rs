use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::engine::BoxError;

/// Kind of a source artifact expected from the installed `@mdi/font` package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceKind {
    /// The full TrueType font.
    Font,
    /// The minified stylesheet.
    Stylesheet,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Font => "font",
            Self::Stylesheet => "CSS",
        })
    }
}

/// Error raised when a hex icon code does not encode a Unicode scalar value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hex code \"{code}\" does not encode a Unicode scalar value")]
pub struct GlyphError {
    code: String,
}

impl GlyphError {
    pub(crate) fn new(code: &str) -> Self {
        Self {
            code: code.to_owned(),
        }
    }

    /// Gets the offending hex code.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Errors that can occur during a subsetting run.
///
/// These never escape [`Subsetter::run`](crate::Subsetter::run); they are
/// logged at the operation boundary and folded into an
/// [`Outcome`](crate::Outcome).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubsetError {
    /// A source artifact is missing from the installed package.
    #[error(
        "{kind} file {} does not exist, check if the @mdi/font package is properly installed",
        .path.display()
    )]
    MissingSource {
        /// Kind of the missing artifact.
        kind: SourceKind,
        /// Expected location of the artifact.
        path: PathBuf,
    },
    /// A selected icon code cannot be mapped to a glyph character.
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    /// The external font subsetting engine failed.
    #[error("font subsetting engine failed: {0}")]
    Engine(#[source] BoxError),
    /// Reading a source artifact failed.
    #[error("failed reading {}: {source}", .path.display())]
    Read {
        /// Path of the artifact being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing an output artifact (or creating the output directory) failed.
    #[error("failed writing {}: {source}", .path.display())]
    Write {
        /// Path of the artifact being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
