//! Seam to the external font subsetting engine.

use std::error;

/// Boxed error returned by [`SubsetEngine`] implementations.
pub type BoxError = Box<dyn error::Error + Send + Sync>;

/// Binary container format of a produced font artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontContainer {
    /// TrueType, the base trimmed font.
    Ttf,
    /// Embedded OpenType, for legacy IE.
    Eot,
    /// Web Open Font Format.
    Woff,
    /// Web Open Font Format 2 (Brotli-compressed).
    Woff2,
}

impl FontContainer {
    /// All containers emitted by a subsetting run, base font first.
    pub const ALL: [Self; 4] = [Self::Ttf, Self::Eot, Self::Woff, Self::Woff2];

    /// File extension used for artifacts in this container.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Ttf => "ttf",
            Self::Eot => "eot",
            Self::Woff => "woff",
            Self::Woff2 => "woff2",
        }
    }
}

/// Input to a single engine invocation.
#[derive(Debug, Clone, Copy)]
pub struct SubsetRequest<'a> {
    /// Raw bytes of the full source font.
    pub font: &'a [u8],
    /// Characters whose glyphs must survive subsetting.
    pub glyphs: &'a str,
    /// Whether hinting instructions should be retained.
    pub hinting: bool,
}

/// Artifacts produced by one engine invocation, one per [`FontContainer`].
#[derive(Debug, Clone, Default)]
pub struct FontArtifacts {
    /// Trimmed TrueType font.
    pub ttf: Vec<u8>,
    /// EOT conversion of the trimmed font.
    pub eot: Vec<u8>,
    /// WOFF conversion of the trimmed font.
    pub woff: Vec<u8>,
    /// WOFF2 conversion of the trimmed font.
    pub woff2: Vec<u8>,
}

impl FontArtifacts {
    /// Gets the artifact bytes for the given container.
    pub fn get(&self, container: FontContainer) -> &[u8] {
        match container {
            FontContainer::Ttf => &self.ttf,
            FontContainer::Eot => &self.eot,
            FontContainer::Woff => &self.woff,
            FontContainer::Woff2 => &self.woff2,
        }
    }
}

/// Font subsetting engine.
///
/// Treated as a black box: it receives the full font plus the string of
/// glyph characters to retain, and returns the trimmed font re-encoded into
/// each container format. Characters absent from the font are ignored by
/// any reasonable engine, so callers need not pre-validate the glyph string.
pub trait SubsetEngine {
    /// Produces trimmed font artifacts for the request.
    ///
    /// # Errors
    ///
    /// Implementations surface any engine failure as a boxed error; the
    /// caller treats every failure as terminal for the run.
    fn subset(&self, request: &SubsetRequest<'_>) -> Result<FontArtifacts, BoxError>;
}

impl<E: SubsetEngine + ?Sized> SubsetEngine for &E {
    fn subset(&self, request: &SubsetRequest<'_>) -> Result<FontArtifacts, BoxError> {
        (**self).subset(request)
    }
}
