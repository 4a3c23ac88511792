//! Build-time glyph subsetting for [Material Design Icons] font distributions.
//!
//! The `@mdi/font` package ships a TrueType font with thousands of icons and
//! a stylesheet defining one class per icon; most consumers use a handful of
//! them. This crate parses the stylesheet to recover the name → codepoint
//! mapping for a caller-selected set of icons, hands the corresponding glyph
//! string to a font subsetting engine, and rewrites the stylesheet so it
//! only references the surviving classes, with asset paths corrected for the
//! output location.
//!
//! The subsetting engine and the filesystem sit behind the [`SubsetEngine`]
//! and [`FileStore`] traits; the pure transforms ([`parse_icon_rules`],
//! [`glyph_string`], [`rewrite_stylesheet`]) are exported on their own for
//! callers that only need the text processing.
//!
//! [Material Design Icons]: https://pictogrammers.com/library/mdi/

mod css;
mod engine;
mod errors;
mod options;
mod store;
mod subset;

pub use crate::{
    css::{glyph_string, parse_icon_rules, rewrite_stylesheet, IconRule},
    engine::{BoxError, FontArtifacts, FontContainer, SubsetEngine, SubsetRequest},
    errors::{GlyphError, SourceKind, SubsetError},
    options::SubsetOptions,
    store::{DiskStore, FileStore},
    subset::{Outcome, Subsetter, FONT_FAMILY},
};
