//! Parsing and rewriting of the generated MDI stylesheet.
//!
//! The `@mdi/font` stylesheet is machine-generated and highly regular: one
//! minified rule per icon, of the form
//! `.mdi-arrow-left::before{content:"\F0142"}`. That regularity makes a
//! regex scan over the flat text sufficient; a general CSS parser would buy
//! nothing here.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::{Captures, Regex};

use crate::errors::GlyphError;

/// Matches an icon rule up to its `content` value, capturing the icon name
/// and the hex codepoint. Both `:before` and `::before` occur in the wild.
static ICON_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.mdi-([a-z0-9-]+)::?before\{content:"\\([0-9A-Fa-f]+?)""#)
        .expect("invalid icon rule pattern")
});

/// Matches a whole icon rule, selector through the closing brace.
static FULL_ICON_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.mdi-([a-z0-9-]+)::?before\{content:"\\[0-9A-Fa-f]+?"\}"#)
        .expect("invalid icon rule pattern")
});

static SOURCE_MAP_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*# sourceMappingURL=.*? \*/").expect("invalid comment pattern"));

static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("invalid pattern"));

/// Stylesheet rule binding one icon class name to one Unicode codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRule {
    /// Icon name without the `mdi-` class prefix, e.g. `arrow-left`.
    pub name: String,
    /// Hex-encoded codepoint of the icon glyph, e.g. `F0142`.
    pub code: String,
}

/// Extracts the icon rules for `names` from the stylesheet text.
///
/// Rules are returned in the order they occur in the stylesheet. Names with
/// no matching rule are silently skipped, as are rules not matching the
/// generated-stylesheet shape; duplicate rules for the same name each yield
/// their own entry.
pub fn parse_icon_rules(css: &str, names: &BTreeSet<String>) -> Vec<IconRule> {
    ICON_RULE
        .captures_iter(css)
        .filter(|captures| names.contains(&captures[1]))
        .map(|captures| IconRule {
            name: captures[1].to_owned(),
            code: captures[2].to_owned(),
        })
        .collect()
}

/// Concatenates the glyph characters of `rules` into the string handed to
/// the font subsetting engine.
///
/// # Errors
///
/// Returns an error if a hex code does not encode a Unicode scalar value
/// (e.g., exceeds `0x10FFFF`). Codes produced by [`parse_icon_rules`] are
/// always valid hex, so this only fires on hand-built rules.
pub fn glyph_string(rules: &[IconRule]) -> Result<String, GlyphError> {
    rules
        .iter()
        .map(|rule| {
            u32::from_str_radix(&rule.code, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| GlyphError::new(&rule.code))
        })
        .collect()
}

/// Rewrites the stylesheet for the subset output directory.
///
/// Icon rules for names outside `names` are removed; everything else (e.g.,
/// the `@font-face` block) is kept. Font URLs are rewritten from
/// `../fonts/` to `./` since the output stylesheet sits next to the font
/// files, the source-map comment is stripped, and the text is flattened to a
/// single line terminated by one newline.
///
/// Rule filtering must run first: the rule pattern is sensitive to the
/// internal formatting that the later steps alter.
pub fn rewrite_stylesheet(css: &str, names: &BTreeSet<String>) -> String {
    let filtered = FULL_ICON_RULE.replace_all(css, |captures: &Captures<'_>| {
        if names.contains(&captures[1]) {
            captures[0].to_owned()
        } else {
            String::new()
        }
    });

    let relocated = filtered.replace("../fonts/", "./");
    let without_map = SOURCE_MAP_COMMENT.replace(&relocated, "");
    let mut flattened = NEWLINES.replace_all(&without_map, "").into_owned();
    flattened.push('\n');
    flattened
}
