//! Subsetting configuration.

use std::{
    collections::BTreeSet,
    path::{Component, PathBuf},
};

use crate::subset::FONT_FAMILY;

/// Configuration for a subsetting run.
///
/// All fields have working defaults apart from `names`, which defaults to
/// empty (i.e., "retain no icons"); in practice callers always set it.
#[derive(Debug, Clone)]
pub struct SubsetOptions {
    /// Icon names to retain, without the `mdi-` class prefix
    /// (e.g. `arrow-left`). Names absent from the source stylesheet are
    /// silently ignored. Defaults to empty.
    pub names: Vec<String>,
    /// Output directory for the generated artifacts. Resolved relative to
    /// the working directory after stripping any leading path separators.
    /// Defaults to `public/fonts/mdi`.
    pub output: PathBuf,
    /// Root of the installed `@mdi/font` package, from which the
    /// conventional font and stylesheet locations are derived. Defaults to
    /// `node_modules/@mdi/font`.
    pub package_dir: PathBuf,
    /// Whether the engine should retain hinting instructions. Defaults to
    /// `true`.
    pub hinting: bool,
    /// Suppresses informational log lines (failures are always logged).
    /// Defaults to `false`.
    pub silent: bool,
    /// Prefix inserted into every log line; may be empty. Defaults to
    /// `[mdi-fontmin]`.
    pub log_prefix: String,
}

impl Default for SubsetOptions {
    fn default() -> Self {
        Self {
            names: vec![],
            output: "public/fonts/mdi".into(),
            package_dir: "node_modules/@mdi/font".into(),
            hinting: true,
            silent: false,
            log_prefix: "[mdi-fontmin]".into(),
        }
    }
}

impl SubsetOptions {
    /// Creates options retaining the specified icon names, with all other
    /// fields at their defaults.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn name_set(&self) -> BTreeSet<String> {
        self.names.iter().cloned().collect()
    }

    pub(crate) fn font_path(&self) -> PathBuf {
        self.package_dir
            .join("fonts")
            .join(format!("{FONT_FAMILY}-webfont.ttf"))
    }

    pub(crate) fn css_path(&self) -> PathBuf {
        self.package_dir
            .join("css")
            .join(format!("{FONT_FAMILY}.min.css"))
    }

    /// Output directory with leading root / prefix components stripped, so
    /// that a caller-supplied absolute path cannot escape the working
    /// directory.
    pub(crate) fn output_dir(&self) -> PathBuf {
        self.output
            .components()
            .skip_while(|component| {
                matches!(component, Component::Prefix(_) | Component::RootDir)
            })
            .collect()
    }
}
