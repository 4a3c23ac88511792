//! Orchestration of a subsetting run.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use tracing::{error, info};

use crate::{
    css,
    engine::{FontContainer, SubsetEngine, SubsetRequest},
    errors::{SourceKind, SubsetError},
    store::FileStore,
    SubsetOptions,
};

/// Base name shared by the font and stylesheet artifacts of the `@mdi/font`
/// package.
pub const FONT_FAMILY: &str = "materialdesignicons";

/// Outcome of a subsetting run.
///
/// Failures do not propagate as errors; they are logged and folded into the
/// outcome so that a misconfigured subsetting step does not abort the
/// enclosing build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All five output artifacts were generated.
    Generated,
    /// All output artifacts already existed; nothing was regenerated.
    /// Presence-based only: stale outputs are not detected.
    Skipped,
    /// Font artifacts were generated, but writing the rewritten stylesheet
    /// failed. The font artifacts are left in place.
    Partial,
    /// Generation failed before any stylesheet was written.
    Failed,
}

/// Sequences one subsetting pass: source validation, the short-circuit
/// presence check, the pure stylesheet transforms, the engine invocation and
/// the output writes.
///
/// Runs are independent as long as they target distinct output directories;
/// no cross-run locking is provided or needed.
#[derive(Debug)]
pub struct Subsetter<E, S> {
    options: SubsetOptions,
    engine: E,
    store: S,
}

impl<E: SubsetEngine, S: FileStore> Subsetter<E, S> {
    /// Creates a subsetter over the given engine and file store.
    pub fn new(options: SubsetOptions, engine: E, store: S) -> Self {
        Self {
            options,
            engine,
            store,
        }
    }

    /// Runs the subsetting pass to completion.
    ///
    /// All diagnostics go to the log; the returned [`Outcome`] is the only
    /// signal handed back to the caller.
    pub fn run(&self) -> Outcome {
        let output_dir = self.options.output_dir();
        let names = self.options.name_set();

        let source_css = match self.generate_fonts(&output_dir, &names) {
            Ok(Some(css)) => css,
            Ok(None) => return Outcome::Skipped,
            Err(err) => {
                error!("❌{} Subset mdi fonts generation failed: {err}", self.prefix());
                return Outcome::Failed;
            }
        };

        if let Err(err) = self.write_stylesheet(&output_dir, &source_css, &names) {
            error!("❌{} Subset mdi .css generation failed: {err}", self.prefix());
            return Outcome::Partial;
        }
        self.info(&format!(
            "Subset mdi fonts generated at {}",
            output_dir.display()
        ));
        Outcome::Generated
    }

    /// Generates the four font artifacts. Returns the source stylesheet text
    /// for the rewrite step, or `None` if all outputs already exist.
    fn generate_fonts(
        &self,
        output_dir: &Path,
        names: &BTreeSet<String>,
    ) -> Result<Option<String>, SubsetError> {
        let font_path = self.options.font_path();
        if !self.store.exists(&font_path) {
            return Err(SubsetError::MissingSource {
                kind: SourceKind::Font,
                path: font_path,
            });
        }
        let css_path = self.options.css_path();
        if !self.store.exists(&css_path) {
            return Err(SubsetError::MissingSource {
                kind: SourceKind::Stylesheet,
                path: css_path,
            });
        }

        if self.outputs_exist(output_dir) {
            self.info("Font files already exist, skipping generation.");
            return Ok(None);
        }
        self.info("Starting subset mdi fonts generation...");

        self.store
            .create_dir_all(output_dir)
            .map_err(|source| SubsetError::Write {
                path: output_dir.to_owned(),
                source,
            })?;

        let source_css =
            self.store
                .read_to_string(&css_path)
                .map_err(|source| SubsetError::Read {
                    path: css_path,
                    source,
                })?;
        let rules = css::parse_icon_rules(&source_css, names);
        let glyphs = css::glyph_string(&rules)?;

        let font = self
            .store
            .read(&font_path)
            .map_err(|source| SubsetError::Read {
                path: font_path,
                source,
            })?;
        let request = SubsetRequest {
            font: &font,
            glyphs: &glyphs,
            hinting: self.options.hinting,
        };
        let artifacts = self.engine.subset(&request).map_err(SubsetError::Engine)?;

        for container in FontContainer::ALL {
            let path = Self::webfont_path(output_dir, container);
            self.store
                .write(&path, artifacts.get(container))
                .map_err(|source| SubsetError::Write { path, source })?;
        }
        Ok(Some(source_css))
    }

    fn write_stylesheet(
        &self,
        output_dir: &Path,
        source_css: &str,
        names: &BTreeSet<String>,
    ) -> Result<(), SubsetError> {
        let rewritten = css::rewrite_stylesheet(source_css, names);
        let path = output_dir.join(format!("{FONT_FAMILY}.min.css"));
        self.store
            .write(&path, rewritten.as_bytes())
            .map_err(|source| SubsetError::Write { path, source })
    }

    fn outputs_exist(&self, output_dir: &Path) -> bool {
        let stylesheet = output_dir.join(format!("{FONT_FAMILY}.min.css"));
        self.store.exists(&stylesheet)
            && FontContainer::ALL
                .into_iter()
                .all(|container| self.store.exists(&Self::webfont_path(output_dir, container)))
    }

    fn webfont_path(output_dir: &Path, container: FontContainer) -> PathBuf {
        output_dir.join(format!("{FONT_FAMILY}-webfont.{}", container.extension()))
    }

    fn prefix(&self) -> String {
        if self.options.log_prefix.is_empty() {
            String::new()
        } else {
            format!(" {}", self.options.log_prefix)
        }
    }

    fn info(&self, message: &str) {
        if !self.options.silent {
            info!("✅{} {message}", self.prefix());
        }
    }
}
