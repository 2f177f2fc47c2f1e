use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::color::SlotColors;
use crate::compare::{compare, ComparisonResult};
use crate::data::catalog::VehicleCatalog;
use crate::data::loader;
use crate::error::InvalidSelectionError;
use crate::export;
use crate::images::ImageCatalog;
use crate::session::SelectionSession;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Selections over the loaded catalog (None until a usable catalog is loaded).
    pub session: Option<SelectionSession>,

    /// Comparison of the three current selections (cached, rebuilt on change).
    pub comparison: Option<ComparisonResult>,

    /// Photo lookup for the comparison cards.
    pub images: ImageCatalog,

    pub colors: SlotColors,

    /// Delimiter used when (re)loading a vehicle table.
    pub delimiter: u8,

    /// Default target for "Export comparison".
    pub export_path: PathBuf,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: None,
            comparison: None,
            images: ImageCatalog::default(),
            colors: SlotColors::default(),
            delimiter: loader::DEFAULT_DELIMITER,
            export_path: PathBuf::from(export::DEFAULT_EXPORT_FILE),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog and start a fresh session on it.
    pub fn set_catalog(&mut self, catalog: VehicleCatalog) -> Result<(), InvalidSelectionError> {
        let session = SelectionSession::new(Arc::new(catalog))?;
        self.session = Some(session);
        self.status_message = None;
        self.recompare();
        Ok(())
    }

    /// Load a vehicle table from disk; on failure the current catalog stays.
    pub fn load_catalog(&mut self, path: &Path) -> Result<()> {
        let catalog = loader::load(path, self.delimiter)
            .with_context(|| format!("loading {}", path.display()))?;
        self.set_catalog(catalog)
            .with_context(|| format!("no selectable vehicles in {}", path.display()))?;
        Ok(())
    }

    pub fn catalog(&self) -> Option<&VehicleCatalog> {
        self.session.as_ref().map(|s| s.catalog())
    }

    pub fn set_brand(&mut self, slot: usize, brand: &str) {
        self.apply(|s| s.set_brand(slot, brand));
    }

    pub fn set_model(&mut self, slot: usize, model: &str) {
        self.apply(|s| s.set_model(slot, model));
    }

    pub fn set_year(&mut self, slot: usize, year: i32) {
        self.apply(|s| s.set_year(slot, year));
    }

    /// Run one selection change, then rebuild the comparison.
    fn apply<F>(&mut self, change: F)
    where
        F: FnOnce(&mut SelectionSession) -> Result<(), InvalidSelectionError>,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = change(session) {
            log::error!("Rejected selection: {e}");
            self.status_message = Some(format!("Error: {e}"));
            return;
        }
        self.recompare();
    }

    /// Rebuild `comparison` from the current selections.
    pub fn recompare(&mut self) {
        self.comparison = None;
        let Some(session) = &self.session else {
            return;
        };
        match session.current_vehicles() {
            Ok([a, b, c]) => self.comparison = Some(compare(a, b, c)),
            Err(e) => {
                log::error!("Cannot resolve selection: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Write the current comparison to `path`.
    pub fn export_to(&mut self, path: &Path) -> Result<()> {
        let comparison = self
            .comparison
            .as_ref()
            .context("nothing to export: no comparison yet")?;
        export::write_to_path(comparison, path)?;
        self.status_message = Some(format!("Exported to {}", path.display()));
        Ok(())
    }
}
