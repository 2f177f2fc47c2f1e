use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Shown for any (brand, model) without a known photo.
pub const PLACEHOLDER_URL: &str = "https://via.placeholder.com/300x200?text=No+Image";

const BUILTIN: &[(&str, &str, &str)] = &[
    (
        "Ford",
        "Bronco 4WD",
        "https://upload.wikimedia.org/wikipedia/commons/e/e1/2021_Ford_Bronco.jpg",
    ),
    (
        "Chevrolet",
        "S10 Pickup",
        "https://upload.wikimedia.org/wikipedia/commons/6/6f/1995_Chevrolet_S-10_4x4.jpg",
    ),
    (
        "Honda",
        "Accord",
        "https://upload.wikimedia.org/wikipedia/commons/0/0e/2018_Honda_Accord.jpg",
    ),
];

/// One entry of a user-supplied image map file.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageEntry {
    pub brand: String,
    pub model: String,
    pub url: String,
}

/// (brand, model) → photo URL, with a placeholder fallback.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    urls: BTreeMap<(String, String), String>,
}

impl Default for ImageCatalog {
    fn default() -> Self {
        let urls = BUILTIN
            .iter()
            .map(|&(brand, model, url)| ((brand.to_string(), model.to_string()), url.to_string()))
            .collect();
        ImageCatalog { urls }
    }
}

impl ImageCatalog {
    /// Built-in entries extended (and overridden) by a JSON array of
    /// `{ "brand", "model", "url" }` objects.
    pub fn with_overrides(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading image map {}", path.display()))?;
        let entries: Vec<ImageEntry> = serde_json::from_str(&text).context("parsing image map JSON")?;
        let mut catalog = ImageCatalog::default();
        catalog.extend(entries);
        log::info!("Image map: {} entries", catalog.urls.len());
        Ok(catalog)
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = ImageEntry>) {
        for e in entries {
            self.urls.insert((e.brand, e.model), e.url);
        }
    }

    pub fn url_for(&self, brand: &str, model: &str) -> &str {
        self.urls
            .get(&(brand.to_string(), model.to_string()))
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_URL)
    }
}
