//! Error types for car-compare

use thiserror::Error;

/// Failure to produce a catalog from the source table. Always fatal.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// L001: Source could not be opened or read
    #[error("[L001] Cannot read data source '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// L002: Structurally malformed table (ragged row, bad encoding, ...)
    #[error("[L002] Malformed table: {0}")]
    Csv(#[from] csv::Error),

    /// L003: Required column absent from the header row
    #[error("[L003] Required column '{column}' missing from header")]
    MissingColumn { column: String },
}

/// A selection that would break the brand → model → year cascade.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidSelectionError {
    /// S001: Slot index out of range
    #[error("[S001] Slot {index} does not exist (expected 0..{count})")]
    NoSuchSlot { index: usize, count: usize },

    /// S002: Brand unknown or without models
    #[error("[S002] Brand '{brand}' has no models in the catalog")]
    UnknownBrand { brand: String },

    /// S003: Model not offered for the slot's brand
    #[error("[S003] Model '{model}' is not offered for brand '{brand}'")]
    UnknownModel { brand: String, model: String },

    /// S004: Year not offered for the slot's brand/model
    #[error("[S004] Year {year} is not offered for {brand} {model}")]
    UnknownYear {
        brand: String,
        model: String,
        year: i32,
    },

    /// S005: Nothing to select from
    #[error("[S005] Catalog is empty; no selection possible")]
    EmptyCatalog,
}

/// S006: `resolve` called with a triple the catalog does not contain.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[S006] No vehicle {brand} {model} ({year}) in catalog")]
pub struct NotFoundError {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

/// Either selection failure, for operations that can hit both.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error(transparent)]
    Invalid(#[from] InvalidSelectionError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Failure to serialise or save a comparison.
#[derive(Error, Debug)]
pub enum ExportError {
    /// X001: CSV serialisation failed
    #[error("[X001] Failed to encode comparison: {0}")]
    Encode(#[from] csv::Error),

    /// X002: Writing the export file failed
    #[error("[X002] Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
