//! Data layer: vehicle records, loading, and the cascading catalog.
//!
//! Architecture:
//! ```text
//!  all-vehicles-model@public.csv  (';'-delimited)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  project 8 columns, drop incomplete rows
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────────┐
//!   │ VehicleCatalog  │  Vec<VehicleRecord>, brand → model → year index
//!   └────────────────┘
//! ```

pub mod catalog;
pub mod loader;
pub mod model;
