use std::sync::Arc;

use crate::data::catalog::VehicleCatalog;
use crate::data::model::VehicleRecord;
use crate::error::{InvalidSelectionError, SelectionError};

/// Number of vehicles compared side by side.
pub const SLOT_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// SelectionSlot – one brand → model → year cursor
// ---------------------------------------------------------------------------

/// One vehicle pick. Only constructed from catalog lookups, so the triple
/// always names a vehicle that exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSlot {
    brand: String,
    model: String,
    year: i32,
}

impl SelectionSlot {
    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First model and newest year of `brand`.
    fn defaults_for_brand(catalog: &VehicleCatalog, brand: &str) -> Result<Self, InvalidSelectionError> {
        let model = catalog
            .models(brand)
            .first()
            .ok_or_else(|| InvalidSelectionError::UnknownBrand {
                brand: brand.to_string(),
            })?;
        Self::defaults_for_model(catalog, brand, model)
    }

    /// Newest year of `(brand, model)`.
    fn defaults_for_model(
        catalog: &VehicleCatalog,
        brand: &str,
        model: &str,
    ) -> Result<Self, InvalidSelectionError> {
        let year = catalog
            .years(brand, model)
            .first()
            .copied()
            .ok_or_else(|| InvalidSelectionError::UnknownModel {
                brand: brand.to_string(),
                model: model.to_string(),
            })?;
        Ok(SelectionSlot {
            brand: brand.to_string(),
            model: model.to_string(),
            year,
        })
    }
}

// ---------------------------------------------------------------------------
// SelectionSession – three independent slots over one catalog
// ---------------------------------------------------------------------------

/// The per-user selection state.
///
/// Every setter validates against the catalog and computes the complete new
/// slot before assigning it, so a slot is never observed holding a
/// combination the catalog does not contain. On error the slot is untouched.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    catalog: Arc<VehicleCatalog>,
    slots: [SelectionSlot; SLOT_COUNT],
}

impl SelectionSession {
    /// Start every slot on the first brand, its first model and newest year.
    pub fn new(catalog: Arc<VehicleCatalog>) -> Result<Self, InvalidSelectionError> {
        let brand = catalog
            .brands()
            .first()
            .ok_or(InvalidSelectionError::EmptyCatalog)?;
        let initial = SelectionSlot::defaults_for_brand(&catalog, brand)?;
        Ok(SelectionSession {
            slots: [initial.clone(), initial.clone(), initial],
            catalog,
        })
    }

    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    pub fn slots(&self) -> &[SelectionSlot; SLOT_COUNT] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&SelectionSlot, InvalidSelectionError> {
        self.slots.get(index).ok_or(InvalidSelectionError::NoSuchSlot {
            index,
            count: SLOT_COUNT,
        })
    }

    /// Pick a brand; model and year fall back to the brand's first model and
    /// that model's newest year.
    pub fn set_brand(&mut self, index: usize, brand: &str) -> Result<(), InvalidSelectionError> {
        self.slot(index)?;
        let next = SelectionSlot::defaults_for_brand(&self.catalog, brand)?;
        log::debug!("Slot {index}: brand → {brand} ({} {})", next.model, next.year);
        self.slots[index] = next;
        Ok(())
    }

    /// Pick a model of the slot's current brand; year falls back to the newest.
    pub fn set_model(&mut self, index: usize, model: &str) -> Result<(), InvalidSelectionError> {
        let brand = self.slot(index)?.brand.clone();
        if !self.catalog.models(&brand).iter().any(|m| m == model) {
            return Err(InvalidSelectionError::UnknownModel {
                brand,
                model: model.to_string(),
            });
        }
        let next = SelectionSlot::defaults_for_model(&self.catalog, &brand, model)?;
        log::debug!("Slot {index}: model → {model} ({})", next.year);
        self.slots[index] = next;
        Ok(())
    }

    /// Pick a year offered for the slot's current brand and model.
    pub fn set_year(&mut self, index: usize, year: i32) -> Result<(), InvalidSelectionError> {
        let slot = self.slot(index)?;
        if !self.catalog.years(&slot.brand, &slot.model).contains(&year) {
            return Err(InvalidSelectionError::UnknownYear {
                brand: slot.brand.clone(),
                model: slot.model.clone(),
                year,
            });
        }
        log::debug!("Slot {index}: year → {year}");
        self.slots[index].year = year;
        Ok(())
    }

    /// The vehicle the slot currently points at.
    pub fn current_vehicle(&self, index: usize) -> Result<&VehicleRecord, SelectionError> {
        let slot = self.slot(index)?;
        Ok(self.catalog.resolve(&slot.brand, &slot.model, slot.year)?)
    }

    /// All three current vehicles in slot order.
    pub fn current_vehicles(&self) -> Result<[&VehicleRecord; SLOT_COUNT], SelectionError> {
        Ok([
            self.current_vehicle(0)?,
            self.current_vehicle(1)?,
            self.current_vehicle(2)?,
        ])
    }
}
