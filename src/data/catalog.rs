use std::collections::BTreeMap;

use super::model::VehicleRecord;
use crate::error::NotFoundError;

// ---------------------------------------------------------------------------
// Cascade indices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
struct ModelEntry {
    /// Unique years, newest first.
    years: Vec<i32>,
    /// year → row of the first record with that key.
    first_row: BTreeMap<i32, usize>,
}

#[derive(Debug, Clone, Default)]
struct BrandEntry {
    /// Unique models in first-seen order.
    models: Vec<String>,
    by_model: BTreeMap<String, ModelEntry>,
}

// ---------------------------------------------------------------------------
// VehicleCatalog – immutable table with brand → model → year lookups
// ---------------------------------------------------------------------------

/// The full read-only vehicle table.
///
/// Built once from loaded records; the cascading lookups are precomputed so
/// every query is a map lookup rather than a scan.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    records: Vec<VehicleRecord>,
    /// Unique brands in first-seen order.
    brands: Vec<String>,
    by_brand: BTreeMap<String, BrandEntry>,
}

impl VehicleCatalog {
    /// Build the lookup indices over `records`, keeping their order.
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        let mut brands = Vec::new();
        let mut by_brand: BTreeMap<String, BrandEntry> = BTreeMap::new();

        for (row, rec) in records.iter().enumerate() {
            if !by_brand.contains_key(&rec.brand) {
                brands.push(rec.brand.clone());
            }
            let brand = by_brand.entry(rec.brand.clone()).or_default();

            if !brand.by_model.contains_key(&rec.model) {
                brand.models.push(rec.model.clone());
            }
            let model = brand.by_model.entry(rec.model.clone()).or_default();
            // First occurrence of a (brand, model, year) key wins.
            model.first_row.entry(rec.year).or_insert(row);
        }

        for brand in by_brand.values_mut() {
            for model in brand.by_model.values_mut() {
                model.years = model.first_row.keys().rev().copied().collect();
            }
        }

        VehicleCatalog {
            records,
            brands,
            by_brand,
        }
    }

    /// All records in load order.
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique brands, first-seen order.
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Unique models of `brand`, first-seen order. Empty for an unknown brand.
    pub fn models(&self, brand: &str) -> &[String] {
        self.by_brand
            .get(brand)
            .map(|b| b.models.as_slice())
            .unwrap_or(&[])
    }

    /// Unique years of `(brand, model)`, newest first. Empty for an unknown pair.
    pub fn years(&self, brand: &str, model: &str) -> &[i32] {
        self.model_entry(brand, model)
            .map(|m| m.years.as_slice())
            .unwrap_or(&[])
    }

    /// The record with exactly this key; the first one in load order if the
    /// key is duplicated.
    pub fn resolve(&self, brand: &str, model: &str, year: i32) -> Result<&VehicleRecord, NotFoundError> {
        self.model_entry(brand, model)
            .and_then(|m| m.first_row.get(&year))
            .and_then(|&row| self.records.get(row))
            .ok_or_else(|| NotFoundError {
                brand: brand.to_string(),
                model: model.to_string(),
                year,
            })
    }

    fn model_entry(&self, brand: &str, model: &str) -> Option<&ModelEntry> {
        self.by_brand.get(brand)?.by_model.get(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(brand: &str, model: &str, year: i32, mpg: f64) -> VehicleRecord {
        VehicleRecord {
            brand: brand.into(),
            model: model.into(),
            year,
            engine_displacement: 2.0,
            fuel_type: "Gasoline".into(),
            transmission: "Automatic".into(),
            combined_mpg: mpg,
            annual_fuel_cost: 1500.0,
        }
    }

    fn sample() -> VehicleCatalog {
        VehicleCatalog::from_records(vec![
            rec("Honda", "Civic", 2015, 33.0),
            rec("Ford", "F150", 2019, 20.0),
            rec("Honda", "Accord", 2018, 35.0),
            rec("Honda", "Civic", 2020, 36.0),
            rec("Honda", "Civic", 2017, 34.0),
            rec("Honda", "Civic", 2020, 99.0),
        ])
    }

    #[test]
    fn brands_and_models_keep_first_seen_order() {
        let c = sample();
        assert_eq!(c.brands(), ["Honda", "Ford"]);
        assert_eq!(c.models("Honda"), ["Civic", "Accord"]);
        assert_eq!(c.models("Ford"), ["F150"]);
    }

    #[test]
    fn years_are_unique_and_descending() {
        assert_eq!(sample().years("Honda", "Civic"), [2020, 2017, 2015]);
    }

    #[test]
    fn unknown_keys_give_empty_lookups() {
        let c = sample();
        assert!(c.models("Tesla").is_empty());
        assert!(c.years("Honda", "F150").is_empty());
        assert!(c.years("Tesla", "Model 3").is_empty());
    }

    #[test]
    fn resolve_prefers_first_duplicate() {
        let c = sample();
        let v = c.resolve("Honda", "Civic", 2020).unwrap();
        assert_eq!(v.combined_mpg, 36.0);
    }

    #[test]
    fn resolve_miss_is_not_found() {
        let err = sample().resolve("Ford", "F150", 1990).unwrap_err();
        assert_eq!(
            err,
            NotFoundError {
                brand: "Ford".into(),
                model: "F150".into(),
                year: 1990
            }
        );
    }

    #[test]
    fn cascade_lookups_resolve_to_matching_records() {
        let c = sample();
        for brand in c.brands() {
            let models = c.models(brand);
            assert!(!models.is_empty());
            for model in models {
                let years = c.years(brand, model);
                assert!(!years.is_empty());
                assert!(years.windows(2).all(|w| w[0] > w[1]));
                for &year in years {
                    assert!(c.resolve(brand, model, year).unwrap().matches(brand, model, year));
                }
            }
        }
    }
}
