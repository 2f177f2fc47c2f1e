// tests/cascade.rs
//
// Cascade invariants over a catalog with duplicates, gaps and dropped rows.
use std::sync::Arc;

use car_compare::data::catalog::VehicleCatalog;
use car_compare::data::loader::{load_from_reader, DEFAULT_DELIMITER};
use car_compare::session::{SelectionSession, SLOT_COUNT};

const TABLE: &str = "\
make;model;year;engine_displacement;fuel_type;transmission;combined_mpg_for_fuel_type1;annual_fuel_cost_for_fuel_type1
Toyota;Corolla;2010;1.8;Regular;Automatic 4-spd;29;1550
Toyota;Camry;2012;2.5;Regular;Automatic (S6);28;1600
Toyota;Corolla;2014;1.8;Regular;Automatic (AV);32;1400
Toyota;Corolla;2010;1.8;Regular;Manual 5-spd;30;1500
BMW;M3;2008;4.0;Premium;Manual 6-spd;16;2900
BMW;M3;;4.0;Premium;Manual 6-spd;16;2900
Lada;Niva;1995;1.7;NA;Manual 5-spd;18;2300
Toyota;Prius;2014;1.8;Regular;Automatic (AV);50;900
";

fn catalog() -> Arc<VehicleCatalog> {
    Arc::new(load_from_reader(TABLE.as_bytes(), DEFAULT_DELIMITER).unwrap())
}

#[test]
fn incomplete_rows_never_reach_the_catalog() {
    let c = catalog();
    assert_eq!(c.len(), 6);
    assert_eq!(c.brands(), ["Toyota", "BMW"]);
    assert_eq!(c.years("BMW", "M3"), [2008]);
}

#[test]
fn every_lookup_is_consistent() {
    let c = catalog();
    for brand in c.brands() {
        let models = c.models(brand);
        assert!(!models.is_empty());
        let mut dedup = models.to_vec();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), models.len(), "duplicate model for {brand}");

        for model in models {
            let years = c.years(brand, model);
            assert!(!years.is_empty());
            assert!(years.windows(2).all(|w| w[0] > w[1]), "{brand} {model}: {years:?}");
            for &year in years {
                let v = c.resolve(brand, model, year).unwrap();
                assert_eq!((v.brand.as_str(), v.model.as_str(), v.year), (brand.as_str(), model.as_str(), year));
            }
        }
    }
}

#[test]
fn duplicate_key_resolves_to_first_row() {
    let v = catalog().resolve("Toyota", "Corolla", 2010).unwrap().clone();
    assert_eq!(v.transmission, "Automatic 4-spd");
}

#[test]
fn walking_every_brand_and_model_keeps_slots_valid() {
    let c = catalog();
    let mut session = SelectionSession::new(c.clone()).unwrap();

    for slot in 0..SLOT_COUNT {
        for brand in c.brands() {
            session.set_brand(slot, brand).unwrap();
            assert!(session.current_vehicle(slot).is_ok());
            for model in c.models(brand) {
                session.set_model(slot, model).unwrap();
                assert_eq!(session.slot(slot).unwrap().year(), c.years(brand, model)[0]);
                for &year in c.years(brand, model) {
                    session.set_year(slot, year).unwrap();
                    let v = session.current_vehicle(slot).unwrap();
                    assert!(v.matches(brand, model, year));
                }
            }
        }
    }
}
