use crate::data::model::{Attribute, VehicleRecord};
use crate::session::SLOT_COUNT;

// ---------------------------------------------------------------------------
// ComparisonResult – display-ready bundle of three vehicles
// ---------------------------------------------------------------------------

/// Three vehicles in slot order plus the slot with the best combined mpg.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub vehicles: [VehicleRecord; SLOT_COUNT],
    /// Slot with the highest `combined_mpg`; the lowest slot wins a tie.
    pub best_index: usize,
}

impl ComparisonResult {
    /// Attributes in display/export order.
    pub fn attributes(&self) -> &'static [Attribute] {
        &Attribute::ALL
    }

    pub fn best(&self) -> &VehicleRecord {
        &self.vehicles[self.best_index]
    }

    pub fn is_best(&self, index: usize) -> bool {
        index == self.best_index
    }

    /// One string per attribute for the vehicle in `index`.
    pub fn row(&self, index: usize) -> Vec<String> {
        let vehicle = &self.vehicles[index];
        self.attributes().iter().map(|&a| vehicle.value(a)).collect()
    }

    /// Card title, e.g. `Honda Accord (2018) ⭐️`.
    pub fn title(&self, index: usize) -> String {
        let mut title = self.vehicles[index].to_string();
        if self.is_best(index) {
            title.push_str(" ⭐️");
        }
        title
    }
}

/// Compare three vehicles by fuel efficiency.
pub fn compare(v0: &VehicleRecord, v1: &VehicleRecord, v2: &VehicleRecord) -> ComparisonResult {
    let vehicles = [v0.clone(), v1.clone(), v2.clone()];
    let best_index = best_by(&vehicles, |v| v.combined_mpg);
    ComparisonResult {
        vehicles,
        best_index,
    }
}

/// Index of the maximum key; strict `>` keeps the earliest on ties.
fn best_by<F>(vehicles: &[VehicleRecord], key: F) -> usize
where
    F: Fn(&VehicleRecord) -> f64,
{
    let mut best = 0;
    for (i, v) in vehicles.iter().enumerate().skip(1) {
        if key(v) > key(&vehicles[best]) {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_mpg(model: &str, mpg: f64) -> VehicleRecord {
        VehicleRecord {
            brand: "Test".into(),
            model: model.into(),
            year: 2020,
            engine_displacement: 2.0,
            fuel_type: "Gasoline".into(),
            transmission: "Automatic".into(),
            combined_mpg: mpg,
            annual_fuel_cost: 1000.0,
        }
    }

    fn best(mpgs: [f64; 3]) -> usize {
        let [a, b, c] = mpgs.map(|m| with_mpg("M", m));
        compare(&a, &b, &c).best_index
    }

    #[test]
    fn picks_highest_mpg() {
        assert_eq!(best([20.0, 35.0, 17.0]), 1);
        assert_eq!(best([20.0, 15.0, 40.0]), 2);
        assert_eq!(best([50.0, 15.0, 40.0]), 0);
    }

    #[test]
    fn ties_go_to_lowest_slot() {
        assert_eq!(best([30.0, 45.0, 45.0]), 1);
        assert_eq!(best([45.0, 45.0, 45.0]), 0);
        assert_eq!(best([10.0, 10.0, 45.0]), 2);
    }

    #[test]
    fn keeps_slot_order_and_marks_title() {
        let (a, b, c) = (with_mpg("A", 20.0), with_mpg("B", 35.0), with_mpg("C", 17.0));
        let result = compare(&a, &b, &c);
        let models: Vec<&str> = result.vehicles.iter().map(|v| v.model.as_str()).collect();
        assert_eq!(models, ["A", "B", "C"]);
        assert_eq!(result.best().model, "B");
        assert_eq!(result.title(1), "Test B (2020) ⭐️");
        assert_eq!(result.title(0), "Test A (2020)");
        assert_eq!(result.row(2)[6], "17");
    }
}
