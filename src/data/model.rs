use std::fmt;

// ---------------------------------------------------------------------------
// Attribute – one comparable column, in fixed display order
// ---------------------------------------------------------------------------

/// The eight vehicle attributes shown side by side and exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Brand,
    Model,
    Year,
    EngineDisplacement,
    FuelType,
    Transmission,
    CombinedMpg,
    AnnualFuelCost,
}

impl Attribute {
    /// All attributes in display/export order.
    pub const ALL: [Attribute; 8] = [
        Attribute::Brand,
        Attribute::Model,
        Attribute::Year,
        Attribute::EngineDisplacement,
        Attribute::FuelType,
        Attribute::Transmission,
        Attribute::CombinedMpg,
        Attribute::AnnualFuelCost,
    ];

    /// Column name in the source table.
    pub fn source_column(self) -> &'static str {
        match self {
            Attribute::Brand => "make",
            Attribute::Model => "model",
            Attribute::Year => "year",
            Attribute::EngineDisplacement => "engine_displacement",
            Attribute::FuelType => "fuel_type",
            Attribute::Transmission => "transmission",
            Attribute::CombinedMpg => "combined_mpg_for_fuel_type1",
            Attribute::AnnualFuelCost => "annual_fuel_cost_for_fuel_type1",
        }
    }

    /// Display label used in the UI and as the export header.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Brand => "브랜드",
            Attribute::Model => "모델명",
            Attribute::Year => "연식",
            Attribute::EngineDisplacement => "배기량 (L)",
            Attribute::FuelType => "연료",
            Attribute::Transmission => "변속기",
            Attribute::CombinedMpg => "복합연비 (mpg)",
            Attribute::AnnualFuelCost => "연간 연료비 (USD)",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// VehicleRecord – one fully-typed row of the source table
// ---------------------------------------------------------------------------

/// A single vehicle. Every field is present; incomplete rows never make it
/// past the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Litres.
    pub engine_displacement: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub combined_mpg: f64,
    /// USD per year.
    pub annual_fuel_cost: f64,
}

impl VehicleRecord {
    /// Render one attribute in its natural string form (`20`, `2.7`, `Ford`).
    pub fn value(&self, attribute: Attribute) -> String {
        match attribute {
            Attribute::Brand => self.brand.clone(),
            Attribute::Model => self.model.clone(),
            Attribute::Year => self.year.to_string(),
            Attribute::EngineDisplacement => litres(self.engine_displacement),
            Attribute::FuelType => self.fuel_type.clone(),
            Attribute::Transmission => self.transmission.clone(),
            Attribute::CombinedMpg => self.combined_mpg.to_string(),
            Attribute::AnnualFuelCost => self.annual_fuel_cost.to_string(),
        }
    }

    /// Whether this record carries the given identity key.
    pub fn matches(&self, brand: &str, model: &str, year: i32) -> bool {
        self.brand == brand && self.model == model && self.year == year
    }
}

/// Displacement keeps one decimal place for whole litres (`3.0`, `2.7`).
fn litres(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.brand, self.model, self.year)
    }
}
