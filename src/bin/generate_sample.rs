use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (brand, model, base displacement L, base combined mpg)
const MODELS: &[(&str, &str, f64, f64)] = &[
    ("Ford", "Bronco 4WD", 2.7, 20.0),
    ("Ford", "F150 Pickup 2WD", 3.5, 21.0),
    ("Ford", "Mustang", 5.0, 19.0),
    ("Honda", "Accord", 1.5, 33.0),
    ("Honda", "Civic", 2.0, 34.0),
    ("Chevrolet", "S10 Pickup", 4.3, 17.0),
    ("Chevrolet", "Malibu", 1.5, 30.0),
    ("Toyota", "Prius", 1.8, 50.0),
    ("Hyundai", "Sonata", 2.5, 31.0),
    ("Kia", "Rio", 1.6, 36.0),
];

const FUELS: &[&str] = &["Regular Gasoline", "Premium Gasoline", "Diesel"];
const TRANSMISSIONS: &[&str] = &["Automatic (S6)", "Automatic (AV-S7)", "Manual 5-spd", "Automatic 4-spd"];

const HEADER: &[&str] = &[
    "id",
    "make",
    "model",
    "year",
    "cylinders",
    "engine_displacement",
    "fuel_type",
    "transmission",
    "combined_mpg_for_fuel_type1",
    "annual_fuel_cost_for_fuel_type1",
    "co2_fuel_type1",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "vehicles_sample.csv";

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADER)?;

    let mut row_id = 0u32;
    for &(brand, model, displacement, mpg) in MODELS {
        for year in (1995..=2023).step_by(4) {
            row_id += 1;
            // Older cars burn a little more fuel.
            let age_penalty = (2023 - year) as f64 * 0.15;
            let combined = (mpg - age_penalty + rng.next_f64() * 3.0).round().max(8.0);
            let cost = (35_000.0 / combined / 50.0).round() * 50.0;
            let cylinders = if displacement > 3.0 { 6 } else { 4 };

            // Every 13th row loses a value so the loader has something to drop.
            let fuel = if row_id % 13 == 0 { "" } else { rng.pick(FUELS) };

            writer.write_record([
                row_id.to_string(),
                brand.to_string(),
                model.to_string(),
                year.to_string(),
                cylinders.to_string(),
                format!("{displacement:.1}"),
                fuel.to_string(),
                rng.pick(TRANSMISSIONS).to_string(),
                combined.to_string(),
                cost.to_string(),
                ((8887.0 / combined).round()).to_string(),
            ])?;
        }
    }
    writer.flush().context("flushing sample file")?;

    println!("Wrote {row_id} vehicles to {output_path}");
    Ok(())
}
