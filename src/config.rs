//! Command-line options and the validated runtime configuration.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Result};
use clap::Parser;

use crate::export::DEFAULT_EXPORT_FILE;
use crate::session::SLOT_COUNT;

/// File name of the public vehicle dataset.
pub const DEFAULT_DATA_FILE: &str = "all-vehicles-model@public.csv";

/// car-compare - pick three vehicles and compare their specs side by side
#[derive(Parser, Debug)]
#[command(name = "car-compare")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Vehicle table to load
    #[arg(default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Field delimiter of the vehicle table
    #[arg(short, long, default_value_t = ';')]
    pub delimiter: char,

    /// JSON file with extra (brand, model) → image URL entries
    #[arg(short, long)]
    pub images: Option<PathBuf>,

    /// Compare without a window: give exactly three BRAND|MODEL|YEAR picks
    #[arg(long = "pick", value_name = "BRAND|MODEL|YEAR")]
    pub picks: Vec<Pick>,

    /// Where to write the comparison CSV
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Enable debug logging (when RUST_LOG is unset)
    #[arg(short, long)]
    pub verbose: bool,
}

/// A headless selection, `Ford|Bronco 4WD|2021`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

impl FromStr for Pick {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('|').map(str::trim).collect();
        let [brand, model, year] = parts.as_slice() else {
            return Err(format!("expected BRAND|MODEL|YEAR, got '{s}'"));
        };
        if brand.is_empty() || model.is_empty() {
            return Err(format!("brand and model must not be empty in '{s}'"));
        }
        let year = year
            .parse::<i32>()
            .map_err(|_| format!("year '{year}' is not a number"))?;
        Ok(Pick {
            brand: brand.to_string(),
            model: model.to_string(),
            year,
        })
    }
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub delimiter: u8,
    pub images_path: Option<PathBuf>,
    /// Present in headless mode only.
    pub picks: Option<[Pick; SLOT_COUNT]>,
    pub export_path: PathBuf,
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<AppConfig> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }
        let picks = match <[Pick; SLOT_COUNT]>::try_from(self.picks) {
            Ok(picks) => Some(picks),
            Err(picks) if picks.is_empty() => None,
            Err(picks) => bail!("Expected {SLOT_COUNT} --pick arguments, got {}", picks.len()),
        };
        Ok(AppConfig {
            data_path: self.data,
            delimiter: self.delimiter as u8,
            images_path: self.images,
            picks,
            export_path: self
                .export
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE)),
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig> {
        let cli = Cli::try_parse_from(std::iter::once("car-compare").chain(args.iter().copied()))?;
        cli.into_config()
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(cfg.delimiter, b';');
        assert_eq!(cfg.export_path, PathBuf::from(DEFAULT_EXPORT_FILE));
        assert!(cfg.picks.is_none());
        assert!(!cfg.verbose);
    }

    #[test]
    fn three_picks_enable_headless() {
        let cfg = parse(&[
            "cars.csv",
            "--pick",
            "Ford|Bronco 4WD|2021",
            "--pick",
            "Honda|Accord|2018",
            "--pick",
            "Chevrolet|S10 Pickup|1995",
            "-d",
            ",",
        ])
        .unwrap();
        let picks = cfg.picks.unwrap();
        assert_eq!(picks[1].model, "Accord");
        assert_eq!(picks[2].year, 1995);
        assert_eq!(cfg.delimiter, b',');
    }

    #[test]
    fn wrong_pick_count_is_rejected() {
        assert!(parse(&["--pick", "Ford|Bronco 4WD|2021"]).is_err());
    }

    #[test]
    fn malformed_pick_is_rejected() {
        assert!("Ford|Bronco".parse::<Pick>().is_err());
        assert!("Ford|Bronco|soon".parse::<Pick>().is_err());
        assert!("|Bronco|2021".parse::<Pick>().is_err());
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        assert!(parse(&["-d", "；"]).is_err());
    }
}
