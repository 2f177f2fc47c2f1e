use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use super::catalog::VehicleCatalog;
use super::model::{Attribute, VehicleRecord};
use crate::error::DataLoadError;

/// Field delimiter of the public vehicle dataset.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Cells that count as missing besides the empty string.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the vehicle catalog from a delimited text file.
///
/// Only the eight comparison columns are read; everything else in the file is
/// ignored. Rows with a missing or untypeable value in any of those columns
/// are dropped, all other rows keep their file order.
pub fn load(path: &Path, delimiter: u8) -> Result<VehicleCatalog, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    let (catalog, stats) = read_catalog(file, delimiter)?;
    log_summary(&catalog, stats, &path.display().to_string());
    Ok(catalog)
}

/// Same as [`load`] over any byte source.
pub fn load_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<VehicleCatalog, DataLoadError> {
    let (catalog, stats) = read_catalog(reader, delimiter)?;
    log_summary(&catalog, stats, "reader");
    Ok(catalog)
}

/// Row counts of one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub read: usize,
    pub kept: usize,
    pub dropped: usize,
}

fn log_summary(catalog: &VehicleCatalog, stats: LoadStats, source: &str) {
    log::info!(
        "Read {} rows from {source}: kept {}, dropped {} ({} brands)",
        stats.read,
        stats.kept,
        stats.dropped,
        catalog.brands().len()
    );
}

/// Build the catalog and report how many rows were kept and dropped.
pub fn read_catalog<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<(VehicleCatalog, LoadStats), DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let row = result?;
        match columns.project(&row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                dropped += 1;
                let line = row.position().map(|p| p.line()).unwrap_or(0);
                log::debug!("Dropping line {line}: {reason}");
            }
        }
    }

    let stats = LoadStats {
        read: records.len() + dropped,
        kept: records.len(),
        dropped,
    };
    Ok((VehicleCatalog::from_records(records), stats))
}

// ---------------------------------------------------------------------------
// Header → field projection
// ---------------------------------------------------------------------------

/// Position of each required column in the source header.
struct ColumnIndex {
    positions: [usize; 8],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let mut positions = [0usize; 8];
        for (slot, attribute) in positions.iter_mut().zip(Attribute::ALL) {
            let wanted = attribute.source_column();
            *slot = headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == wanted)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: wanted.to_string(),
                })?;
        }
        Ok(ColumnIndex { positions })
    }

    fn cell<'r>(&self, row: &'r StringRecord, attribute: Attribute) -> Result<&'r str, RowDefect> {
        let idx = self.positions[attribute as usize];
        let raw = row.get(idx).unwrap_or("").trim();
        if is_missing(raw) {
            Err(RowDefect::Missing(attribute))
        } else {
            Ok(raw)
        }
    }

    fn text(&self, row: &StringRecord, attribute: Attribute) -> Result<String, RowDefect> {
        self.cell(row, attribute).map(str::to_string)
    }

    fn decimal(&self, row: &StringRecord, attribute: Attribute) -> Result<f64, RowDefect> {
        let raw = self.cell(row, attribute)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RowDefect::Unparseable(attribute, raw.to_string()))
    }

    fn year(&self, row: &StringRecord, attribute: Attribute) -> Result<i32, RowDefect> {
        let raw = self.cell(row, attribute)?;
        parse_year(raw).ok_or_else(|| RowDefect::Unparseable(attribute, raw.to_string()))
    }

    fn project(&self, row: &StringRecord) -> Result<VehicleRecord, RowDefect> {
        // Check presence of every column first so a missing value is reported
        // ahead of a parse failure elsewhere in the row.
        for attribute in Attribute::ALL {
            self.cell(row, attribute)?;
        }
        Ok(VehicleRecord {
            brand: self.text(row, Attribute::Brand)?,
            model: self.text(row, Attribute::Model)?,
            year: self.year(row, Attribute::Year)?,
            engine_displacement: self.decimal(row, Attribute::EngineDisplacement)?,
            fuel_type: self.text(row, Attribute::FuelType)?,
            transmission: self.text(row, Attribute::Transmission)?,
            combined_mpg: self.decimal(row, Attribute::CombinedMpg)?,
            annual_fuel_cost: self.decimal(row, Attribute::AnnualFuelCost)?,
        })
    }
}

/// Why a row was left out of the catalog.
#[derive(Debug, PartialEq)]
enum RowDefect {
    Missing(Attribute),
    Unparseable(Attribute, String),
}

impl std::fmt::Display for RowDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowDefect::Missing(a) => write!(f, "missing '{}'", a.source_column()),
            RowDefect::Unparseable(a, raw) => {
                write!(f, "'{}' value '{raw}' is not a number", a.source_column())
            }
        }
    }
}

fn is_missing(s: &str) -> bool {
    s.is_empty() || NA_TOKENS.contains(&s)
}

/// Accepts `2021` as well as `2021.0`.
fn parse_year(s: &str) -> Option<i32> {
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    let f = s.parse::<f64>().ok()?;
    if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}
