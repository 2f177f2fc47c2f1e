//! Window-less comparison: resolve three picks, print, export.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::compare::{compare, ComparisonResult};
use crate::config::Pick;
use crate::data::catalog::VehicleCatalog;
use crate::export;
use crate::session::{SelectionSession, SLOT_COUNT};

/// Drive a session through the same cascade the UI uses, print the table to
/// `out`, and write the export file.
pub fn run<W: Write>(
    catalog: Arc<VehicleCatalog>,
    picks: &[Pick; SLOT_COUNT],
    export_path: &Path,
    out: &mut W,
) -> Result<ComparisonResult> {
    let session = select(catalog, picks)?;
    let [a, b, c] = session.current_vehicles()?;
    let result = compare(a, b, c);

    print_table(&result, out).context("writing comparison")?;
    export::write_to_path(&result, export_path)?;
    writeln!(out, "\nSaved {}", export_path.display())?;
    Ok(result)
}

/// Apply each pick as brand, then model, then year.
pub fn select(catalog: Arc<VehicleCatalog>, picks: &[Pick; SLOT_COUNT]) -> Result<SelectionSession> {
    let mut session = SelectionSession::new(catalog)?;
    for (i, pick) in picks.iter().enumerate() {
        session
            .set_brand(i, &pick.brand)
            .and_then(|_| session.set_model(i, &pick.model))
            .and_then(|_| session.set_year(i, pick.year))
            .with_context(|| format!("pick {}: {}|{}|{}", i + 1, pick.brand, pick.model, pick.year))?;
    }
    Ok(session)
}

fn print_table<W: Write>(result: &ComparisonResult, out: &mut W) -> std::io::Result<()> {
    for i in 0..result.vehicles.len() {
        writeln!(out, "[{}] {}", i + 1, result.title(i))?;
    }
    writeln!(out)?;

    let width = result
        .attributes()
        .iter()
        .map(|a| a.label().chars().count())
        .max()
        .unwrap_or(0);
    let rows: Vec<Vec<String>> = (0..result.vehicles.len()).map(|i| result.row(i)).collect();

    for (col, attribute) in result.attributes().iter().enumerate() {
        let values: Vec<&str> = rows.iter().map(|r| r[col].as_str()).collect();
        writeln!(out, "{:<width$} | {}", attribute.label(), values.join(" | "))?;
    }
    Ok(())
}
