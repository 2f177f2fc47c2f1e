use std::path::Path;

use crate::compare::ComparisonResult;
use crate::error::ExportError;

/// UTF-8 byte-order mark, so spreadsheet apps pick the right encoding for
/// the Korean labels.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// File name offered for a saved comparison.
pub const DEFAULT_EXPORT_FILE: &str = "차량_비교_결과.csv";

/// Serialise a comparison as BOM-prefixed, comma-separated UTF-8:
/// one header row of display labels, then one row per slot in slot order.
pub fn encode(result: &ComparisonResult) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(result.attributes().iter().map(|a| a.label()))?;
    for index in 0..result.vehicles.len() {
        writer.write_record(result.row(index))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Encode(csv::Error::from(e.into_error())))
}

/// Encode and write to `path`, replacing any existing file.
pub fn write_to_path(result: &ComparisonResult, path: &Path) -> Result<(), ExportError> {
    let bytes = encode(result)?;
    std::fs::write(path, bytes).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Exported comparison to {}", path.display());
    Ok(())
}
