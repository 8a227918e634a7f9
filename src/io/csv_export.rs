use std::path::Path;

use crate::model::SegmentRow;

/// Serialize rows to CSV text. The caller passes rows already in display
/// order; timestamps come out as `YYYY-MM-DDTHH:MM:SS`.
pub fn rows_to_csv(rows: &[SegmentRow]) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| format!("Failed to write row for '{}': {}", row.task, e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush CSV: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("CSV output was not UTF-8: {}", e))
}

/// Write the project rows to a CSV file. Returns the number of rows written.
pub fn export_csv(rows: &[SegmentRow], path: &Path) -> Result<usize, String> {
    let text = rows_to_csv(rows)?;
    std::fs::write(path, text).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(rows.len())
}
