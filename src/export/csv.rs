use super::model::AttendanceExport;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Write attendance rows as CSV, header row first.
pub fn write_csv(path: &Path, rows: &[AttendanceExport]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    // serialize() only writes the header with the first row
    if rows.is_empty() {
        wtr.write_record([
            "event_id",
            "event_title",
            "event_date",
            "person_id",
            "name",
            "status",
            "recorded_by",
            "recorded_at",
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
