use super::csv::write_csv;
use super::fs_utils::ensure_writable;
use super::json::write_json;
use super::model::AttendanceExport;
use super::{ExportFormat, notify_export_success};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_attendance_for_event, load_event};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored attendance of one event. Returns the row count.
    pub fn export(
        pool: &DbPool,
        event_id: i64,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let event = load_event(&pool.conn, event_id)?.ok_or(AppError::EventNotFound(event_id))?;
        let rows: Vec<AttendanceExport> = load_attendance_for_event(&pool.conn, event_id)?
            .iter()
            .map(|r| AttendanceExport::from_record(&event, r))
            .collect();

        let path = expand_tilde(file);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => write_csv(&path, &rows)?,
            ExportFormat::Json => write_json(&path, &rows)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} rows of event {} as {}",
                rows.len(),
                event_id,
                format.as_str()
            ),
        );
        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(rows.len())
    }
}
