//! Formatting utilities used for CLI and export outputs.

use crate::models::attendance::AttendanceStatus;

/// "75%" or "--" when there is nothing to divide by.
pub fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.0}%", r * 100.0),
        None => "--".to_string(),
    }
}

/// Icon and label for a stored status, as shown in tallies.
pub fn describe_status(status: AttendanceStatus) -> (&'static str, &'static str) {
    match status {
        AttendanceStatus::Present => ("✅", "present"),
        AttendanceStatus::Absent => ("❌", "absent"),
    }
}
