use crate::models::attendance::AttendanceRecord;
use crate::models::event::Event;
use serde::Serialize;

/// Flat row for attendance exports.
#[derive(Serialize, Clone, Debug)]
pub struct AttendanceExport {
    pub event_id: i64,
    pub event_title: String,
    pub event_date: String,
    pub person_id: i64,
    pub name: String,
    pub status: String,
    pub recorded_by: String,
    pub recorded_at: String,
}

impl AttendanceExport {
    pub fn from_record(event: &Event, r: &AttendanceRecord) -> Self {
        Self {
            event_id: event.id,
            event_title: event.title.clone(),
            event_date: event.date_str(),
            person_id: r.person_id,
            name: r.name.clone(),
            status: r.status.to_db_str().to_string(),
            recorded_by: r.recorded_by.clone(),
            recorded_at: r.recorded_at.clone(),
        }
    }
}
