//! SQLite-backed `AttendanceStore`.

use crate::core::recorder::AttendanceStore;
use crate::db::log::ttlog;
use crate::db::queries::upsert_attendance;
use crate::errors::PersistenceFailure;
use crate::models::attendance::AttendanceStatus;
use crate::models::session::Session;
use rusqlite::Connection;

pub struct SqliteAttendanceStore<'a> {
    conn: &'a Connection,
    recorded_by: String,
}

impl<'a> SqliteAttendanceStore<'a> {
    pub fn new(conn: &'a Connection, session: &Session) -> Self {
        Self {
            conn,
            recorded_by: session.user_id.clone(),
        }
    }
}

impl AttendanceStore for SqliteAttendanceStore<'_> {
    fn record_attendance(
        &mut self,
        event_id: i64,
        person_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), PersistenceFailure> {
        upsert_attendance(self.conn, event_id, person_id, status, &self.recorded_by)?;

        // the row is already stored; a lost audit line must not roll it back
        let _ = ttlog(
            self.conn,
            "attend",
            &format!("event {} / member {}", event_id, person_id),
            &format!("Marked {} by {}", status, self.recorded_by),
        );
        Ok(())
    }
}
