use crate::core::recorder::{AttendanceRecorder, AttendanceStore};
use crate::core::swipe::{SwipeSummary, run_session};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{attendance_tally, load_attendance_for_event, load_event, load_member, load_roster};
use crate::db::store::SqliteAttendanceStore;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceStatus;
use crate::models::event::Event;
use crate::models::session::Session;
use crate::ui::messages::{header, success};
use crate::utils::formatting::describe_status;
use std::collections::HashSet;
use std::io::{BufRead, Write};

/// Attendance use cases: single marks, swipe sessions, per-event tallies.
pub struct AttendanceLogic;

fn require_event(pool: &DbPool, event_id: i64) -> AppResult<Event> {
    load_event(&pool.conn, event_id)?.ok_or(AppError::EventNotFound(event_id))
}

impl AttendanceLogic {
    /// Record one status directly, outside a swipe session.
    pub fn mark(
        pool: &DbPool,
        session: &Session,
        event_id: i64,
        person_id: i64,
        status: AttendanceStatus,
    ) -> AppResult<()> {
        session.require_manage("record attendance")?;

        let event = require_event(pool, event_id)?;
        let person = load_member(&pool.conn, person_id)?.ok_or(AppError::MemberNotFound(person_id))?;

        let mut store = SqliteAttendanceStore::new(&pool.conn, session);
        store.record_attendance(event.id, person.id, status)?;

        success(format!(
            "{} marked {} for '{}' ({})",
            person.name,
            status,
            event.title,
            event.when()
        ));
        Ok(())
    }

    /// Run an interactive swipe session over the active roster.
    pub fn swipe<R: BufRead, W: Write>(
        pool: &DbPool,
        session: &Session,
        event_id: i64,
        input: R,
        out: &mut W,
    ) -> AppResult<SwipeSummary> {
        session.require_manage("record attendance")?;

        let event = require_event(pool, event_id)?;
        let roster = load_roster(&pool.conn)?;

        writeln!(out, "{}", header(format!("{} ({})", event.title, event.when())))?;

        let mut recorder = AttendanceRecorder::new(event.id, roster);
        let mut store = SqliteAttendanceStore::new(&pool.conn, session);
        let summary = run_session(&mut recorder, &mut store, input, out)?;

        writeln!(out, "\nSession ended: {}", summary.tally)?;

        ttlog_quiet(
            &pool.conn,
            "swipe",
            &format!("event {}", event.id),
            &format!(
                "Session by {}: {} present, {} absent, {} failed saves{}",
                session.user_id,
                summary.tally.present,
                summary.tally.absent,
                summary.rollbacks,
                if summary.complete { "" } else { " (incomplete)" }
            ),
        );

        Ok(summary)
    }

    /// Print stored attendance for one event.
    pub fn print_tally(pool: &DbPool, event_id: i64) -> AppResult<()> {
        let event = require_event(pool, event_id)?;
        let records = load_attendance_for_event(&pool.conn, event_id)?;
        let tally = attendance_tally(&pool.conn, event_id)?;

        println!("{}\n", header(format!("{} ({})", event.title, event.when())));

        for r in &records {
            let (icon, label) = describe_status(r.status);
            println!("{} {:<24} {}", icon, r.name, label);
        }

        let recorded: HashSet<i64> = records.iter().map(|r| r.person_id).collect();
        let pending = load_roster(&pool.conn)?
            .into_iter()
            .filter(|p| !recorded.contains(&p.id))
            .count();

        println!("\nPresent: {} | Absent: {} | Not recorded: {}", tally.present, tally.absent, pending);
        Ok(())
    }
}
