use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{attendance_tally, insert_event, load_events_between};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::session::Session;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};
use chrono::{NaiveDate, NaiveTime};

/// Event scheduling use cases.
pub struct ScheduleLogic;

impl ScheduleLogic {
    pub fn add(
        pool: &DbPool,
        session: &Session,
        title: &str,
        date: NaiveDate,
        time: Option<NaiveTime>,
        location: Option<String>,
    ) -> AppResult<i64> {
        session.require_manage("schedule events")?;

        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Other("Event title cannot be empty".into()));
        }

        let ev = Event::new(title, date, time, location);
        let id = insert_event(&pool.conn, &ev)?;

        ttlog_quiet(
            &pool.conn,
            "event_add",
            &format!("event {}", id),
            &format!("Scheduled '{}' on {} (by {})", ev.title, ev.when(), session.user_id),
        );
        success(format!("Scheduled event #{}: {} on {}", id, ev.title, ev.when()));
        Ok(id)
    }

    pub fn list(pool: &DbPool, from: &NaiveDate, to: &NaiveDate) -> AppResult<()> {
        let events = load_events_between(&pool.conn, from, to)?;
        if events.is_empty() {
            info(format!("No events between {} and {}.", from, to));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("When"),
            Column::new("Title"),
            Column::new("Location"),
            Column::new("Present"),
            Column::new("Absent"),
        ]);
        for ev in &events {
            let tally = attendance_tally(&pool.conn, ev.id)?;
            table.add_row(vec![
                ev.id.to_string(),
                ev.when(),
                ev.title.clone(),
                ev.location.clone().unwrap_or_else(|| "--".into()),
                tally.present.to_string(),
                tally.absent.to_string(),
            ]);
        }

        println!("📅 Events from {} to {}:\n", from, to);
        print!("{}", table.render());
        Ok(())
    }
}
