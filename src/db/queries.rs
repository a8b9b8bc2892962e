use crate::errors::AppError;
use crate::models::attendance::{AttendanceRecord, AttendanceStatus, Tally};
use crate::models::event::Event;
use crate::models::person::Person;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EVENT_SELECT_SQL: &str = "SELECT id, title, date, time, location, created_at FROM events";

fn conversion_failure(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_failure(AppError::InvalidDate(s.to_string())))
}

// ---------------------------
// Members
// ---------------------------

pub fn map_person(row: &Row) -> Result<Person> {
    let birth: Option<String> = row.get("birth_date")?;
    let birth_date = match birth.as_deref() {
        Some(s) if !s.is_empty() => Some(parse_db_date(s)?),
        _ => None,
    };

    Ok(Person {
        id: row.get("id")?,
        name: row.get("name")?,
        avatar: row.get("avatar")?,
        birth_date,
    })
}

pub fn insert_member(conn: &Connection, person: &Person) -> Result<i64> {
    conn.execute(
        "INSERT INTO members (name, avatar, birth_date, active, created_at)
         VALUES (?1, ?2, ?3, 1, ?4)",
        params![
            person.name,
            person.avatar,
            person.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Soft delete: the row stays so attendance history keeps its name.
/// Returns false when no active member had that id.
pub fn deactivate_member(conn: &Connection, id: i64) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE members SET active = 0 WHERE id = ?1 AND active = 1",
        [id],
    )?;
    Ok(changed > 0)
}

pub fn load_member(conn: &Connection, id: i64) -> Result<Option<Person>> {
    conn.query_row(
        "SELECT id, name, avatar, birth_date FROM members WHERE id = ?1 AND active = 1",
        [id],
        map_person,
    )
    .optional()
}

/// Active members in roster order: name (case-insensitive), then id.
pub fn load_roster(conn: &Connection) -> Result<Vec<Person>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, avatar, birth_date FROM members
         WHERE active = 1
         ORDER BY name COLLATE NOCASE ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_person)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Events
// ---------------------------

pub fn map_event(row: &Row) -> Result<Event> {
    let date_str: String = row.get("date")?;
    let date = parse_db_date(&date_str)?;

    let time_str: Option<String> = row.get("time")?;
    let time = match time_str {
        Some(t) if !t.is_empty() => Some(
            NaiveTime::parse_from_str(&t, "%H:%M")
                .map_err(|_| conversion_failure(AppError::InvalidTime(t.clone())))?,
        ),
        _ => None,
    };

    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        date,
        time,
        location: row.get("location")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &Event) -> Result<i64> {
    conn.execute(
        "INSERT INTO events (title, date, time, location, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.title,
            ev.date_str(),
            ev.time_str(),
            ev.location,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_event(conn: &Connection, id: i64) -> Result<Option<Event>> {
    conn.query_row(
        &format!("{EVENT_SELECT_SQL} WHERE id = ?1"),
        [id],
        map_event,
    )
    .optional()
}

/// Events with `from <= date <= to`, chronological.
pub fn load_events_between(conn: &Connection, from: &NaiveDate, to: &NaiveDate) -> Result<Vec<Event>> {
    let mut stmt = conn.prepare(&format!(
        "{EVENT_SELECT_SQL}
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC, time ASC, id ASC"
    ))?;
    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_event,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Attendance
// ---------------------------

/// Upsert keyed by (event_id, person_id). One statement, so a failure
/// leaves whatever value was there before.
pub fn upsert_attendance(
    conn: &Connection,
    event_id: i64,
    person_id: i64,
    status: AttendanceStatus,
    recorded_by: &str,
) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO attendance (event_id, person_id, status, recorded_by, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(event_id, person_id) DO UPDATE SET
             status = excluded.status,
             recorded_by = excluded.recorded_by,
             recorded_at = excluded.recorded_at",
    )?;
    stmt.execute(params![
        event_id,
        person_id,
        status.to_db_str(),
        recorded_by,
        Local::now().to_rfc3339(),
    ])?;
    Ok(())
}

fn map_status(raw: &str) -> Result<AttendanceStatus> {
    AttendanceStatus::from_db_str(raw)
        .ok_or_else(|| conversion_failure(AppError::InvalidStatus(raw.to_string())))
}

/// Stored rows for one event, in roster order.
pub fn load_attendance_for_event(conn: &Connection, event_id: i64) -> Result<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT a.event_id, a.person_id, m.name, a.status, a.recorded_by, a.recorded_at
         FROM attendance a
         JOIN members m ON m.id = a.person_id
         WHERE a.event_id = ?1
         ORDER BY m.name COLLATE NOCASE ASC, m.id ASC",
    )?;
    let rows = stmt.query_map([event_id], |row| {
        let status: String = row.get(3)?;
        Ok(AttendanceRecord {
            event_id: row.get(0)?,
            person_id: row.get(1)?,
            name: row.get(2)?,
            status: map_status(&status)?,
            recorded_by: row.get(4)?,
            recorded_at: row.get(5)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn attendance_tally(conn: &Connection, event_id: i64) -> Result<Tally> {
    conn.query_row(
        "SELECT
            COALESCE(SUM(CASE WHEN status = 'present' THEN 1 ELSE 0 END), 0),
            COALESCE(SUM(CASE WHEN status = 'absent' THEN 1 ELSE 0 END), 0)
         FROM attendance WHERE event_id = ?1",
        [event_id],
        |row| {
            Ok(Tally {
                present: row.get::<_, i64>(0)? as usize,
                absent: row.get::<_, i64>(1)? as usize,
            })
        },
    )
}

/// Every event up to `as_of`, newest first, with this person's status
/// (`None` when nothing was recorded).
pub fn attendance_history(
    conn: &Connection,
    person_id: i64,
    as_of: &NaiveDate,
) -> Result<Vec<(NaiveDate, Option<AttendanceStatus>)>> {
    let mut stmt = conn.prepare(
        "SELECT e.date, a.status
         FROM events e
         LEFT JOIN attendance a ON a.event_id = e.id AND a.person_id = ?1
         WHERE e.date <= ?2
         ORDER BY e.date DESC, e.time DESC, e.id DESC",
    )?;
    let rows = stmt.query_map(
        params![person_id, as_of.format("%Y-%m-%d").to_string()],
        |row| {
            let date: String = row.get(0)?;
            let status: Option<String> = row.get(1)?;
            let status = match status {
                Some(s) => Some(map_status(&s)?),
                None => None,
            };
            Ok((parse_db_date(&date)?, status))
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
