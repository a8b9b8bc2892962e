use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// A scheduled gathering that attendance is recorded against.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,         // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: Option<NaiveTime>, // ⇔ events.time (TEXT "HH:MM" or NULL)
    pub location: Option<String>,
    pub created_at: String, // ⇔ events.created_at (TEXT, ISO8601)
}

impl Event {
    /// Builds an event that has not been stored yet (`id = 0`).
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        time: Option<NaiveTime>,
        location: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            date,
            time,
            location,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> Option<String> {
        self.time.map(|t| t.format("%H:%M").to_string())
    }

    /// "2025-09-01 19:30" or just the date when no start time is set.
    pub fn when(&self) -> String {
        match self.time_str() {
            Some(t) => format!("{} {}", self.date_str(), t),
            None => self.date_str(),
        }
    }
}
