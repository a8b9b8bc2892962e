use chrono::NaiveDate;
use serde::Serialize;

/// A roster entry. Immutable for the lifetime of a recording session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>, // ⇔ members.avatar (URL or file reference)
    pub birth_date: Option<NaiveDate>, // ⇔ members.birth_date (TEXT "YYYY-MM-DD")
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: None,
            birth_date: None,
        }
    }

    pub fn with_birth_date(mut self, birth: NaiveDate) -> Self {
        self.birth_date = Some(birth);
        self
    }

    pub fn birth_date_str(&self) -> String {
        self.birth_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}
