use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Parse user input. Accepts the full word and the single-letter forms.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "present" | "p" | "y" | "yes" => Some(Self::Present),
            "absent" | "a" | "n" | "no" => Some(Self::Absent),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "present" => Some(AttendanceStatus::Present),
            "absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// One classify gesture: who, and how they were marked.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AttendanceDecision {
    pub person_id: i64,
    pub status: AttendanceStatus,
}

/// Running present/absent counts.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Tally {
    pub present: usize,
    pub absent: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.present + self.absent
    }

    pub(crate) fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
        }
    }

    pub(crate) fn remove(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present = self.present.saturating_sub(1),
            AttendanceStatus::Absent => self.absent = self.absent.saturating_sub(1),
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "present: {} | absent: {}", self.present, self.absent)
    }
}

/// A stored attendance row, as read back from the `attendance` table.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub event_id: i64,
    pub person_id: i64,
    pub name: String,
    pub status: AttendanceStatus,
    pub recorded_by: String,
    pub recorded_at: String,
}
