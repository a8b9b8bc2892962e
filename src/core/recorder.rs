//! Optimistic attendance recorder.
//!
//! A session walks the roster front to back. Each classify gesture is
//! applied locally first (decision logged, person taken off the queue) and
//! then written to the store; a failed write is rolled back so the same
//! person is presented again.
//!
//! The recorder never performs I/O itself. `classify` hands out the
//! `PendingWrite` and the recorder stays `Committing` until `resolve` is
//! called with the store's answer. `commit` does both in one call for
//! callers that talk to a synchronous store.

use crate::errors::PersistenceFailure;
use crate::models::attendance::{AttendanceDecision, AttendanceStatus, Tally};
use crate::models::person::Person;
use std::collections::VecDeque;

/// Upsert boundary to whatever holds attendance.
///
/// Implementations must be idempotent on `(event_id, person_id)`: a second
/// call overwrites the first, and a failed call leaves the old value.
pub trait AttendanceStore {
    fn record_attendance(
        &mut self,
        event_id: i64,
        person_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), PersistenceFailure>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// Showing the front-of-queue person, nothing in flight.
    Idle,
    /// A decision has been applied and its write has not resolved yet.
    Committing,
    /// Queue exhausted.
    Complete,
}

/// The write a caller must issue after a successful `classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingWrite {
    pub event_id: i64,
    pub person_id: i64,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Saved {
        person: Person,
        status: AttendanceStatus,
    },
    RolledBack {
        person: Person,
        status: AttendanceStatus,
        failure: PersistenceFailure,
    },
}

impl CommitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, CommitOutcome::Saved { .. })
    }

    /// Short user-facing text for a rolled-back write.
    pub fn notice(&self) -> Option<String> {
        match self {
            CommitOutcome::Saved { .. } => None,
            CommitOutcome::RolledBack {
                person, failure, ..
            } => Some(format!(
                "Could not save attendance for {} ({}). Please try again.",
                person.name, failure.reason
            )),
        }
    }
}

#[derive(Debug, Clone)]
struct LogEntry {
    person: Person,
    status: AttendanceStatus,
}

#[derive(Debug, Clone)]
pub struct AttendanceRecorder {
    event_id: i64,
    roster: Vec<Person>,
    queue: VecDeque<Person>,
    log: Vec<LogEntry>,
    tally: Tally,
    state: RecorderState,
}

impl AttendanceRecorder {
    pub fn new(event_id: i64, roster: Vec<Person>) -> Self {
        let queue = roster.iter().cloned().collect();
        Self {
            event_id,
            roster,
            queue,
            log: Vec::new(),
            tally: Tally::default(),
            state: RecorderState::Idle,
        }
    }

    pub fn event_id(&self) -> i64 {
        self.event_id
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Front of the queue; `None` once complete or when nobody is left.
    pub fn current_person(&self) -> Option<&Person> {
        if self.state == RecorderState::Complete {
            return None;
        }
        self.queue.front()
    }

    /// People still waiting, front first.
    pub fn remaining(&self) -> impl Iterator<Item = &Person> {
        self.queue.iter()
    }

    pub fn remaining_len(&self) -> usize {
        self.queue.len()
    }

    /// Decisions in the order they were made (includes an in-flight one).
    pub fn decisions(&self) -> Vec<AttendanceDecision> {
        self.log
            .iter()
            .map(|e| AttendanceDecision {
                person_id: e.person.id,
                status: e.status,
            })
            .collect()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn can_undo(&self) -> bool {
        !self.log.is_empty() && self.state != RecorderState::Committing
    }

    /// Optimistically classify the current person.
    ///
    /// Returns the write to issue, or `None` when the recorder is not `Idle`
    /// or the queue is empty. A double tap while committing lands here.
    pub fn classify(&mut self, status: AttendanceStatus) -> Option<PendingWrite> {
        if self.state != RecorderState::Idle {
            return None;
        }
        let person = self.queue.pop_front()?;
        let write = PendingWrite {
            event_id: self.event_id,
            person_id: person.id,
            status,
        };

        self.tally.add(status);
        self.log.push(LogEntry { person, status });
        self.state = RecorderState::Committing;

        Some(write)
    }

    /// Settle the in-flight write. `None` when nothing was in flight.
    pub fn resolve(&mut self, result: Result<(), PersistenceFailure>) -> Option<CommitOutcome> {
        if self.state != RecorderState::Committing {
            return None;
        }

        match result {
            Ok(()) => {
                let entry = self.log.last()?;
                let outcome = CommitOutcome::Saved {
                    person: entry.person.clone(),
                    status: entry.status,
                };
                self.state = if self.queue.is_empty() {
                    RecorderState::Complete
                } else {
                    RecorderState::Idle
                };
                Some(outcome)
            }
            Err(failure) => {
                let entry = self.log.pop()?;
                self.tally.remove(entry.status);
                self.queue.push_front(entry.person.clone());
                self.state = RecorderState::Idle;
                Some(CommitOutcome::RolledBack {
                    person: entry.person,
                    status: entry.status,
                    failure,
                })
            }
        }
    }

    /// `classify`, write through `store`, `resolve`.
    pub fn commit<S>(&mut self, status: AttendanceStatus, store: &mut S) -> Option<CommitOutcome>
    where
        S: AttendanceStore + ?Sized,
    {
        let write = self.classify(status)?;
        let result = store.record_attendance(write.event_id, write.person_id, write.status);
        self.resolve(result)
    }

    /// Take back the last decision and present that person again.
    ///
    /// Local only: the stored row stays until the person is re-classified.
    pub fn undo(&mut self) -> Option<AttendanceDecision> {
        if !self.can_undo() {
            return None;
        }
        let entry = self.log.pop()?;
        self.tally.remove(entry.status);
        let decision = AttendanceDecision {
            person_id: entry.person.id,
            status: entry.status,
        };
        self.queue.push_front(entry.person);
        self.state = RecorderState::Idle;
        Some(decision)
    }

    /// Start the pass over with the full roster. Refused while committing.
    pub fn reset(&mut self) -> bool {
        if self.state == RecorderState::Committing {
            return false;
        }
        self.queue = self.roster.iter().cloned().collect();
        self.log.clear();
        self.tally = Tally::default();
        self.state = RecorderState::Idle;
        true
    }
}
