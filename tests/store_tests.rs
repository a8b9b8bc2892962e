use togather::core::recorder::{AttendanceRecorder, AttendanceStore, CommitOutcome, RecorderState};
use togather::db::initialize::init_db;
use togather::db::pool::DbPool;
use togather::db::queries::{attendance_tally, insert_event, insert_member, load_attendance_for_event, load_roster};
use togather::db::store::SqliteAttendanceStore;
use togather::errors::PersistenceFailure;
use togather::models::attendance::AttendanceStatus;
use togather::models::event::Event;
use togather::models::person::Person;
use togather::models::session::{Role, Session};

fn seeded_pool() -> (DbPool, i64) {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");

    for name in ["Anna", "Budi", "Citra"] {
        insert_member(&pool.conn, &Person::new(0, name)).expect("insert member");
    }
    let date = chrono::NaiveDate::from_ymd_opt(2025, 9, 17).expect("date");
    let event_id = insert_event(&pool.conn, &Event::new("Komsel", date, None, None)).expect("insert event");
    (pool, event_id)
}

/// Delegates to SQLite but refuses writes for one person.
struct FlakyStore<'a> {
    inner: SqliteAttendanceStore<'a>,
    refuse: i64,
}

impl AttendanceStore for FlakyStore<'_> {
    fn record_attendance(
        &mut self,
        event_id: i64,
        person_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), PersistenceFailure> {
        if person_id == self.refuse {
            return Err(PersistenceFailure::new("network unreachable"));
        }
        self.inner.record_attendance(event_id, person_id, status)
    }
}

#[test]
fn test_upsert_keeps_one_row_per_person() {
    let (pool, event_id) = seeded_pool();
    let session = Session::new("ketua", Role::Leader);
    let mut store = SqliteAttendanceStore::new(&pool.conn, &session);

    store
        .record_attendance(event_id, 1, AttendanceStatus::Absent)
        .expect("first write");
    store
        .record_attendance(event_id, 1, AttendanceStatus::Present)
        .expect("second write");

    let rows = load_attendance_for_event(&pool.conn, event_id).expect("load");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, AttendanceStatus::Present);
    assert_eq!(rows[0].recorded_by, "ketua");
}

#[test]
fn test_store_rejects_unknown_member() {
    let (pool, event_id) = seeded_pool();
    let session = Session::new("ketua", Role::Leader);
    let mut store = SqliteAttendanceStore::new(&pool.conn, &session);

    assert!(store
        .record_attendance(event_id, 99, AttendanceStatus::Present)
        .is_err());
    assert_eq!(attendance_tally(&pool.conn, event_id).expect("tally").total(), 0);
}

#[test]
fn test_failed_write_is_rolled_back_and_retried() {
    let (pool, event_id) = seeded_pool();
    let session = Session::new("ketua", Role::Leader);
    let roster = load_roster(&pool.conn).expect("roster");
    let budi = roster[1].id;

    let mut recorder = AttendanceRecorder::new(event_id, roster);
    let mut store = FlakyStore {
        inner: SqliteAttendanceStore::new(&pool.conn, &session),
        refuse: budi,
    };

    assert!(recorder
        .commit(AttendanceStatus::Present, &mut store)
        .is_some_and(|o| o.is_saved()));

    match recorder.commit(AttendanceStatus::Absent, &mut store) {
        Some(CommitOutcome::RolledBack { person, failure, .. }) => {
            assert_eq!(person.name, "Budi");
            assert_eq!(failure.reason, "network unreachable");
        }
        other => panic!("expected rollback, got {:?}", other),
    }

    // Budi is presented again and nothing was counted for him
    assert_eq!(recorder.current_person().map(|p| p.name.as_str()), Some("Budi"));
    assert_eq!(recorder.tally().absent, 0);
    assert_eq!(recorder.state(), RecorderState::Idle);

    store.refuse = -1;
    recorder.commit(AttendanceStatus::Absent, &mut store);
    recorder.commit(AttendanceStatus::Present, &mut store);
    assert_eq!(recorder.state(), RecorderState::Complete);

    let stored = attendance_tally(&pool.conn, event_id).expect("tally");
    assert_eq!(stored.present, 2);
    assert_eq!(stored.absent, 1);
    assert_eq!(stored, recorder.tally());
}
