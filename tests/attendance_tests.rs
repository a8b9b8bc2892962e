use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_with_data, setup_home, tg};

#[test]
fn test_mark_and_tally() {
    let home = setup_home("mark_tally");
    init_with_data(&home);

    tg(&home)
        .args(["mark", "1", "2", "present"])
        .assert()
        .success()
        .stdout(contains("Anna marked present for 'Komsel Rabu'"));

    tg(&home).args(["mark", "1", "1", "a"]).assert().success();

    tg(&home)
        .args(["tally", "1"])
        .assert()
        .success()
        .stdout(contains("Present: 1 | Absent: 1 | Not recorded: 1"));
}

#[test]
fn test_mark_again_overwrites_previous_status() {
    let home = setup_home("mark_overwrite");
    init_with_data(&home);

    tg(&home).args(["mark", "1", "2", "absent"]).assert().success();
    tg(&home).args(["mark", "1", "2", "present"]).assert().success();

    tg(&home)
        .args(["tally", "1"])
        .assert()
        .success()
        .stdout(contains("Present: 1 | Absent: 0 | Not recorded: 2"));
}

#[test]
fn test_mark_rejects_unknown_targets() {
    let home = setup_home("mark_unknown");
    init_with_data(&home);

    tg(&home)
        .args(["mark", "9", "1", "present"])
        .assert()
        .failure()
        .stderr(contains("No event with id 9"));

    tg(&home)
        .args(["mark", "1", "42", "present"])
        .assert()
        .failure()
        .stderr(contains("No active member with id 42"));

    tg(&home)
        .args(["mark", "1", "1", "late"])
        .assert()
        .failure()
        .stderr(contains("Invalid attendance status: late"));
}

#[test]
fn test_member_role_cannot_record() {
    let home = setup_home("mark_denied");
    init_with_data(&home);

    tg(&home)
        .args(["--role", "member", "mark", "1", "1", "present"])
        .assert()
        .failure()
        .stderr(contains("cannot record attendance"));

    tg(&home)
        .args(["--role", "member", "swipe", "1"])
        .write_stdin("p\n")
        .assert()
        .failure()
        .stderr(contains("cannot record attendance"));
}

#[test]
fn test_swipe_session_with_undo() {
    let home = setup_home("swipe_undo");
    init_with_data(&home);

    // Anna present, budi absent, undo budi, budi present, Citra present
    tg(&home)
        .args(["swipe", "1"])
        .write_stdin("p\na\nu\np\np\nq\n")
        .assert()
        .success()
        .stdout(contains("Komsel Rabu (2025-09-17 19:30)"))
        .stdout(contains("→ [1/3] Anna"))
        .stdout(contains("Undid budi (absent)."))
        .stdout(contains("All 3 members recorded"))
        .stdout(contains("Session ended: present: 3 | absent: 0"));

    tg(&home)
        .args(["tally", "1"])
        .assert()
        .success()
        .stdout(contains("Present: 3 | Absent: 0 | Not recorded: 0"));
}

#[test]
fn test_swipe_stops_at_end_of_input() {
    let home = setup_home("swipe_eof");
    init_with_data(&home);

    tg(&home)
        .args(["swipe", "1"])
        .write_stdin("a\nx\n")
        .assert()
        .success()
        .stdout(contains("Unknown input 'x'"))
        .stdout(contains("→ [2/3] budi"))
        .stdout(contains("Session ended: present: 0 | absent: 1"));

    tg(&home)
        .args(["tally", "1"])
        .assert()
        .success()
        .stdout(contains("Absent: 1 | Not recorded: 2"));
}

#[test]
fn test_swipe_with_empty_roster() {
    let home = setup_home("swipe_empty");
    tg(&home).arg("init").assert().success();
    tg(&home)
        .args(["event", "add", "Komsel", "2025-09-17"])
        .assert()
        .success();

    tg(&home)
        .args(["swipe", "1"])
        .write_stdin("p\n")
        .assert()
        .success()
        .stdout(contains("No active members on the roster."))
        .stdout(contains("All 0 members").not());
}

#[test]
fn test_log_records_attendance_activity() {
    let home = setup_home("log_activity");
    init_with_data(&home);

    tg(&home).args(["mark", "1", "3", "present"]).assert().success();

    tg(&home)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("member_add"))
        .stdout(contains("event_add"))
        .stdout(contains("attend"))
        .stdout(contains("Marked present by ketua"));
}
