use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_data, setup_home, temp_out, tg};

fn mark_two(home: &std::path::PathBuf) {
    tg(home).args(["mark", "1", "2", "present"]).assert().success();
    tg(home).args(["mark", "1", "1", "absent"]).assert().success();
}

#[test]
fn test_export_csv() {
    let home = setup_home("export_csv");
    init_with_data(&home);
    mark_two(&home);

    let out = temp_out(&home, "attendance", "csv");
    tg(&home)
        .args(["export", "--event", "1", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("event_id,event_title,event_date,person_id,name,status,recorded_by,recorded_at")
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("1,Komsel Rabu,2025-09-17,2,Anna,present,ketua,"));
    assert!(rows[1].starts_with("1,Komsel Rabu,2025-09-17,1,Citra,absent,ketua,"));
}

#[test]
fn test_export_csv_without_records_has_header() {
    let home = setup_home("export_csv_empty");
    init_with_data(&home);

    let out = temp_out(&home, "empty", "csv");
    tg(&home)
        .args(["export", "--event", "1", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("event_id,"));
}

#[test]
fn test_export_json() {
    let home = setup_home("export_json");
    init_with_data(&home);
    mark_two(&home);

    let out = temp_out(&home, "attendance", "json");
    tg(&home)
        .args(["export", "--event", "1", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = v.as_array().expect("json array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Anna");
    assert_eq!(arr[0]["status"], "present");
    assert_eq!(arr[1]["person_id"], 1);
    assert_eq!(arr[1]["event_title"], "Komsel Rabu");
}

#[test]
fn test_export_does_not_overwrite_without_confirmation() {
    let home = setup_home("export_no_overwrite");
    init_with_data(&home);

    let out = temp_out(&home, "keep", "csv");
    fs::write(&out, "keep me").expect("seed file");

    tg(&home)
        .args(["export", "--event", "1", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    tg(&home)
        .args(["export", "--event", "1", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("event_id,"));
}

#[test]
fn test_export_unknown_event() {
    let home = setup_home("export_unknown");
    init_with_data(&home);

    let out = temp_out(&home, "none", "csv");
    tg(&home)
        .args(["export", "--event", "7", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("No event with id 7"));
}
