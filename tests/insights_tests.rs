use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_home, tg};

#[test]
fn test_insights_streaks_and_birthdays() {
    let home = setup_home("insights");
    tg(&home).arg("init").assert().success();

    tg(&home)
        .args(["member", "add", "Lukas", "--birth", "2001-10-20"])
        .assert()
        .success();
    tg(&home)
        .args(["member", "add", "Maria", "--birth", "1960-03-02"])
        .assert()
        .success();

    tg(&home)
        .args(["event", "add", "Komsel", "2025-09-24"])
        .assert()
        .success();
    tg(&home)
        .args(["event", "add", "Komsel", "2025-10-01"])
        .assert()
        .success();
    tg(&home)
        .args(["event", "add", "Komsel", "2025-10-08"])
        .assert()
        .success();

    for ev in ["1", "2", "3"] {
        tg(&home).args(["mark", ev, "1", "present"]).assert().success();
    }
    tg(&home).args(["mark", "3", "2", "absent"]).assert().success();

    let out = tg(&home)
        .args(["insights", "--as-of", "2025-10-14", "--days", "10"])
        .assert()
        .success()
        .stdout(contains("insights as of 2025-10-14"))
        .stdout(contains("young adult"))
        .stdout(contains("senior"))
        .stdout(contains("Lukas turns 24 on 20 Oct (in 6 days)"))
        .stdout(contains("Maria turns").not());

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    let lukas = stdout.lines().find(|l| l.contains("Lukas") && l.contains("100%"));
    assert!(lukas.is_some(), "Lukas row missing:\n{}", stdout);
}

#[test]
fn test_insights_rejects_bad_date() {
    let home = setup_home("insights_bad_date");
    tg(&home).arg("init").assert().success();

    tg(&home)
        .args(["insights", "--as-of", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: yesterday"));
}
