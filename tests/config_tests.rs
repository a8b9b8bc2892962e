use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_home, tg};

#[test]
fn test_config_print_shows_fields() {
    let home = setup_home("config_print");
    tg(&home).arg("init").assert().success();

    tg(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("group_name:"))
        .stdout(contains("user: ketua"))
        .stdout(contains("role: leader"))
        .stdout(contains("birthday_window_days: 14"));
}

#[test]
fn test_config_check_and_migrate_old_file() {
    let home = setup_home("config_migrate");
    tg(&home).arg("init").assert().success();

    let conf = home.join("togather.conf");
    let db = home.join("togather.sqlite");
    fs::write(&conf, format!("database: {}\ngroup_name: Komsel Efata\n", db.display()))
        .expect("write old config");

    tg(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields: user, role, birthday_window_days"));

    tg(&home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields:"));

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("group_name: Komsel Efata"));
    assert!(content.contains("birthday_window_days: 14"));

    tg(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("up to date").and(contains("Missing").not()));
}

#[test]
fn test_config_role_controls_permissions() {
    let home = setup_home("config_role");
    tg(&home).arg("init").assert().success();

    let conf = home.join("togather.conf");
    let content = fs::read_to_string(&conf).expect("read config");
    fs::write(&conf, content.replace("role: leader", "role: member")).expect("write config");

    tg(&home)
        .args(["member", "add", "Dewi"])
        .assert()
        .failure()
        .stderr(contains("ketua (member) cannot add members"));

    tg(&home)
        .args(["--role", "admin", "member", "add", "Dewi"])
        .assert()
        .success();
}

#[test]
fn test_db_maintenance_commands() {
    let home = setup_home("db_maintenance");
    tg(&home).arg("init").assert().success();

    tg(&home)
        .args(["db", "--migrate", "--check", "--info", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("0 applied"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Active members"))
        .stdout(contains("4 migrations"))
        .stdout(contains("Vacuum completed"));
}
