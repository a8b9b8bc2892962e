#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Isolated config directory for one test; `TOGATHER_HOME` points here.
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("togather_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// `togather` binary bound to the given config directory
pub fn tg(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("togather");
    cmd.env("TOGATHER_HOME", home).env("USER", "ketua");
    cmd
}

/// Create a temporary output file path inside the test home
pub fn temp_out(home: &PathBuf, name: &str, ext: &str) -> String {
    let p = home.join(format!("{}_out.{}", name, ext));
    fs::remove_file(&p).ok();
    p.to_string_lossy().to_string()
}

/// Initialize the home and add a small roster plus one event
///
/// Roster order: Anna (2), budi (3), Citra (1). Event id 1.
pub fn init_with_data(home: &PathBuf) {
    tg(home).arg("init").assert().success();

    for name in ["Citra", "Anna", "budi"] {
        tg(home).args(["member", "add", name]).assert().success();
    }

    tg(home)
        .args([
            "event",
            "add",
            "Komsel Rabu",
            "2025-09-17",
            "--time",
            "19:30",
            "--location",
            "Rumah Anna",
        ])
        .assert()
        .success();
}
