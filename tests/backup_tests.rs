use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_data, setup_home, tg};

#[test]
fn test_backup_plain_copy() {
    let home = setup_home("backup_plain");
    init_with_data(&home);

    let dest = home.join("backups").join("togather.bak");
    tg(&home)
        .args(["backup", "--file", &dest.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let original = fs::metadata(home.join("togather.sqlite")).expect("db").len();
    assert!(dest.exists());
    assert!(original > 0);

    tg(&home)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("backup"));
}

#[test]
fn test_backup_compressed() {
    let home = setup_home("backup_zip");
    init_with_data(&home);

    let dest = home.join("togather_backup.sqlite");
    tg(&home)
        .args(["backup", "--file", &dest.to_string_lossy(), "--compress"])
        .assert()
        .success()
        .stdout(contains("togather_backup.zip"));

    let zip_path = home.join("togather_backup.zip");
    let file = fs::File::open(&zip_path).expect("zip created");
    let mut archive = zip::ZipArchive::new(file).expect("valid zip");
    assert_eq!(archive.len(), 1);
    assert_eq!(archive.by_index(0).expect("entry").name(), "togather.sqlite");
}
