use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let members = count(pool, "SELECT COUNT(*) FROM members WHERE active = 1")?;
    let events = count(pool, "SELECT COUNT(*) FROM events")?;
    let records = count(pool, "SELECT COUNT(*) FROM attendance")?;

    println!("{}• Active members:{} {}{}{}", CYAN, RESET, GREEN, members, RESET);
    println!("{}• Events:{} {}{}{}", CYAN, RESET, GREEN, events, RESET);
    println!(
        "{}• Attendance records:{} {}{}{}",
        CYAN, RESET, GREEN, records, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM events", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM events", [], |row| row.get(0))
        .optional()?
        .flatten();

    println!("{}• Event range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) SCHEMA
    //
    let versions = applied_versions(&pool.conn)?;
    println!(
        "{}• Schema:{} {} migrations (latest {})",
        CYAN,
        RESET,
        versions.len(),
        versions.last().map(String::as_str).unwrap_or("--")
    );

    //
    // 5) AVERAGE TURNOUT
    //
    if events > 0 {
        let present = count(
            pool,
            "SELECT COUNT(*) FROM attendance WHERE status = 'present'",
        )?;
        println!(
            "{}• Average present/event:{} {:.2}",
            CYAN,
            RESET,
            present as f64 / events as f64
        );
    }

    println!();
    Ok(())
}
