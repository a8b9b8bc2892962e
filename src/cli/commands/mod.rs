pub mod backup;
pub mod config;
pub mod db;
pub mod event;
pub mod export;
pub mod init;
pub mod insights;
pub mod log;
pub mod mark;
pub mod member;
pub mod swipe;
pub mod tally;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Open the configured database; a missing file points the user to `init`.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    if !Path::new(&cfg.database).exists() {
        return Err(AppError::Config(format!(
            "database {} not found, run `togather init` first",
            cfg.database
        )));
    }
    Ok(DbPool::new(&cfg.database)?)
}
