use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::insights::InsightLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Insights { as_of, days } = cmd {
        let as_of = match as_of {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let window = days.unwrap_or(cfg.birthday_window_days);

        let pool = super::open_pool(cfg)?;
        InsightLogic::print(&pool, &cfg.group_name, as_of, window)?;
    }
    Ok(())
}
