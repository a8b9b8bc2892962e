use crate::cli::parser::{Commands, EventAction};
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Event { action } = cmd {
        let pool = super::open_pool(cfg)?;

        match action {
            EventAction::Add {
                title,
                date: day,
                time,
                location,
            } => {
                let d = date::parse_date(day).ok_or_else(|| AppError::InvalidDate(day.clone()))?;
                let t = match time {
                    Some(s) => Some(date::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?),
                    None => None,
                };
                ScheduleLogic::add(&pool, session, title, d, t, location.clone())?;
            }
            EventAction::List { period } => {
                let (from, to) = match period {
                    Some(p) => date::resolve_period(p),
                    None => date::current_month_bounds(),
                }
                .map_err(AppError::InvalidDate)?;
                ScheduleLogic::list(&pool, &from, &to)?;
            }
        }
    }
    Ok(())
}
