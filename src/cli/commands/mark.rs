use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceStatus;
use crate::models::session::Session;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Mark {
        event,
        member,
        status,
    } = cmd
    {
        let status =
            AttendanceStatus::parse(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let pool = super::open_pool(cfg)?;
        AttendanceLogic::mark(&pool, session, *event, *member, status)?;
    }
    Ok(())
}
