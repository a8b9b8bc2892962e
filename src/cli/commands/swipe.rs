use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::errors::AppResult;
use crate::models::session::Session;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Swipe { event } = cmd {
        let pool = super::open_pool(cfg)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        AttendanceLogic::swipe(&pool, session, *event, stdin.lock(), &mut out)?;
    }
    Ok(())
}
