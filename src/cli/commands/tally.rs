use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tally { event } = cmd {
        let pool = super::open_pool(cfg)?;
        AttendanceLogic::print_tally(&pool, *event)?;
    }
    Ok(())
}
