use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        event,
        format,
        file,
        force,
    } = cmd
    {
        let pool = super::open_pool(cfg)?;
        ExportLogic::export(&pool, *event, *format, file, *force)?;
    }
    Ok(())
}
