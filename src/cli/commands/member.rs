use crate::cli::parser::{Commands, MemberAction};
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Member { action } = cmd {
        let pool = super::open_pool(cfg)?;

        match action {
            MemberAction::Add {
                name,
                avatar,
                birth,
            } => {
                let birth_date = match birth {
                    Some(s) => {
                        Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
                    }
                    None => None,
                };
                RosterLogic::add(&pool, session, name, avatar.clone(), birth_date)?;
            }
            MemberAction::List => RosterLogic::list(&pool)?,
            MemberAction::Del { id } => RosterLogic::remove(&pool, session, *id)?,
        }
    }
    Ok(())
}
