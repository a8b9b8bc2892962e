//! Togather library root.
//! Exposes the CLI parser, the high-level `run()` function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use models::session::{Role, Session};

/// Acting user: the configured one, overridden by `--user` / `--role`.
pub fn resolve_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let mut session = cfg.session();

    if let Some(user) = &cli.user {
        session.user_id = user.trim().to_string();
    }
    if let Some(role) = &cli.role {
        session.role = Role::parse(role).ok_or_else(|| AppError::InvalidRole(role.clone()))?;
    }

    Ok(session)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    use crate::cli::commands as cmd;

    match &cli.command {
        Commands::Init => cmd::init::handle(cli),
        Commands::Config { .. } => cmd::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cmd::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cmd::log::handle(&cli.command, cfg),
        Commands::Member { .. } => cmd::member::handle(&cli.command, cfg, session),
        Commands::Event { .. } => cmd::event::handle(&cli.command, cfg, session),
        Commands::Mark { .. } => cmd::mark::handle(&cli.command, cfg, session),
        Commands::Swipe { .. } => cmd::swipe::handle(&cli.command, cfg, session),
        Commands::Tally { .. } => cmd::tally::handle(&cli.command, cfg),
        Commands::Insights { .. } => cmd::insights::handle(&cli.command, cfg),
        Commands::Export { .. } => cmd::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cmd::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; `init` writes its own
    let mut cfg = if matches!(cli.command, Commands::Init) {
        Config::default()
    } else {
        Config::load()?
    };

    // --db override, resolved the same way `init` resolves it
    if let Some(custom_db) = &cli.db {
        let p = utils::path::expand_tilde(custom_db);
        let p = if p.is_absolute() {
            p
        } else {
            Config::config_dir().join(p)
        };
        cfg.database = p.to_string_lossy().to_string();
    }

    let session = resolve_session(&cli, &cfg)?;
    dispatch(&cli, &cfg, &session)
}
