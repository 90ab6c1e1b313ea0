//! # CLI Layer
//!
//! This module is **one possible UI client** for notelog, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and its configuration
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::render::{render_config, render_messages};
use super::session::{Session, SessionOptions};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use notelog::api::{ConfigAction, NotelogApi};
use notelog::config::NotelogConfig;
use notelog::error::{NotelogError, Result};
use notelog::store::memory::InMemoryStore;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

struct AppContext {
    api: NotelogApi<InMemoryStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Session {
            placeholder,
            summary,
        }) => handle_session(&mut ctx, placeholder, summary),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_session(&mut ctx, None, false),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let config = NotelogConfig::load(&config_dir)?;
    log::debug!("using config dir {}", config_dir.display());

    let api = NotelogApi::new(InMemoryStore::new(), config, config_dir);
    Ok(AppContext { api })
}

fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "notelog", "notelog")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| NotelogError::Config("Could not determine config dir".to_string()))
}

fn handle_session(ctx: &mut AppContext, placeholder: Option<String>, summary: bool) -> Result<()> {
    let stdin = io::stdin();
    let options = SessionOptions {
        interactive: stdin.is_terminal(),
        placeholder,
        summary,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let logged = Session::new(&mut ctx.api, options).run(stdin.lock(), &mut out)?;
    log::debug!("session ended after {} notes", logged);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    match &result.config {
        Some(config) if result.messages.is_empty() => print!("{}", render_config(config)),
        _ => {}
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}
