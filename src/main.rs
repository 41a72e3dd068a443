//! `article-params` - console host for the article parameters panel
//!
//! Reads one command per line from stdin and drives a panel session. Applied
//! configurations are printed as JSON; `show` draws the panel.

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use article_params::{
    config::{ConfigManager, PanelLayout},
    error::get_user_friendly_error,
    host::{HostCommand, Response, Session, help_text},
    utils, PanelError,
};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

fn main() -> Result<()> {
    let mut config = match ConfigManager::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", get_user_friendly_error(&e));
            Default::default()
        }
    };

    utils::init_logging(&config.preferences).context("Failed to initialize logging system")?;
    info!("Panel layout: {:?}", config.layout);

    let mut session = Session::new(config.layout);
    let mut layout_changed = false;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", gui::render(&session.state()))?;
    writeln!(stdout, "Type 'help' for commands.")?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<HostCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected input {:?}: {}", line, e);
                writeln!(stdout, "{}", get_user_friendly_error(&e))?;
                continue;
            }
        };

        match session.execute(command) {
            Response::Visibility(_) | Response::State(_) => {
                writeln!(stdout, "{}", gui::render(&session.state()))?;
            }
            Response::Dispatched { delivered, open } => {
                writeln!(
                    stdout,
                    "event reached {delivered} listener(s); panel {}",
                    if open { "open" } else { "closed" }
                )?;
            }
            Response::Edited(change) => {
                writeln!(
                    stdout,
                    "{} -> {} (not applied yet)",
                    change.key().title(),
                    change.option().title
                )?;
            }
            Response::Applied(params) => {
                let json = serde_json::to_string_pretty(&params)
                    .map_err(PanelError::from)
                    .context("Failed to encode applied configuration")?;
                writeln!(stdout, "applied:\n{json}")?;
            }
            Response::Moved(rect) => {
                config.layout = PanelLayout::from(rect);
                layout_changed = true;
                writeln!(stdout, "panel moved to {rect:?}; takes effect when it next opens")?;
            }
            Response::Help => writeln!(stdout, "{}", help_text())?,
            Response::Quit => break,
        }
        stdout.flush()?;
    }

    // Not fatal: the session already ran with the new layout
    if layout_changed
        && let Err(e) = ConfigManager::save(&config)
    {
        warn!("Failed to save panel layout: {}", e);
        eprintln!("{}", get_user_friendly_error(&e));
    }

    info!("article-params shutting down");
    Ok(())
}
