//! Strata - headless browser chrome host
//!
//! Reads one command per line from stdin, routes it through the browser
//! and prints the resulting chrome state as JSON on stdout. Logs go to
//! stderr.

mod commands;
mod headless;
mod state;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use strata_core::{ChromeState, Config};

use commands::{CommandResult, HostCommand};
use state::AppState;

pub use commands::CommandError;
pub use headless::{HeadlessHost, HeadlessSurface, HeadlessWindow};

pub fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Initialize logging
    strata_core::init_logging();

    let config = match config_path {
        Some(path) => Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let mut state = AppState::new(config).context("failed to create browser")?;
    state.initialize().context("failed to open first tab")?;

    tracing::info!("Strata started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    print_reply(&mut stdout, &CommandResult::ok(state.chrome_state()))?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<HostCommand>() {
            Ok(HostCommand::Quit) => break,
            Ok(command) => match state.apply(command) {
                Ok(_) => CommandResult::ok(state.chrome_state()),
                Err(e) => CommandResult::err(e.to_string()),
            },
            Err(e) => CommandResult::err(e.to_string()),
        };

        print_reply(&mut stdout, &reply)?;

        if state.is_closed() {
            break;
        }
    }

    tracing::info!("Strata stopped");

    Ok(())
}

fn print_reply(out: &mut impl Write, reply: &CommandResult<ChromeState>) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, reply)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
