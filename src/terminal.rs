//! Terminal and logging setup shared by the binaries.

use std::io::{Stdout, stdout};
use std::panic;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{ConsoleError, Result};

pub type ConsoleTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Log to `path` when given. The TUI owns stdout, so without a file nothing is
/// logged. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging(path: Option<&str>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
    true
}

/// Enter raw mode on the alternate screen. A panic hook restores the
/// terminal before the default hook prints.
pub fn setup() -> Result<ConsoleTerminal> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(terminal_error)?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen).map_err(terminal_error)?;
    Terminal::new(CrosstermBackend::new(out)).map_err(terminal_error)
}

pub fn restore() -> Result<()> {
    disable_raw_mode().map_err(terminal_error)?;
    execute!(stdout(), LeaveAlternateScreen).map_err(terminal_error)?;
    Ok(())
}

pub fn terminal_error(e: std::io::Error) -> ConsoleError {
    ConsoleError::Terminal(e.to_string())
}
