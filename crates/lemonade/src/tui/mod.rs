//! Terminal UI for the lemonade stand.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::assets::AssetCatalog;
use crate::config::LemonadeConfig;
use app::App;
use input::{key_action, mouse_action};

/// Runs the interactive lemonade screen until the user quits.
pub fn run_tui(config: &LemonadeConfig, catalog: AssetCatalog) -> Result<()> {
    // Log to a file so tracing output doesn't tear the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(crate::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(seed = ?config.seed(), "Starting lemonade TUI");

    let mut app = App::new(*config.seed(), catalog, *config.show_squeeze_readout());
    // Fail before touching the terminal if the catalog is incomplete.
    app.rendered().context("Resource catalog is incomplete")?;

    enable_raw_mode()?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);
    drop(guard);
    if let Err(err) = terminal.show_cursor() {
        error!(error = ?err, "Failed to show cursor");
    }

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!(taps = app.session().taps(), "Lemonade TUI closed");
    res
}

/// Restores the terminal when dropped, including on early `?` returns.
///
/// Every step runs even if an earlier one fails.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        for err in restore_terminal() {
            error!(error = ?err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen, collecting every failure.
fn restore_terminal() -> Vec<io::Error> {
    let mut errors = Vec::new();
    if let Err(err) = disable_raw_mode() {
        errors.push(err);
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        errors.push(err);
    }
    errors
}

/// Draw, wait for one event, apply it. One tap is fully handled before the
/// next event is read.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let view = app.rendered()?;
        let mut image_area = app.image_area();
        terminal.draw(|frame| image_area = ui::draw(frame, &view))?;
        app.set_image_area(image_area);

        let action = match event::read()? {
            Event::Key(key) => key_action(key),
            Event::Mouse(mouse) => mouse_action(mouse, app.image_area()),
            _ => None,
        };

        if let Some(action) = action {
            app.apply(action);
        }
    }

    Ok(())
}
