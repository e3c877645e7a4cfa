mod app;
mod infra;
mod state;
mod ui;

use std::io;

use crossterm::{
    ExecutableCommand,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use bb_base::config::AppConfig;
use bb_base::{ItemStore, StoreConfig};

use app::App;
use state::State;
use ui::split::{FormFactor, layout_for};

fn main() -> io::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let (config, warnings) = AppConfig::load();

    let log_path = infra::logging::init(&config);
    report_config_warnings(&warnings, log_path.is_some());
    infra::panic::install_hook(config.errors_dir());

    // The app has no degraded mode without its store: fail fast, before the
    // terminal is switched into raw mode.
    let store = open_store_or_exit(&config);

    let terminal_width = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(u16::MAX);
    let form_factor = FormFactor::detect(config.form_factor, terminal_width);
    tracing::info!(%form_factor, preference = %config.form_factor, log = ?log_path, "starting bookbrain");

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(State::default(), store, layout_for(form_factor));
    let result = app.run(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

/// Surface rejected config values once a sink exists: the log file, or
/// stderr when logging is disabled.
fn report_config_warnings(warnings: &[String], logging: bool) {
    for warning in warnings {
        if logging {
            tracing::warn!("{}", warning);
        } else {
            eprintln!("warning: {}", warning);
        }
    }
}

fn open_store_or_exit(config: &AppConfig) -> ItemStore {
    match ItemStore::open(&StoreConfig::on_disk(&config.store_dir)) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, store_dir = %config.store_dir.display(), "could not create item store");
            eprintln!("fatal: could not create item store: {}", e);
            std::process::exit(1);
        }
    }
}
