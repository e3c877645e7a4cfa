use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::{
    ExecutableCommand,
    event::DisableBracketedPaste,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Panic log file name inside the errors directory
const PANIC_LOG: &str = "panic.log";

/// Restore the terminal and append the panic to `<errors_dir>/panic.log`.
/// Without this a panic leaves the terminal in raw mode + alternate screen
/// and the message is lost.
pub fn install_hook(errors_dir: PathBuf) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(DisableBracketedPaste);
        let _ = io::stdout().execute(LeaveAlternateScreen);

        let backtrace = std::backtrace::Backtrace::force_capture();
        let msg = format!("[{}] {}\n\n{}\n\n---\n", chrono::Utc::now().to_rfc3339(), info, backtrace);
        tracing::error!(panic = %info, "application panicked");

        let _ = std::fs::create_dir_all(&errors_dir);
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(errors_dir.join(PANIC_LOG))
            .and_then(|mut f| f.write_all(msg.as_bytes()));

        default_hook(info);
    }));
}
