pub mod actions;
mod app;
pub mod events;

pub use app::App;

/// Wall-clock milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}
