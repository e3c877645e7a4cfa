pub const HORIZONTAL: &str = "─";
pub const VERTICAL: &str = "│";
pub const SIDEBAR_RIGHT: &str = "◨";
pub const ATOM: &str = "⚛";
pub const ARROW_RIGHT: &str = "▸";
