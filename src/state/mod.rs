//! Ephemeral UI state. Nothing here is persisted.
//!
//! - `runtime`: State, Focus, ColumnVisibility
//! - `transition`: detail pane show/hide animation
//! - `container`: StateContainer (dispatch + subscriber notification)

pub mod container;
pub mod runtime;
pub mod transition;

pub use container::StateContainer;
pub use runtime::{ColumnVisibility, Focus, State};
pub use transition::Transition;
