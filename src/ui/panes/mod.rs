//! TUI pane rendering modules
//!
//! Stateless render functions for each visible region of the screen:
//!
//! - [`bars`]: the bar chart reflecting [`crate::sort::visual::VisualState`]
//! - [`controls`]: the size / elements / speed text fields
//! - [`status`]: status bar with keybindings, counters, and run state
//!
//! Each pane module exports a primary `render_*` function that draws from the
//! engine's read-only accessors; no pane ever writes engine state.

pub mod bars;
pub mod controls;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use controls::{render_controls_pane, FocusedField};
pub use status::render_status_bar;
