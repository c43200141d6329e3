//! # Introduction
//!
//! sortty animates bubble sort over a small numeric sequence in the terminal,
//! rendering each element as a proportionally sized bar and stepping through
//! comparisons and swaps with configurable timing. The UI is built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Architecture
//!
//! ```text
//! text fields → input → SortEngine (SequenceModel + VisualState + RunGate) → panes
//! ```
//!
//! 1. [`input`] — parses/clamps the size, manual-list, and speed fields.
//! 2. [`sort`] — the animation engine: a step-driven state machine that
//!    mutates the sequence and its bar projection between timed suspension
//!    points, guarded by a run gate against re-entrant runs.
//! 3. [`ui`] — ratatui-based TUI; schedules engine steps off the delays the
//!    engine returns and redraws every frame. Not part of the stable library
//!    API.
//!
//! Outside a swap's in-flight window, every displayed bar value equals the
//! backing sequence value at the same index; the engine's step boundaries are
//! the only places either representation changes.

pub mod input;
pub mod sort;
pub mod ui;
