//! Bubble-sort animation engine
//!
//! This module provides the core animation/synchronization logic:
//! - [`sequence`]: the canonical numeric sequence ([`sequence::SequenceModel`])
//! - [`visual`]: the bar projection the renderer observes ([`visual::VisualState`])
//! - [`gate`]: run exclusivity and control disabling ([`gate::RunGate`])
//! - [`timing`]: the three suspension delays derived from the speed control
//! - [`errors`]: the command rejection taxonomy
//! - [`engine`]: the step-driven state machine ([`engine::SortEngine`])
//!
//! # Execution Model
//!
//! A run is a sequence of synchronous steps separated by explicit timed
//! suspension points. The engine applies one step per [`engine::SortEngine::step`]
//! call and hands the delay until the next boundary back to the caller, which
//! owns the clock. At every boundary with no suspension pending, each bar's
//! displayed value equals the sequence value at its index.

pub mod engine;
pub mod errors;
pub mod gate;
pub mod sequence;
pub mod timing;
pub mod visual;

pub use engine::{Phase, RunState, SortEngine};
pub use errors::CommandError;
pub use gate::{Control, RunGate};
pub use sequence::{GenerateSource, SequenceModel};
pub use timing::Timing;
pub use visual::{Highlight, VisualState};
