//! The animation engine: bubble sort as a sequence of timed, suspendable steps
//!
//! The engine never sleeps. Every suspension point in the sort is a named step
//! boundary: [`SortEngine::start_sort`] applies the first step and returns the
//! first delay, and each [`SortEngine::step`] call applies the step at the
//! current boundary and returns the delay until the next one (`None` once the
//! run has completed and the gate is released). The caller owns the clock:
//! the TUI schedules steps off the returned durations, while tests drive the
//! run to completion instantly.

use crate::sort::errors::CommandError;
use crate::sort::gate::{Control, RunGate};
use crate::sort::sequence::{GenerateSource, SequenceModel};
use crate::sort::timing::Timing;
use crate::sort::visual::{Highlight, VisualState};
use std::time::Duration;

/// Which suspension window the run is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pair `(compare, compare + 1)` is highlighted; values not yet read.
    Comparing,
    /// Pair is out of order and flashing the swap highlight; the exchange
    /// happens when this window elapses.
    Swapping,
    /// Highlights cleared; short pause before the next comparison.
    Pacing,
}

/// Run lifecycle. `Completed` is quiescent and accepts commands exactly like
/// `Idle`; it only exists so the UI can show a completion badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running {
        pass: usize,
        compare: usize,
        phase: Phase,
    },
    Completed,
}

/// Owns the sequence, its visual projection, and the run gate, and drives the
/// bubble-sort step sequence over them.
pub struct SortEngine {
    sequence: SequenceModel,
    visual: VisualState,
    gate: RunGate,
    timing: Timing,
    state: RunState,

    /// Comparisons performed in the current/last run.
    comparisons: usize,

    /// Swaps performed in the current/last run.
    swaps: usize,
}

impl Default for SortEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SortEngine {
    pub fn new() -> Self {
        SortEngine {
            sequence: SequenceModel::new(),
            visual: VisualState::new(),
            gate: RunGate::new(),
            timing: Timing::default(),
            state: RunState::Idle,
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Replace the sequence and rebuild the bar projection.
    /// Rejected with `Busy` while a run is active.
    pub fn generate(&mut self, source: GenerateSource) -> Result<(), CommandError> {
        if self.gate.is_active() {
            return Err(CommandError::Busy {
                command: "generate",
            });
        }
        self.sequence.generate(source)?;
        self.visual.rebuild(&self.sequence);
        self.state = RunState::Idle;
        Ok(())
    }

    /// Clear the sequence and projection. Rejected with `Busy` while a run is
    /// active.
    pub fn reset(&mut self) -> Result<(), CommandError> {
        if self.gate.is_active() {
            return Err(CommandError::Busy { command: "reset" });
        }
        self.sequence.reset();
        self.visual.rebuild(&self.sequence);
        self.state = RunState::Idle;
        Ok(())
    }

    /// Start a run. Both preconditions are checked before any mutation, so a
    /// rejected start leaves every component untouched.
    ///
    /// Returns the first suspension delay (the initial compare window).
    pub fn start_sort(&mut self) -> Result<Duration, CommandError> {
        if self.gate.is_active() {
            return Err(CommandError::Busy { command: "sort" });
        }
        if self.sequence.len() < 2 {
            return Err(CommandError::PreconditionFailed {
                message: "Nothing to sort: need at least 2 elements".to_string(),
            });
        }

        self.gate.try_enter()?;
        self.comparisons = 0;
        self.swaps = 0;
        self.state = RunState::Running {
            pass: 0,
            compare: 0,
            phase: Phase::Comparing,
        };
        self.mark_comparing(0);
        Ok(self.timing.compare_delay())
    }

    /// Apply the step at the current suspension boundary.
    ///
    /// Returns the delay until the next boundary, or `None` once the run has
    /// completed (gate exited, every bar settled). Calling this while idle is
    /// a no-op returning `None`.
    pub fn step(&mut self) -> Option<Duration> {
        let RunState::Running {
            pass,
            compare,
            phase,
        } = self.state
        else {
            return None;
        };

        match phase {
            Phase::Comparing => {
                self.comparisons += 1;
                // Read from the authoritative sequence; the projection is
                // write-only from the engine's perspective.
                let pair = self
                    .sequence
                    .get(compare)
                    .zip(self.sequence.get(compare + 1));
                let Some((left, right)) = pair else {
                    // Indices come from the gated, fixed-length sequence, so
                    // a missing pair means the run cannot continue; release
                    // the gate rather than leave controls stuck disabled.
                    self.gate.exit();
                    self.state = RunState::Idle;
                    return None;
                };

                if left > right {
                    self.visual.set_highlight(compare, Highlight::Swapping);
                    self.visual.set_highlight(compare + 1, Highlight::Swapping);
                    self.state = RunState::Running {
                        pass,
                        compare,
                        phase: Phase::Swapping,
                    };
                    Some(self.timing.swap_delay())
                } else {
                    // Equal values never swap
                    self.clear_pair(compare);
                    self.state = RunState::Running {
                        pass,
                        compare,
                        phase: Phase::Pacing,
                    };
                    Some(self.timing.post_compare_delay())
                }
            }
            Phase::Swapping => {
                // Both representations exchange in the same step; no other
                // component can observe the mid-exchange state.
                self.sequence.swap_adjacent(compare);
                self.visual.swap_values(compare);
                self.swaps += 1;
                self.clear_pair(compare);
                self.state = RunState::Running {
                    pass,
                    compare,
                    phase: Phase::Pacing,
                };
                Some(self.timing.post_compare_delay())
            }
            Phase::Pacing => self.advance(pass, compare),
        }
    }

    /// Move to the next compare, next pass, or completion.
    fn advance(&mut self, pass: usize, compare: usize) -> Option<Duration> {
        let n = self.sequence.len();

        if compare + 1 < n - 1 - pass {
            let next = compare + 1;
            self.mark_comparing(next);
            self.state = RunState::Running {
                pass,
                compare: next,
                phase: Phase::Comparing,
            };
            return Some(self.timing.compare_delay());
        }

        // Inner pass done: the largest remaining value has bubbled to the end
        self.visual.set_highlight(n - 1 - pass, Highlight::Settled);

        if pass + 1 < n - 1 {
            self.mark_comparing(0);
            self.state = RunState::Running {
                pass: pass + 1,
                compare: 0,
                phase: Phase::Comparing,
            };
            return Some(self.timing.compare_delay());
        }

        // All passes done. The blanket settle is the authoritative completion
        // signal; per-pass settling above is cosmetic.
        self.visual.settle_all();
        self.state = RunState::Completed;
        self.gate.exit();
        None
    }

    fn mark_comparing(&mut self, i: usize) {
        self.visual.set_highlight(i, Highlight::Comparing);
        self.visual.set_highlight(i + 1, Highlight::Comparing);
    }

    fn clear_pair(&mut self, i: usize) {
        self.visual.set_highlight(i, Highlight::None);
        self.visual.set_highlight(i + 1, Highlight::None);
    }

    /// Set the delay policy for subsequent runs.
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    pub fn sequence(&self) -> &SequenceModel {
        &self.sequence
    }

    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    pub fn is_completed(&self) -> bool {
        self.state == RunState::Completed
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn swaps(&self) -> usize {
        self.swaps
    }

    pub fn gate(&self) -> &RunGate {
        &self.gate
    }

    pub fn is_control_disabled(&self, control: Control) -> bool {
        self.gate.is_disabled(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(values: Vec<i64>) -> SortEngine {
        let mut engine = SortEngine::new();
        engine
            .generate(GenerateSource::Manual(values))
            .expect("generation failed");
        engine
    }

    #[test]
    fn test_start_marks_first_pair_and_returns_compare_delay() {
        let mut engine = engine_with(vec![2, 1, 3]);
        let delay = engine.start_sort().unwrap();

        assert_eq!(delay, Timing::default().compare_delay());
        assert_eq!(engine.visual().highlight(0), Some(Highlight::Comparing));
        assert_eq!(engine.visual().highlight(1), Some(Highlight::Comparing));
        assert_eq!(engine.visual().highlight(2), Some(Highlight::None));
        assert_eq!(
            engine.state(),
            RunState::Running {
                pass: 0,
                compare: 0,
                phase: Phase::Comparing
            }
        );
    }

    #[test]
    fn test_out_of_order_pair_enters_swap_window() {
        let mut engine = engine_with(vec![2, 1]);
        engine.start_sort().unwrap();

        // Compare boundary: 2 > 1, so the pair flashes the swap highlight
        let delay = engine.step().unwrap();
        assert_eq!(delay, Timing::default().swap_delay());
        assert_eq!(engine.visual().highlight(0), Some(Highlight::Swapping));
        assert_eq!(engine.visual().highlight(1), Some(Highlight::Swapping));
        // Values have not moved yet
        assert_eq!(engine.sequence().values(), &[2, 1]);

        // Swap boundary: both representations exchange in one step
        let delay = engine.step().unwrap();
        assert_eq!(delay, Timing::default().post_compare_delay());
        assert_eq!(engine.sequence().values(), &[1, 2]);
        assert_eq!(engine.visual().displayed_value(0), Some(1));
        assert_eq!(engine.visual().displayed_value(1), Some(2));
        assert_eq!(engine.visual().highlight(0), Some(Highlight::None));

        // Pacing boundary: pass and run complete
        assert_eq!(engine.step(), None);
        assert_eq!(engine.state(), RunState::Completed);
        assert!(!engine.gate().is_active());
    }

    #[test]
    fn test_in_order_pair_skips_swap_window() {
        let mut engine = engine_with(vec![1, 2]);
        engine.start_sort().unwrap();

        let delay = engine.step().unwrap();
        assert_eq!(delay, Timing::default().post_compare_delay());
        assert_eq!(engine.visual().highlight(0), Some(Highlight::None));
        assert_eq!(engine.swaps(), 0);
    }

    #[test]
    fn test_pass_end_settles_last_unsorted_index() {
        let mut engine = engine_with(vec![1, 2, 3]);
        engine.start_sort().unwrap();

        // Pass 0: two in-order comparisons, then index 2 settles
        engine.step(); // compare (0,1)
        engine.step(); // pacing -> compare (1,2)
        engine.step(); // compare (1,2)
        engine.step(); // pacing -> pass 1
        assert_eq!(engine.visual().highlight(2), Some(Highlight::Settled));
        assert!(matches!(
            engine.state(),
            RunState::Running { pass: 1, compare: 0, .. }
        ));
    }

    #[test]
    fn test_custom_timing_drives_delays() {
        let mut engine = engine_with(vec![2, 1]);
        engine.set_timing(Timing::from_base_ms(600));

        let delay = engine.start_sort().unwrap();
        assert_eq!(delay, Duration::from_millis(600));
        assert_eq!(engine.step(), Some(Duration::from_millis(150)));
        assert_eq!(engine.step(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_step_while_idle_is_noop() {
        let mut engine = engine_with(vec![1, 2]);
        assert_eq!(engine.step(), None);
        assert_eq!(engine.state(), RunState::Idle);
    }
}
