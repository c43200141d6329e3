//! The visual bar projection of the sequence
//!
//! [`VisualState`] is not an independent actor: it is a projection the engine
//! writes and the renderer reads. Outside a swap's in-flight window every
//! displayed value equals the backing sequence value at the same index.

use crate::sort::sequence::SequenceModel;

/// Highlight class of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Under comparison this step.
    Comparing,
    /// Mid-swap; shown for the swap delay window.
    Swapping,
    /// In its final sorted position.
    Settled,
}

/// One bar: a displayed value and its highlight class.
#[derive(Debug, Clone, Copy)]
pub struct VisualBar {
    pub value: i64,
    pub highlight: Highlight,
}

/// Ordered bar handles, index-aligned 1:1 with the sequence.
#[derive(Debug, Default, Clone)]
pub struct VisualState {
    bars: Vec<VisualBar>,
}

impl VisualState {
    pub fn new() -> Self {
        VisualState { bars: Vec::new() }
    }

    /// Rebuild every bar from the sequence, clearing all highlights.
    /// Called whenever the sequence is replaced (generate, reset).
    pub fn rebuild(&mut self, sequence: &SequenceModel) {
        self.bars = sequence
            .values()
            .iter()
            .map(|&value| VisualBar {
                value,
                highlight: Highlight::None,
            })
            .collect();
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[VisualBar] {
        &self.bars
    }

    pub fn displayed_value(&self, i: usize) -> Option<i64> {
        self.bars.get(i).map(|b| b.value)
    }

    pub fn highlight(&self, i: usize) -> Option<Highlight> {
        self.bars.get(i).map(|b| b.highlight)
    }

    pub fn set_highlight(&mut self, i: usize, highlight: Highlight) {
        if let Some(bar) = self.bars.get_mut(i) {
            bar.highlight = highlight;
        }
    }

    /// Exchange the displayed values at `i` and `i + 1`. Highlights stay with
    /// their positions, matching the positional compare/swap marks.
    pub fn swap_values(&mut self, i: usize) {
        if i + 1 < self.bars.len() {
            let left = self.bars[i].value;
            self.bars[i].value = self.bars[i + 1].value;
            self.bars[i + 1].value = left;
        }
    }

    /// Mark every bar settled. Idempotent; the authoritative end-of-run signal.
    pub fn settle_all(&mut self) {
        for bar in &mut self.bars {
            bar.highlight = Highlight::Settled;
        }
    }
}
