//! Run exclusivity and control disabling

use crate::sort::errors::CommandError;
use rustc_hash::FxHashSet;

/// Every user-facing control the gate disables for a run's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Generate,
    Sort,
    Reset,
    SizeInput,
    ElementsInput,
    SpeedInput,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::Generate,
        Control::Sort,
        Control::Reset,
        Control::SizeInput,
        Control::ElementsInput,
        Control::SpeedInput,
    ];
}

/// Guards against concurrent runs and tracks which controls are disabled.
///
/// At most one run is active at any time. `exit` must run on every exit path
/// of a run so controls are never left permanently disabled.
#[derive(Debug, Default)]
pub struct RunGate {
    active: bool,
    disabled: FxHashSet<Control>,
}

impl RunGate {
    pub fn new() -> Self {
        RunGate {
            active: false,
            disabled: FxHashSet::default(),
        }
    }

    /// Claim the run slot, disabling every control. Fails with `Busy` if a
    /// run already holds the slot.
    pub fn try_enter(&mut self) -> Result<(), CommandError> {
        if self.active {
            return Err(CommandError::Busy { command: "sort" });
        }
        self.active = true;
        self.disabled.extend(Control::ALL);
        Ok(())
    }

    /// Release the run slot and re-enable all controls. Idempotent.
    pub fn exit(&mut self) {
        self.active = false;
        self.disabled.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_disabled(&self, control: Control) -> bool {
        self.disabled.contains(&control)
    }
}
