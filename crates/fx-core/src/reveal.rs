//! One-shot activation rule for scroll-reveal elements.

use crate::constants::{REVEAL_RATIO_EPSILON, REVEAL_THRESHOLD};

/// Activation state of a single reveal element. Flips to active at most
/// once, the first time its visible-area ratio reaches the threshold;
/// later observations never deactivate it.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealState {
    active: bool,
}

impl RevealState {
    /// Rebuild state from an externally stored flag (the web frontend keeps
    /// the flag as a CSS class on the element itself).
    pub fn with_active(active: bool) -> Self {
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one visibility observation. Returns true exactly when this
    /// observation activates the element. Ratios within
    /// `REVEAL_RATIO_EPSILON` below the threshold still count as crossings.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.active || visible_ratio < REVEAL_THRESHOLD - REVEAL_RATIO_EPSILON {
            return false;
        }
        self.active = true;
        true
    }
}
