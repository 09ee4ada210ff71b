//! Timing schedule for the loading-overlay exit.

use crate::constants::{
    LOADER_EXIT_DELAY_MS, LOADER_EXIT_DELAY_REDUCED_MS, LOADER_FADE_MS, LOADER_REMOVE_DELAY_MS,
};

/// The loader exit runs in two timer hops after page load: wait
/// `exit_delay_ms`, start a `fade_ms` opacity transition, then remove the
/// element `remove_delay_ms` later (long enough to cover the fade).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderSchedule {
    pub exit_delay_ms: i32,
    pub fade_ms: i32,
    pub remove_delay_ms: i32,
}

impl LoaderSchedule {
    /// Quicker exit when the platform requests reduced motion.
    pub fn for_motion(reduced_motion: bool) -> Self {
        Self {
            exit_delay_ms: if reduced_motion {
                LOADER_EXIT_DELAY_REDUCED_MS
            } else {
                LOADER_EXIT_DELAY_MS
            },
            fade_ms: LOADER_FADE_MS,
            remove_delay_ms: LOADER_REMOVE_DELAY_MS,
        }
    }

    /// Offset from page load at which the element leaves the DOM.
    pub fn removal_offset_ms(&self) -> i32 {
        self.exit_delay_ms + self.remove_delay_ms
    }
}
