//! Frame admission policy for the particle loop.
//!
//! The loop reschedules itself on every animation frame; this module decides
//! which of those frames actually do clear+step+draw work.

use crate::constants::PARTICLE_FPS;
use instant::Instant;
use std::time::Duration;

/// Admits at most one frame per interval. The first frame always passes.
pub struct FrameGate {
    interval: Duration,
    last: Option<Instant>,
}

impl FrameGate {
    pub fn new(fps: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps),
            last: None,
        }
    }

    pub fn admit(&mut self, now: Instant) -> bool {
        match self.last {
            Some(prev) if now.duration_since(prev) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Outcome of one animation-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    /// Do the clear+step+draw work.
    Render,
    /// Skip: the user is actively scrolling.
    HoldScroll,
    /// Skip: inside the frame-rate cap window.
    Throttle,
}

/// Per-frame decision: scroll suppression first, then the rate cap.
/// A scroll hold does not consume the gate, so the next free frame can
/// render immediately.
pub struct FramePolicy {
    gate: FrameGate,
}

impl Default for FramePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePolicy {
    pub fn new() -> Self {
        Self {
            gate: FrameGate::new(PARTICLE_FPS),
        }
    }

    pub fn step(&mut self, now: Instant, scroll_active: bool) -> FrameStep {
        if scroll_active {
            return FrameStep::HoldScroll;
        }
        if self.gate.admit(now) {
            FrameStep::Render
        } else {
            FrameStep::Throttle
        }
    }
}
