// Shared tuning constants for the page effects.

// Particle field
pub const PARTICLE_COUNT: usize = 38;
pub const PARTICLE_FPS: f64 = 30.0; // cap to reduce main-thread work

// Spawn ranges: size = MIN + rand * SPAN, same shape for opacity
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const PARTICLE_SPEED_SPAN: f32 = 1.0; // velocity component = (rand - 0.5) * SPAN
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;

// Accent colour for particle dots (rgb)
pub const ACCENT_RGB: [u8; 3] = [0, 212, 255];

// Backing-store scale clamp; anything denser buys nothing visually
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Rendering is held while the user scrolls; the hold is released after
// this much scroll-idle time
pub const SCROLL_IDLE_MS: i32 = 120;

// Reveal observer
pub const REVEAL_THRESHOLD: f64 = 0.2;
// Browsers can report the threshold crossing a hair under 0.2, and with a
// single observer threshold no later callback retries the activation
pub const REVEAL_RATIO_EPSILON: f64 = 1e-3;

// Loader exit timeline (milliseconds)
pub const LOADER_EXIT_DELAY_MS: i32 = 1100;
pub const LOADER_EXIT_DELAY_REDUCED_MS: i32 = 400;
pub const LOADER_FADE_MS: i32 = 450;
pub const LOADER_REMOVE_DELAY_MS: i32 = 520; // covers the fade transition

#[inline]
pub fn frame_interval_ms() -> f64 {
    1000.0 / PARTICLE_FPS
}
