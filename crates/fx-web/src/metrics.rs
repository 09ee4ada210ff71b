// Pure sizing helpers for the canvas backing store. Kept free of platform
// types so they can be tested host-side.

use fx_core::MAX_DEVICE_PIXEL_RATIO;

/// Clamp a reported device pixel ratio to the useful range. Invalid or
/// non-positive values fall back to 1.0.
#[inline]
pub fn clamp_dpr(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store pixel size for a CSS-pixel viewport at the given ratio.
/// Never collapses to zero.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let w = (css_w * dpr).floor().max(1.0);
    let h = (css_h * dpr).floor().max(1.0);
    (w as u32, h as u32)
}
