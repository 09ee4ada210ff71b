use web_sys as web;

#[inline]
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn viewport_size(window: &web::Window) -> Option<(f64, f64)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

// Hide entirely to avoid extra compositing work
#[inline]
pub fn hide(el: &web::Element) {
    let _ = el.set_attribute("style", "display:none");
}
