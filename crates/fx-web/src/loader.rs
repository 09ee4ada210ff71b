//! Loading-overlay exit: wait, fade, then remove the element.

use crate::subscriptions::Subscription;
use fx_core::LoaderSchedule;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const LOADER_ID: &str = "loader";

pub fn wire(window: &web::Window, reduced_motion: bool) -> Subscription {
    let schedule = LoaderSchedule::for_motion(reduced_motion);
    Subscription::listen(window.as_ref(), "load", move |_| {
        if let Err(e) = begin_exit(schedule) {
            log::error!("loader exit: {e:?}");
        }
    })
}

fn begin_exit(schedule: LoaderSchedule) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    // No loader on this page; nothing to do.
    let Some(loader) = document.get_element_by_id(LOADER_ID) else {
        return Ok(());
    };

    let fade = Closure::once_into_js(move || {
        // Set the three properties individually so pre-existing inline
        // styles on the overlay survive the fade.
        if let Some(html) = loader.dyn_ref::<web::HtmlElement>() {
            let style = html.style();
            let _ = style.set_property("transition", &format!("opacity {}ms ease", schedule.fade_ms));
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("pointer-events", "none");
        }
        let remove = Closure::once_into_js(move || loader.remove());
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                schedule.remove_delay_ms,
            );
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            fade.unchecked_ref(),
            schedule.exit_delay_ms,
        )
        .map_err(|e| anyhow::anyhow!("set_timeout: {e:?}"))?;
    Ok(())
}
