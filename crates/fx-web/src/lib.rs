#![cfg(target_arch = "wasm32")]
//! Ambient page effects: an optional canvas particle field, scroll-triggered
//! reveal classes, and the loading-overlay fade-out. The three behaviors are
//! independent; each degrades to a no-op when its page element is missing.

mod dom;
mod loader;
mod metrics;
mod particles;
mod reveal;
mod subscriptions;

use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion(&window);
    if reduced_motion {
        log::info!("reduced motion requested; animations minimized");
    }

    // Each behavior wires on its own; a failure in one disables only that
    // feature and leaves the others' listeners in place.
    let reveal = match reveal::wire(&window, &document) {
        Ok(pass) => Some(pass),
        Err(e) => {
            log::error!("reveal wiring: {e:?}");
            None
        }
    };
    let loader = loader::wire(&window, reduced_motion);
    let layer = match particles::ParticleLayer::mount(&window, &document, reduced_motion) {
        Ok(layer) => layer,
        Err(e) => {
            log::error!("particle layer: {e:?}");
            None
        }
    };
    if let Some(layer) = &layer {
        layer.start();
    }

    // Components live for the page session; dropping them tears their
    // listeners and observers back down.
    std::mem::forget((reveal, loader, layer));
    Ok(())
}
