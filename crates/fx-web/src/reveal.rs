//! Scroll-triggered reveal activation plus the unconditional reveal-on-load
//! pass. The two are independent layers over the same `.reveal` elements.

use crate::subscriptions::Subscription;
use fx_core::{RevealState, REVEAL_THRESHOLD};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_SELECTOR: &str = ".reveal";
const ACTIVE_CLASS: &str = "active";
const LOAD_CLASS: &str = "load-animation";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

pub struct RevealPass {
    observer: Option<web::IntersectionObserver>,
    _callback: Option<ObserverCallback>,
    _subs: Vec<Subscription>,
}

pub fn wire(window: &web::Window, document: &web::Document) -> anyhow::Result<RevealPass> {
    let targets = reveal_elements(document);
    if targets.is_empty() {
        return Ok(RevealPass {
            observer: None,
            _callback: None,
            _subs: Vec::new(),
        });
    }
    log::info!("observing {} reveal elements", targets.len());

    // The activated flag lives on the element itself as the active class,
    // so the one-shot rule survives without a per-element map here.
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let classes = target.class_list();
                let mut state = RevealState::with_active(classes.contains(ACTIVE_CLASS));
                if state.observe(entry.intersection_ratio()) {
                    let _ = classes.add_1(ACTIVE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {e:?}"))?;
    for el in &targets {
        observer.observe(el);
    }

    // Reveal-on-load: every marked element gets the load class regardless
    // of visibility.
    let load_targets = targets;
    let load_sub = Subscription::listen(window.as_ref(), "load", move |_| {
        for el in &load_targets {
            let _ = el.class_list().add_1(LOAD_CLASS);
        }
    });

    Ok(RevealPass {
        observer: Some(observer),
        _callback: Some(callback),
        _subs: vec![load_sub],
    })
}

impl Drop for RevealPass {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn reveal_elements(document: &web::Document) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(REVEAL_SELECTOR) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}
