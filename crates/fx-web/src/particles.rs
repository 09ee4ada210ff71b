//! Canvas particle layer: owns the field, the frame loop, and the
//! listeners that drive its lifecycle.

use crate::dom;
use crate::metrics;
use crate::subscriptions::Subscription;
use fx_core::{FramePolicy, FrameStep, ParticleField, ACCENT_RGB, SCROLL_IDLE_MS};
use glam::Vec2;
use instant::Instant;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "particleCanvas";

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct ParticleLayer {
    running: Rc<Cell<bool>>,
    tick: Tick,
    scroll_timer: Rc<Cell<Option<i32>>>,
    _scroll_release: Rc<Closure<dyn FnMut()>>,
    _subs: Vec<Subscription>,
}

impl ParticleLayer {
    /// Locate the canvas and wire the layer. Returns `Ok(None)` when the
    /// page has no canvas, the feature flag is off, or the user prefers
    /// reduced motion; in the latter two cases the canvas is hidden.
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        reduced_motion: bool,
    ) -> anyhow::Result<Option<Self>> {
        let Some(el) = document.get_element_by_id(CANVAS_ID) else {
            return Ok(None);
        };
        let canvas: web::HtmlCanvasElement = el
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("#{CANVAS_ID} is not a canvas"))?;

        if !cfg!(feature = "particles") || reduced_motion {
            dom::hide(&canvas);
            log::info!(
                "particle layer disabled ({})",
                if reduced_motion { "reduced motion" } else { "feature off" }
            );
            return Ok(None);
        }

        let ctx = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        {
            Some(ctx) => ctx,
            None => {
                dom::hide(&canvas);
                log::warn!("no 2d context; particle layer disabled");
                return Ok(None);
            }
        };

        let bounds = fit_to_viewport(window, &canvas, &ctx)?;
        let rng = Rc::new(RefCell::new(SmallRng::from_entropy()));
        let field = Rc::new(RefCell::new(ParticleField::new(
            bounds,
            &mut *rng.borrow_mut(),
        )));

        let running = Rc::new(Cell::new(false));
        let scroll_hold = Rc::new(Cell::new(false));
        let scroll_timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        // Frame loop; reschedules itself every animation frame while the
        // layer is running, drawing only when the policy admits the frame.
        let tick: Tick = Rc::new(RefCell::new(None));
        {
            let tick_inner = tick.clone();
            let running_t = running.clone();
            let scroll_t = scroll_hold.clone();
            let field_t = field.clone();
            let ctx_t = ctx.clone();
            let mut policy = FramePolicy::new();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if !running_t.get() {
                    return;
                }
                if policy.step(Instant::now(), scroll_t.get()) == FrameStep::Render {
                    let mut f = field_t.borrow_mut();
                    f.step();
                    draw(&ctx_t, &f);
                }
                if let Some(w) = web::window() {
                    let _ = w.request_animation_frame(
                        tick_inner
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    );
                }
            }) as Box<dyn FnMut()>));
        }

        let mut subs = Vec::new();

        // Viewport resize regenerates the whole field at the new size.
        {
            let canvas_r = canvas.clone();
            let ctx_r = ctx.clone();
            let field_r = field.clone();
            let rng_r = rng.clone();
            subs.push(Subscription::listen(window.as_ref(), "resize", move |_| {
                if let Some(w) = web::window() {
                    match fit_to_viewport(&w, &canvas_r, &ctx_r) {
                        Ok(bounds) => field_r.borrow_mut().resize(bounds, &mut *rng_r.borrow_mut()),
                        Err(e) => log::error!("canvas resize: {e:?}"),
                    }
                }
            }));
        }

        // Rendering is held while the user scrolls; a one-shot timeout
        // releases the hold once scrolling goes idle.
        let scroll_release: Rc<Closure<dyn FnMut()>> = {
            let scroll_r = scroll_hold.clone();
            let timer_r = scroll_timer.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                scroll_r.set(false);
                timer_r.set(None);
            }) as Box<dyn FnMut()>))
        };
        {
            let scroll_s = scroll_hold.clone();
            let timer_s = scroll_timer.clone();
            let release_s = scroll_release.clone();
            subs.push(Subscription::listen(window.as_ref(), "scroll", move |_| {
                scroll_s.set(true);
                if let Some(w) = web::window() {
                    if let Some(handle) = timer_s.take() {
                        w.clear_timeout_with_handle(handle);
                    }
                    if let Ok(handle) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                        release_s.as_ref().as_ref().unchecked_ref(),
                        SCROLL_IDLE_MS,
                    ) {
                        timer_s.set(Some(handle));
                    }
                }
            }));
        }

        // Suspend while the tab is hidden, resume on return.
        {
            let running_v = running.clone();
            let tick_v = tick.clone();
            let doc_v = document.clone();
            subs.push(Subscription::listen(
                document.as_ref(),
                "visibilitychange",
                move |_| {
                    let visible = !doc_v.hidden();
                    running_v.set(visible);
                    if visible {
                        request_frame(&tick_v);
                    }
                },
            ));
        }

        Ok(Some(Self {
            running,
            tick,
            scroll_timer,
            _scroll_release: scroll_release,
            _subs: subs,
        }))
    }

    pub fn start(&self) {
        self.running.set(true);
        request_frame(&self.tick);
    }

    pub fn stop(&self) {
        self.running.set(false);
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        self.stop();
        // A pending scroll-idle timeout would fire into the release
        // closure after it is freed.
        if let Some(handle) = self.scroll_timer.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(handle);
            }
        }
    }
}

fn request_frame(tick: &Tick) {
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

/// Size the backing store to the viewport at the clamped device pixel
/// ratio and scale the context so draw coordinates are CSS pixels.
/// Returns the logical bounds for the field.
fn fit_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> anyhow::Result<Vec2> {
    let (css_w, css_h) =
        dom::viewport_size(window).ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    // Collapsed viewports (hidden iframes) report 0; keep the logical
    // bounds non-degenerate like the backing store below.
    let (css_w, css_h) = (css_w.max(1.0), css_h.max(1.0));
    let dpr = metrics::clamp_dpr(window.device_pixel_ratio());
    let (bw, bh) = metrics::backing_size(css_w, css_h, dpr);
    canvas.set_width(bw);
    canvas.set_height(bh);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{css_w}px"));
    let _ = style.set_property("height", &format!("{css_h}px"));
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("set_transform: {e:?}"))?;
    Ok(Vec2::new(css_w as f32, css_h as f32))
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    let b = field.bounds();
    ctx.clear_rect(0.0, 0.0, b.x as f64, b.y as f64);
    let [r, g, bl] = ACCENT_RGB;
    for p in field.particles() {
        ctx.set_fill_style_str(&format!("rgba({r}, {g}, {bl}, {})", p.opacity));
        ctx.begin_path();
        let _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}
