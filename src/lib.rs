#![cfg(target_arch = "wasm32")]
use particle_core::{SimConfig, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod overlay;
mod status;

use constants::*;
use events::Shared;
use lifecycle::{loop_action, LoopAction, PageTransition};
use status::StatusLine;

const BANNER: &str = "
  [G] - Toggle Gravity ON/OFF
  [F] - Freeze/Unfreeze the Animation
  [T] - Toggle Particle Trails
  [E] - Explosion
  [D] - Show/Hide Debug Overlay
  [B] - Binary Mode (hold)
  [SPACE] - Time Warp (hold)
  Click the logo to spawn particles; drag to push them away.";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<Simulation>>) {
    let canvas_resize = canvas.clone();
    let sim_resize = sim.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(size) = dom::sync_canvas_to_window(&canvas_resize) {
            sim_resize.borrow_mut().resize(size.x, size.y);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_page_lifecycle(frame_loop: &frame::FrameLoop) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pagehide", "pageshow"] {
        let frame_loop = frame_loop.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
            let persisted = ev.persisted();
            let transition = if ev.type_() == "pagehide" {
                PageTransition::Hide { persisted }
            } else {
                PageTransition::Show { persisted }
            };
            match loop_action(transition) {
                Some(LoopAction::Stop) => {
                    log::info!("page discarded; stopping animation loop");
                    frame_loop.stop();
                }
                Some(LoopAction::Pause) => frame_loop.stop(),
                Some(LoopAction::Resume) => {
                    log::info!("page restored; resuming animation loop");
                    frame_loop.start();
                }
                None => {}
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let sim = Simulation::new(SimConfig::default(), random_seed())?;
    let sim = Rc::new(RefCell::new(sim));
    let size =
        dom::sync_canvas_to_window(&canvas).ok_or_else(|| anyhow::anyhow!("no window size"))?;
    sim.borrow_mut().resize(size.x, size.y);
    wire_canvas_resize(&canvas, &sim);

    let status = Rc::new(RefCell::new(StatusLine::new(
        STATUS_INITIAL,
        &HINTS,
        Duration::from_millis(HINT_PERIOD_MS),
        &STICKY_MARKERS,
    )));
    overlay::write_status(&document, STATUS_INITIAL);
    overlay::set_visible(&document, false);

    let shared = Shared {
        sim,
        status,
        document,
    };
    events::wire_keyboard(shared.clone());
    events::wire_pointer(shared.clone());

    let frame_loop = frame::FrameLoop::new(frame::FrameContext::new(
        shared,
        canvas,
        canvas::CanvasSurface::new(ctx),
    ));
    wire_page_lifecycle(&frame_loop);
    frame_loop.start();

    log::info!("interactive commands:{BANNER}");
    Ok(())
}
