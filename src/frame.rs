use crate::canvas::CanvasSurface;
use crate::events::Shared;
use crate::overlay;
use crate::status::DebugStats;
use instant::Instant;
use particle_core::{FpsCounter, Scheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub shared: Shared,
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub scheduler: Scheduler,
    pub fps: FpsCounter,
    pub last_instant: Instant,
    pub last_frame: Instant,
}

impl FrameContext {
    pub fn new(shared: Shared, canvas: web::HtmlCanvasElement, surface: CanvasSurface) -> Self {
        let interval = shared.sim.borrow().config().frame_interval;
        let now = Instant::now();
        Self {
            shared,
            canvas,
            surface,
            scheduler: Scheduler::new(interval),
            fps: FpsCounter::new(),
            last_instant: now,
            last_frame: now,
        }
    }

    /// Restart pacing from now, so time spent stopped is not counted.
    fn rearm(&mut self) {
        let now = Instant::now();
        self.last_instant = now;
        self.last_frame = now;
        self.scheduler.start();
    }

    /// One display-refresh callback. Returns false once the loop should end.
    pub fn frame(&mut self) -> bool {
        if !self.canvas.is_connected() {
            if self.scheduler.is_running() {
                log::info!("canvas detached; stopping animation loop");
                self.scheduler.stop();
            }
            return false;
        }

        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if let Some(text) = self.shared.status.borrow_mut().tick(dt) {
            overlay::write_status(&self.shared.document, text);
        }

        if !self.scheduler.advance(dt) {
            return self.scheduler.is_running();
        }

        let stats = self.shared.sim.borrow_mut().frame(&mut self.surface);
        self.fps.frame(now - self.last_frame);
        self.last_frame = now;

        let sim = self.shared.sim.borrow();
        let flags = sim.flags();
        if flags.debug_overlay {
            let debug = DebugStats {
                fps: self.fps.fps(),
                particles: stats.particles,
                pointer: sim.pointer().position,
                gravity: flags.gravity,
                trails: flags.trails,
            };
            overlay::render(&self.shared.document, &debug);
        }
        true
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to the animation-frame loop. Clones share the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Tick,
    pending: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let ctx = Rc::new(RefCell::new(ctx));
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(false));

        let (ctx_cb, tick_cb, pending_cb) = (ctx.clone(), tick.clone(), pending.clone());
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_cb.set(false);
            if ctx_cb.borrow_mut().frame() {
                request_frame(&tick_cb, &pending_cb);
            }
        }) as Box<dyn FnMut()>));

        Self { ctx, tick, pending }
    }

    /// Start, or restart after a stop. Safe to call while already running.
    pub fn start(&self) {
        self.ctx.borrow_mut().rearm();
        request_frame(&self.tick, &self.pending);
    }

    /// Stop scheduling frames; the next animation-frame callback ends the loop.
    pub fn stop(&self) {
        self.ctx.borrow_mut().scheduler.stop();
    }
}

fn request_frame(tick: &Tick, pending: &Cell<bool>) {
    if pending.get() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            pending.set(true);
        }
    }
}
