use crate::core::{CardEngine, LoopControl};
use crate::surface::Surface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<CardEngine>>,
    pub surface: Rc<Surface>,
}

impl FrameContext {
    pub fn frame(&self) -> LoopControl {
        let (control, view) = {
            let mut engine = self.engine.borrow_mut();
            let control = engine.frame(Instant::now());
            (control, engine.view())
        };
        self.surface.render(&view);
        control
    }
}

/// Repeating `requestAnimationFrame` task. `start` is idempotent; the task
/// stops itself by not rescheduling once a frame returns `Stop`.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<FrameContext>,
    running: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let ctx = Rc::new(ctx);
        let running = Rc::new(Cell::new(false));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let ctx_tick = ctx.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            match ctx_tick.frame() {
                LoopControl::Continue => {
                    if let Some(cb) = tick_clone.borrow().as_ref() {
                        if !request_frame(cb) {
                            running_tick.set(false);
                        }
                    }
                }
                LoopControl::Stop => {
                    running_tick.set(false);
                    log::trace!("[frame] loop idle");
                }
            }
        }) as Box<dyn FnMut()>));

        Self { ctx, running, tick }
    }

    /// Schedule the loop if the engine wants it and it is not already queued.
    pub fn start_if_eligible(&self) {
        if self.running.get() || !self.ctx.engine.borrow().loop_eligible() {
            return;
        }
        self.ctx.engine.borrow_mut().begin_loop();
        if let Some(cb) = self.tick.borrow().as_ref() {
            if request_frame(cb) {
                self.running.set(true);
                log::trace!("[frame] loop started");
            }
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> bool {
    match web::window() {
        Some(w) => w
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok(),
        None => false,
    }
}
