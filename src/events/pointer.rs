use super::CardWiring;
use crate::core::{CardEngine, PointerSource};
use crate::dom;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_pointerenter(w: &CardWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w2.engine.borrow_mut().pointer_enter();
        w2.sync();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .surface
        .container
        .add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointerleave(w: &CardWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w2.engine.borrow_mut().pointer_leave();
        w2.sync();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .surface
        .container
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointermove(w: &CardWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = dom::card_rect(&w2.surface.container);
        let moved =
            w2.engine
                .borrow_mut()
                .pointer_move(PointerSource::Local, &rect, client_point(&ev));
        if moved {
            w2.sync();
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .surface
        .container
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Document-wide move listener that is only attached while the back face is
/// up. Holds the engine weakly so detaching never keeps the card alive.
pub struct GlobalTracker {
    closure: Closure<dyn FnMut(web::MouseEvent)>,
    attached: Cell<bool>,
}

impl GlobalTracker {
    pub fn new(engine: Weak<RefCell<CardEngine>>, container: web::HtmlElement) -> Self {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let Some(engine) = engine.upgrade() else {
                return;
            };
            let rect = dom::card_rect(&container);
            engine
                .borrow_mut()
                .pointer_move(PointerSource::Global, &rect, client_point(&ev));
        }) as Box<dyn FnMut(_)>);
        Self {
            closure,
            attached: Cell::new(false),
        }
    }

    pub fn attach(&self) {
        if self.attached.get() {
            return;
        }
        let Some(document) = dom::window_document() else {
            return;
        };
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        let ok = document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "pointermove",
                self.closure.as_ref().unchecked_ref(),
                &opts,
            )
            .is_ok();
        self.attached.set(ok);
        log::debug!("[pointer] global tracking on ({})", ok);
    }

    pub fn detach(&self) {
        if !self.attached.get() {
            return;
        }
        if let Some(document) = dom::window_document() {
            _ = document.remove_event_listener_with_callback(
                "pointermove",
                self.closure.as_ref().unchecked_ref(),
            );
        }
        self.attached.set(false);
        log::debug!("[pointer] global tracking off");
    }
}

impl Drop for GlobalTracker {
    fn drop(&mut self) {
        self.detach();
    }
}
