pub mod click;
pub mod pointer;

use crate::core::CardEngine;
use crate::frame::FrameLoop;
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;

pub use pointer::GlobalTracker;

/// Handles shared by every listener bound to one card.
#[derive(Clone)]
pub struct CardWiring {
    pub engine: Rc<RefCell<CardEngine>>,
    pub surface: Rc<Surface>,
    pub frame_loop: FrameLoop,
    pub global: Rc<GlobalTracker>,
}

impl CardWiring {
    /// Repaint from current state and (re)start smoothing if it is due.
    pub fn sync(&self) {
        let view = self.engine.borrow().view();
        self.surface.render(&view);
        self.frame_loop.start_if_eligible();
    }
}

pub fn wire_card_handlers(w: &CardWiring) {
    pointer::wire_pointerenter(w);
    pointer::wire_pointerleave(w);
    pointer::wire_pointermove(w);
    click::wire_click(w);
}
