#![cfg(target_arch = "wasm32")]
use crate::constants::{CARD_ID, CARD_INNER_ID};
use crate::core::CardEngine;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod surface;

/// Resolve once the document has finished parsing.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("holo-card starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let container = dom::html_element_by_id(&document, CARD_ID)?;
    let inner = dom::html_element_by_id(&document, CARD_INNER_ID)?;

    let config = dom::read_config(&container);
    let pointer_class = dom::detect_pointer_class();
    let engine = Rc::new(RefCell::new(CardEngine::new(&config, pointer_class)));
    log::info!(
        "[card] pointer={:?} max_tilt={} flip_lock={}ms",
        pointer_class,
        engine.borrow().max_tilt(),
        config.flip_lock.as_millis()
    );

    let surface = Rc::new(surface::Surface::new(container.clone(), inner));
    let frame_loop = frame::FrameLoop::new(frame::FrameContext {
        engine: engine.clone(),
        surface: surface.clone(),
    });
    let global = Rc::new(events::GlobalTracker::new(Rc::downgrade(&engine), container));

    let wiring = events::CardWiring {
        engine,
        surface,
        frame_loop,
        global,
    };
    events::wire_card_handlers(&wiring);
    wiring.sync();
    Ok(())
}
