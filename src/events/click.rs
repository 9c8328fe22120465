use super::CardWiring;
use crate::constants::NO_FLIP_SELECTOR;
use crate::core::TrackingChange;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Clicks on links and `[data-no-flip]` controls keep the card where it is.
fn is_no_flip_target(ev: &web::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(NO_FLIP_SELECTOR).ok().flatten())
        .is_some()
}

pub fn wire_click(w: &CardWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if is_no_flip_target(&ev) {
            return;
        }
        handle_flip(&w2);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .surface
        .container
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn handle_flip(w: &CardWiring) {
    let (outcome, lock) = {
        let mut engine = w.engine.borrow_mut();
        let outcome = engine.click(Instant::now());
        (outcome, engine.lock_duration())
    };
    log::info!(
        "[flip] face={:?} tracking={:?}",
        outcome.face,
        outcome.tracking
    );
    match outcome.tracking {
        TrackingChange::SubscribeGlobal => w.global.attach(),
        TrackingChange::UnsubscribeGlobal => w.global.detach(),
    }
    w.sync();

    // One-shot unlock for this click; never cancelled by later clicks.
    let w_unlock = w.clone();
    let unlock_at = outcome.unlock_at;
    let unlock = Closure::once_into_js(move || {
        let now = Instant::now().max(unlock_at);
        if w_unlock.engine.borrow_mut().poll_timers(now) {
            log::debug!("[flip] lock released");
        }
        w_unlock.sync();
    });
    let delay_ms = i32::try_from(lock.as_millis()).unwrap_or(i32::MAX);
    let scheduled = web::window().map(|win| {
        win.set_timeout_with_callback_and_timeout_and_arguments_0(
            unlock.unchecked_ref(),
            delay_ms,
        )
    });
    if !matches!(scheduled, Some(Ok(_))) {
        log::error!("[flip] could not schedule lock release");
    }
}
