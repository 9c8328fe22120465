use crate::constants::{BACK_SELECTOR, FLIP_ROTATION_CSS, FRONT_SELECTOR, SHEEN_SELECTOR};
use crate::core::{CardView, FaceStyle};
use crate::dom;
use web_sys as web;

/// Elements of the host page that receive engine output.
pub struct Surface {
    pub container: web::HtmlElement,
    pub inner: web::HtmlElement,
    front: Vec<web::HtmlElement>,
    back: Vec<web::HtmlElement>,
    sheen: Vec<web::HtmlElement>,
}

impl Surface {
    pub fn new(container: web::HtmlElement, inner: web::HtmlElement) -> Self {
        let front = dom::query_all(&container, FRONT_SELECTOR);
        let back = dom::query_all(&container, BACK_SELECTOR);
        let sheen = dom::query_all(&container, SHEEN_SELECTOR);
        log::info!(
            "[card] surface front={} back={} sheen={}",
            front.len(),
            back.len(),
            sheen.len()
        );
        dom::set_style(&inner, "transform-style", "preserve-3d");
        dom::set_style(&inner, "transition", FLIP_ROTATION_CSS);
        Self {
            container,
            inner,
            front,
            back,
            sheen,
        }
    }

    pub fn render(&self, view: &CardView) {
        dom::set_style(&self.inner, "transform", &view.transform.to_string());
        paint(&self.front, &view.front);
        paint(&self.back, &view.back);
        paint(&self.sheen, &view.sheen);
        _ = self
            .container
            .set_attribute("data-flipping", if view.flipping { "true" } else { "false" });
    }
}

fn paint(targets: &[web::HtmlElement], style: &FaceStyle) {
    if targets.is_empty() {
        return;
    }
    let background = style.background.to_string();
    let transition = style.transition.to_string();
    for el in targets {
        dom::set_style(el, "background", &background);
        dom::set_style(el, "transition", &transition);
    }
}
