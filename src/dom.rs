use crate::constants::COARSE_POINTER_QUERY;
use crate::core::{CardConfig, CardRect, PointerClass};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not an HtmlElement: {:?}", id, e)))
}

/// All `HtmlElement`s under `root` matching `selector`; empty on a bad selector.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[card] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// One-shot pointer capability probe. Falls back to fine when `matchMedia`
/// is missing or throws.
pub fn detect_pointer_class() -> PointerClass {
    let coarse = web::window()
        .and_then(|w| w.match_media(COARSE_POINTER_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false);
    PointerClass::from_coarse(coarse)
}

#[inline]
pub fn card_rect(el: &web::Element) -> CardRect {
    let r = el.get_bounding_client_rect();
    CardRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Read `data-*` overrides from the card container. Invalid values are logged
/// and left at their defaults.
pub fn read_config(el: &web::Element) -> CardConfig {
    let (cfg, errors) = CardConfig::from_attributes(|name| el.get_attribute(name));
    for e in &errors {
        log::warn!("[config] {}", e);
    }
    cfg
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("[card] set {} failed: {:?}", property, e);
    }
}
