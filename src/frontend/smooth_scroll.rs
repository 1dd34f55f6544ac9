use wasm_bindgen::JsValue;
use web_sys::{window, Element};

use super::dom;
use crate::model::scroll::{fragment_target, SAME_PAGE_LINK_SELECTOR};

fn document_top(target: &Element) -> f64 {
    target.get_bounding_client_rect().top() + dom::scroll_offset()
}

pub fn install() -> usize {
    let links = dom::query_all(SAME_PAGE_LINK_SELECTOR);

    for link in &links {
        let anchor = link.clone();
        dom::listen(link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href)
                .and_then(|id| dom::document().and_then(|d| d.get_element_by_id(id)))
            else {
                return;
            };

            event.prevent_default();
            dom::scroll_window_to(document_top(&target));

            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
            }
        });
    }

    links.len()
}
