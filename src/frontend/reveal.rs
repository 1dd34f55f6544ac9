use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::model::reveal::{
    observer_thresholds, required_ratio, RevealLatch, RevealStep, REVEAL_CLASS, REVEAL_SELECTOR,
    REVEAL_STYLE, REVEAL_STYLE_ID, VISIBLE_CLASS,
};

fn viewport_height(entry: &IntersectionObserverEntry) -> f64 {
    entry
        .root_bounds()
        .map(|bounds| bounds.height())
        .filter(|height| *height > 0.0)
        .or_else(|| window().and_then(|w| w.inner_height().ok()).and_then(|h| h.as_f64()))
        .unwrap_or(0.0)
}

/// Hides matched elements and reveals each once it is `threshold` visible.
/// Without `IntersectionObserver` the page is left untouched.
pub fn install(threshold: f64) -> bool {
    if !dom::has_global("IntersectionObserver") {
        return false;
    }

    let elements = dom::query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return false;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let mut latch = RevealLatch::new(target.class_list().contains(VISIBLE_CLASS));
                let required = required_ratio(
                    threshold,
                    viewport_height(&entry),
                    entry.bounding_client_rect().height(),
                );

                if latch.observe(entry.is_intersecting(), entry.intersection_ratio(), required)
                    == RevealStep::Reveal
                {
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    let thresholds: Array = observer_thresholds(threshold)
        .iter()
        .map(|value| JsValue::from_f64(*value))
        .collect();
    options.set_threshold(&thresholds);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return false;
    };
    callback.forget();

    dom::ensure_style_block(REVEAL_STYLE_ID, REVEAL_STYLE);
    for element in &elements {
        let _ = element.class_list().add_1(REVEAL_CLASS);
        observer.observe(element);
    }

    true
}
