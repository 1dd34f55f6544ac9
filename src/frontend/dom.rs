use js_sys::Reflect;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Document, Element, Event, EventTarget, ScrollBehavior,
    ScrollToOptions, Storage,
};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// All elements matching `selector`, in document order. Invalid selectors match nothing.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_first(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn has_global(name: &str) -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}

pub fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

/// Inserts `<style id=..>` into the head unless an element with `id` exists.
/// Returns whether a block was inserted.
pub fn ensure_style_block(id: &str, css: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };

    if document.get_element_by_id(id).is_some() {
        return false;
    }

    let Ok(style) = document.create_element("style") else {
        return false;
    };
    style.set_id(id);
    style.set_text_content(Some(css));

    let parent: Option<Element> = match document.head() {
        Some(head) => Some(head.into()),
        None => document.document_element(),
    };

    parent
        .map(|parent| parent.append_child(&style).is_ok())
        .unwrap_or(false)
}

/// Attaches `handler` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

pub fn set_timeout<F>(delay_ms: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    let Some(win) = window() else {
        return;
    };

    let callback = Closure::once_into_js(callback);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    );
}

pub fn set_interval<F>(period_ms: u32, callback: F)
where
    F: FnMut() + 'static,
{
    let Some(win) = window() else {
        return;
    };

    let closure = Closure::<dyn FnMut()>::new(callback);
    let _ = win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        i32::try_from(period_ms).unwrap_or(i32::MAX),
    );
    closure.forget();
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Animated window scroll to a document-space `top`, instant under reduced motion.
pub fn scroll_window_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    });
    win.scroll_to_with_scroll_to_options(&options);
}
