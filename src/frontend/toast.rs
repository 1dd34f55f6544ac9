use std::cell::RefCell;

use web_sys::Element;

use super::dom;
use crate::model::toast::{ToastState, TOAST_ID};

const TOAST_STYLE_ID: &str = "toast-style";
const TOAST_STYLE: &str = r#"
.toast { position: fixed; left: 50%; bottom: 2rem; z-index: 1100; padding: 0.6rem 1rem; border-radius: 6px; background: var(--fg, #111); color: var(--bg, #fff); opacity: 0; transform: translate(-50%, 10px); transition: opacity 0.2s ease, transform 0.2s ease; pointer-events: none; }
.toast.is-visible { opacity: 1; transform: translate(-50%, 0); }
"#;

thread_local! {
    static TOAST: RefCell<ToastState> = RefCell::new(ToastState::default());
}

fn toast_element() -> Option<Element> {
    let document = dom::document()?;
    if let Some(existing) = document.get_element_by_id(TOAST_ID) {
        return Some(existing);
    }

    dom::ensure_style_block(TOAST_STYLE_ID, TOAST_STYLE);
    let toast = document.create_element("div").ok()?;
    toast.set_id(TOAST_ID);
    toast.set_class_name("toast");
    let _ = toast.set_attribute("role", "status");
    let _ = toast.set_attribute("aria-live", "polite");
    document.body()?.append_child(&toast).ok()?;
    Some(toast)
}

/// Shows `message` for `duration_ms`. A newer call replaces the text and
/// restarts the countdown.
pub fn show(message: &str, duration_ms: u32) {
    let Some(toast) = toast_element() else {
        return;
    };

    let generation = TOAST.with(|state| state.borrow_mut().show(message));
    toast.set_text_content(Some(message));
    let _ = toast.class_list().add_1("is-visible");

    dom::set_timeout(duration_ms, move || {
        let expired = TOAST.with(|state| state.borrow_mut().expire(generation));
        if expired {
            let _ = toast.class_list().remove_1("is-visible");
        }
    });
}
