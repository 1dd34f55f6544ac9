use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use super::dom;
use crate::model::theme::{Theme, THEME_ATTRIBUTE, THEME_KEY, THEME_STYLE, THEME_STYLE_ID};

fn read_stored_theme() -> Option<String> {
    dom::local_storage()?.get_item(THEME_KEY).ok().flatten()
}

pub fn resolve_theme() -> Theme {
    Theme::resolve(
        read_stored_theme().as_deref(),
        dom::media_matches("(prefers-color-scheme: dark)"),
    )
}

/// Sets the root marker and makes sure the theme style block exists once.
pub fn apply_theme(theme: Theme) {
    dom::ensure_style_block(THEME_STYLE_ID, THEME_STYLE);

    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

pub fn apply_theme_with_transition(theme: Theme) {
    if dom::prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = dom::document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Some(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

pub fn persist_theme(theme: Theme) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}
