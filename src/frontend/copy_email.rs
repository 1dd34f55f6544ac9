use js_sys::Reflect;
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;

use super::{dom, toast};
use crate::config::EnhanceConfig;
use crate::model::email::{
    mail_link, resolve_email, CopyOutcome, COPY_EMAIL_SELECTOR, EMAIL_ATTRIBUTE,
    MAIL_LINK_SELECTOR,
};
use crate::telemetry::{LogLevel, Telemetry};

async fn write_clipboard(text: &str) -> CopyOutcome {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return CopyOutcome::Failed;
    };
    if !Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false) {
        return CopyOutcome::Failed;
    }

    match JsFuture::from(navigator.clipboard().write_text(text)).await {
        Ok(_) => CopyOutcome::Copied,
        Err(_) => CopyOutcome::Failed,
    }
}

/// Copies the contact address on click, then opens the mail client.
pub fn install(config: &EnhanceConfig, telemetry: Telemetry) -> bool {
    let Some(control) =
        dom::query_first(COPY_EMAIL_SELECTOR).or_else(|| dom::query_first(MAIL_LINK_SELECTOR))
    else {
        return false;
    };

    let toast_ms = config.toast_duration_ms;
    let navigation_delay_ms = config.mail_navigation_delay_ms;
    let element = control.clone();

    dom::listen(&control, "click", move |event| {
        let href = element.get_attribute("href");
        let Some(email) = resolve_email(
            element.get_attribute(EMAIL_ATTRIBUTE).as_deref(),
            href.as_deref(),
        ) else {
            return;
        };

        event.prevent_default();
        let destination = mail_link(href.as_deref(), &email);

        spawn_local(async move {
            let outcome = write_clipboard(&email).await;
            toast::show(&outcome.toast_message(&email), toast_ms);
            telemetry.event(
                LogLevel::Info,
                "email_copy",
                json!({ "copied": outcome == CopyOutcome::Copied }),
            );

            if outcome.navigates() {
                dom::set_timeout(navigation_delay_ms, move || {
                    if let Some(win) = window() {
                        let _ = win.location().set_href(&destination);
                    }
                });
            }
        });
    });

    true
}
