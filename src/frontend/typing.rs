use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Text};

use super::dom;
use crate::config::EnhanceConfig;
use crate::model::typing::{next_delay_ms, TypingEffect, TypingPhase, CURSOR_GLYPH};

struct TypingRun {
    effect: TypingEffect,
    text: Text,
    cursor: HtmlElement,
    min_delay_ms: u32,
    max_delay_ms: u32,
    blink_ms: u32,
}

/// Types out the subtitle text. No-op when the subtitle element is missing.
pub fn install(config: &EnhanceConfig) -> bool {
    let Some(subtitle) = dom::query_first(&config.subtitle_selector) else {
        return false;
    };
    let Some(document) = dom::document() else {
        return false;
    };

    let effect = TypingEffect::new(&subtitle.text_content().unwrap_or_default());

    let text = document.create_text_node("");
    let Some(cursor) = document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    cursor.set_class_name("typing-cursor");
    let _ = cursor.set_attribute("aria-hidden", "true");
    cursor.set_text_content(Some(&CURSOR_GLYPH.to_string()));

    subtitle.set_text_content(None);
    if subtitle.append_child(&text).is_err() || subtitle.append_child(&cursor).is_err() {
        return false;
    }

    let run = Rc::new(RefCell::new(TypingRun {
        effect,
        text,
        cursor,
        min_delay_ms: config.typing_min_delay_ms,
        max_delay_ms: config.typing_max_delay_ms,
        blink_ms: config.cursor_blink_ms,
    }));

    if run.borrow().effect.phase() == TypingPhase::Blinking {
        start_blinking(run);
    } else {
        schedule_tick(run);
    }
    true
}

fn schedule_tick(run: Rc<RefCell<TypingRun>>) {
    let delay = {
        let run = run.borrow();
        next_delay_ms(js_sys::Math::random(), run.min_delay_ms, run.max_delay_ms)
    };

    dom::set_timeout(delay, move || {
        let phase = {
            let mut current = run.borrow_mut();
            let phase = current.effect.tick();
            current.text.set_data(&current.effect.revealed_text());
            phase
        };

        match phase {
            TypingPhase::Typing => schedule_tick(run),
            TypingPhase::Blinking => start_blinking(run),
        }
    });
}

fn start_blinking(run: Rc<RefCell<TypingRun>>) {
    let blink_ms = run.borrow().blink_ms;

    dom::set_interval(blink_ms, move || {
        let mut current = run.borrow_mut();
        let visible = current.effect.blink();
        let _ = current
            .cursor
            .style()
            .set_property("visibility", if visible { "visible" } else { "hidden" });
    });
}
