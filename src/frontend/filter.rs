use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::dom;
use crate::model::filter::{
    ProjectFilter, ACTIVE_CLASS, ALL_TAG, FILTER_CARD_SELECTOR, FILTER_CONTROL_SELECTOR,
    FILTER_STYLE, FILTER_STYLE_ID,
};

struct FilterBoard {
    filter: ProjectFilter,
    controls: Vec<Element>,
    cards: Vec<Element>,
}

impl FilterBoard {
    fn apply(&mut self, tag: &str) {
        let visibility = self.filter.select(tag);

        for (card, visible) in self.cards.iter().zip(visibility) {
            if let Some(card) = card.dyn_ref::<HtmlElement>() {
                card.set_hidden(!visible);
            }
        }

        for control in &self.controls {
            let active = control
                .get_attribute("data-filter")
                .map(|value| self.filter.is_active_control(&value))
                .unwrap_or(false);

            let _ = control.class_list().toggle_with_force(ACTIVE_CLASS, active);
            let _ = control.set_attribute("aria-pressed", if active { "true" } else { "false" });
        }
    }
}

/// Tag filter over project cards. Needs both controls and cards on the page.
pub fn install() -> bool {
    let controls = dom::query_all(FILTER_CONTROL_SELECTOR);
    let cards = dom::query_all(FILTER_CARD_SELECTOR);
    if controls.is_empty() || cards.is_empty() {
        return false;
    }
    dom::ensure_style_block(FILTER_STYLE_ID, FILTER_STYLE);

    let card_tags: Vec<String> = cards
        .iter()
        .map(|card| card.get_attribute("data-tags").unwrap_or_default())
        .collect();
    let board = Rc::new(RefCell::new(FilterBoard {
        filter: ProjectFilter::new(card_tags.iter().map(String::as_str)),
        controls: controls.clone(),
        cards,
    }));

    for control in controls {
        let board = board.clone();
        let element = control.clone();
        dom::listen(&control, "click", move |event| {
            let Some(tag) = element.get_attribute("data-filter") else {
                return;
            };
            event.prevent_default();
            board.borrow_mut().apply(&tag);
        });
    }

    board.borrow_mut().apply(ALL_TAG);
    true
}
