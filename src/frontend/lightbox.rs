use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, KeyboardEvent};

use super::dom;
use crate::model::lightbox::{
    closes_on_click, closes_on_key, enlarged_source, LightboxState, LIGHTBOX_IMAGE_SELECTOR,
    LIGHTBOX_OVERLAY_ID,
};

const LIGHTBOX_STYLE_ID: &str = "lightbox-style";
const LIGHTBOX_STYLE: &str = r#"
#lightbox-overlay { position: fixed; inset: 0; z-index: 1000; display: none; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.82); cursor: zoom-out; }
#lightbox-overlay.is-open { display: flex; }
#lightbox-overlay img { max-width: 92vw; max-height: 88vh; border-radius: 6px; box-shadow: 0 12px 48px rgba(0, 0, 0, 0.45); cursor: default; }
"#;

struct Lightbox {
    overlay: Element,
    image: HtmlImageElement,
    state: LightboxState,
}

impl Lightbox {
    fn open(&mut self, src: &str, alt: &str) {
        self.state.open(src, alt);
        self.image.set_src(src);
        self.image.set_alt(alt);
        let _ = self.overlay.class_list().add_1("is-open");
        let _ = self.overlay.set_attribute("aria-hidden", "false");
    }

    fn close(&mut self) {
        if self.state.close() {
            let _ = self.overlay.class_list().remove_1("is-open");
            let _ = self.overlay.set_attribute("aria-hidden", "true");
        }
    }
}

fn create_overlay() -> Option<(Element, HtmlImageElement)> {
    let document = dom::document()?;

    if let Some(existing) = document.get_element_by_id(LIGHTBOX_OVERLAY_ID) {
        let image = existing
            .query_selector("img")
            .ok()
            .flatten()?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        return Some((existing, image));
    }

    let overlay = document.create_element("div").ok()?;
    overlay.set_id(LIGHTBOX_OVERLAY_ID);
    let _ = overlay.set_attribute("role", "dialog");
    let _ = overlay.set_attribute("aria-modal", "true");
    let _ = overlay.set_attribute("aria-hidden", "true");

    let image = document
        .create_element("img")
        .ok()?
        .dyn_into::<HtmlImageElement>()
        .ok()?;
    overlay.append_child(&image).ok()?;
    document.body()?.append_child(&overlay).ok()?;

    Some((overlay, image))
}

/// Opt-in images open in one shared full-screen overlay.
pub fn install() -> bool {
    let images = dom::query_all(LIGHTBOX_IMAGE_SELECTOR);
    if images.is_empty() {
        return false;
    }

    let Some((overlay, image)) = create_overlay() else {
        return false;
    };
    dom::ensure_style_block(LIGHTBOX_STYLE_ID, LIGHTBOX_STYLE);

    let lightbox = Rc::new(RefCell::new(Lightbox {
        overlay: overlay.clone(),
        image: image.clone(),
        state: LightboxState::default(),
    }));

    for thumb in images {
        let lightbox = lightbox.clone();
        let source = thumb.clone();
        dom::listen(&thumb, "click", move |_| {
            let src = source
                .dyn_ref::<HtmlImageElement>()
                .map(HtmlImageElement::src)
                .or_else(|| source.get_attribute("src"))
                .unwrap_or_default();
            let full = source.get_attribute("data-full");
            let alt = source.get_attribute("alt").unwrap_or_default();

            lightbox
                .borrow_mut()
                .open(enlarged_source(full.as_deref(), &src), &alt);
        });
    }

    {
        let lightbox = lightbox.clone();
        let enlarged: Element = image.into();
        dom::listen(&overlay, "click", move |event| {
            let clicked_image = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|target| target == enlarged)
                .unwrap_or(false);

            if closes_on_click(clicked_image) {
                lightbox.borrow_mut().close();
            }
        });
    }

    if let Some(document) = dom::document() {
        dom::listen(&document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if closes_on_key(&event.key()) {
                lightbox.borrow_mut().close();
            }
        });
    }

    true
}
