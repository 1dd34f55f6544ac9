use super::dom;
use crate::model::images::{loading_hints, IMAGE_SELECTOR, LOADING_ATTRIBUTE};

/// Marks every image without an explicit loading mode as lazy. Returns how many changed.
pub fn install() -> usize {
    let mut hinted = 0;

    for image in dom::query_all(IMAGE_SELECTOR) {
        let Some(hints) = loading_hints(image.get_attribute(LOADING_ATTRIBUTE).as_deref()) else {
            continue;
        };

        for (name, value) in hints {
            let _ = image.set_attribute(name, value);
        }
        hinted += 1;
    }

    hinted
}
