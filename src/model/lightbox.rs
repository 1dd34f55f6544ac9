pub const LIGHTBOX_IMAGE_SELECTOR: &str = "img[data-lightbox]";
pub const LIGHTBOX_OVERLAY_ID: &str = "lightbox-overlay";
pub const CLOSE_KEY: &str = "Escape";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    shown: Option<(String, String)>,
}

impl LightboxState {
    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    /// Currently displayed `(src, alt)`.
    #[cfg(test)]
    pub fn shown(&self) -> Option<(&str, &str)> {
        self.shown
            .as_ref()
            .map(|(src, alt)| (src.as_str(), alt.as_str()))
    }

    /// Opens on `src`, replacing whatever was displayed.
    pub fn open(&mut self, src: &str, alt: &str) {
        self.shown = Some((src.to_string(), alt.to_string()));
    }

    pub fn close(&mut self) -> bool {
        self.shown.take().is_some()
    }
}

/// Enlarged source: a non-empty `data-full` wins over the thumbnail `src`.
pub fn enlarged_source<'a>(full: Option<&'a str>, src: &'a str) -> &'a str {
    full.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(src)
}

/// Background clicks close; clicks on the enlarged image do not.
pub fn closes_on_click(clicked_enlarged_image: bool) -> bool {
    !clicked_enlarged_image
}

pub fn closes_on_key(key: &str) -> bool {
    key == CLOSE_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_open_replaces_previous_image() {
        let mut state = LightboxState::default();
        state.open("/img/a.png", "A");
        state.open("/img/b.png", "B");

        assert_eq!(state.shown(), Some(("/img/b.png", "B")));
    }

    #[test]
    fn close_reports_whether_it_was_open() {
        let mut state = LightboxState::default();
        assert!(!state.close());

        state.open("/img/a.png", "A");
        assert!(state.close());
        assert!(!state.is_open());
    }

    #[test]
    fn only_background_clicks_and_escape_close() {
        assert!(closes_on_click(false));
        assert!(!closes_on_click(true));
        assert!(closes_on_key("Escape"));
        assert!(!closes_on_key("Enter"));
    }

    #[test]
    fn full_size_source_takes_precedence() {
        assert_eq!(enlarged_source(Some("/full.jpg"), "/thumb.jpg"), "/full.jpg");
        assert_eq!(enlarged_source(Some(" "), "/thumb.jpg"), "/thumb.jpg");
        assert_eq!(enlarged_source(None, "/thumb.jpg"), "/thumb.jpg");
    }
}
