pub const IMAGE_SELECTOR: &str = "img";
pub const LOADING_ATTRIBUTE: &str = "loading";
pub const DECODING_ATTRIBUTE: &str = "decoding";

/// Attributes to add to an image, given its current `loading` attribute.
/// Images that already declare a loading mode are left alone.
pub fn loading_hints(existing_loading: Option<&str>) -> Option<[(&'static str, &'static str); 2]> {
    match existing_loading {
        Some(_) => None,
        None => Some([(LOADING_ATTRIBUTE, "lazy"), (DECODING_ATTRIBUTE, "async")]),
    }
}
