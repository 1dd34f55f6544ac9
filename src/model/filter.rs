use std::collections::BTreeSet;

pub const FILTER_CONTROL_SELECTOR: &str = "[data-filter]";
pub const FILTER_CARD_SELECTOR: &str = "[data-tags]";
pub const ALL_TAG: &str = "all";
pub const ACTIVE_CLASS: &str = "active";
pub const FILTER_STYLE_ID: &str = "filter-style";

/// Page rules such as `.card { display: flex }` would otherwise beat the
/// user-agent `[hidden]` rule.
pub const FILTER_STYLE: &str = "[data-tags][hidden] { display: none !important; }\n";

pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits a card's comma-separated tag list into normalized tags.
pub fn parse_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Tag-based visibility over a fixed card collection.
#[derive(Clone, Debug)]
pub struct ProjectFilter {
    cards: Vec<BTreeSet<String>>,
    active: String,
}

impl ProjectFilter {
    pub fn new<'a>(card_tags: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            cards: card_tags.into_iter().map(parse_tags).collect(),
            active: ALL_TAG.to_string(),
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Selects `tag` and returns per-card visibility, in card order.
    pub fn select(&mut self, tag: &str) -> Vec<bool> {
        self.active = normalize_tag(tag);
        self.visibility()
    }

    pub fn visibility(&self) -> Vec<bool> {
        self.cards
            .iter()
            .map(|tags| self.active == ALL_TAG || tags.contains(&self.active))
            .collect()
    }

    /// Whether the control carrying `control_tag` is the active one.
    pub fn is_active_control(&self, control_tag: &str) -> bool {
        normalize_tag(control_tag) == self.active
    }
}
