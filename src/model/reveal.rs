pub const REVEAL_SELECTOR: &str = "[data-reveal], section, .card, li";
pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_STYLE_ID: &str = "reveal-style";

pub const REVEAL_STYLE: &str = r#"
.reveal { opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease; }
.reveal.is-visible { opacity: 1; transform: none; }
@media (prefers-reduced-motion: reduce) { .reveal { transition: none; transform: none; } }
"#;

/// Browsers report the crossing ratio with float noise around the threshold.
const RATIO_EPSILON: f64 = 1e-3;

/// Observer thresholds: `0` reports entry, `threshold` reports the crossing.
pub fn observer_thresholds(threshold: f64) -> [f64; 2] {
    [0.0, threshold]
}

/// Ratio an element must show before it reveals. Elements too tall to ever
/// reach `threshold` of themselves inside the viewport reveal on entry.
pub fn required_ratio(threshold: f64, viewport_height: f64, target_height: f64) -> f64 {
    if viewport_height <= 0.0 || target_height <= 0.0 {
        return threshold;
    }

    if viewport_height / target_height < threshold {
        0.0
    } else {
        threshold
    }
}

/// One-shot latch for a watched element. Once revealed it stays revealed and
/// asks to be unobserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Add the visible class and stop watching.
    Reveal,
    Wait,
}

impl RevealLatch {
    pub fn new(revealed: bool) -> Self {
        Self { revealed }
    }

    #[cfg(test)]
    pub fn revealed(self) -> bool {
        self.revealed
    }

    /// `required` comes from [`required_ratio`].
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, required: f64) -> RevealStep {
        if self.revealed {
            return RevealStep::Wait;
        }

        if is_intersecting && ratio + RATIO_EPSILON >= required {
            self.revealed = true;
            RevealStep::Reveal
        } else {
            RevealStep::Wait
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_at_threshold() {
        let mut latch = RevealLatch::default();

        assert_eq!(latch.observe(true, 0.10, 0.15), RevealStep::Wait);
        assert_eq!(latch.observe(true, 0.15, 0.15), RevealStep::Reveal);
        assert!(latch.revealed());
    }

    #[test]
    fn stays_revealed_after_leaving_viewport() {
        let mut latch = RevealLatch::default();
        latch.observe(true, 0.4, 0.15);

        assert_eq!(latch.observe(false, 0.0, 0.15), RevealStep::Wait);
        assert_eq!(latch.observe(true, 0.9, 0.15), RevealStep::Wait);
        assert!(latch.revealed());
    }

    #[test]
    fn already_revealed_latch_ignores_entries() {
        let mut latch = RevealLatch::new(true);

        assert_eq!(latch.observe(true, 1.0, 0.15), RevealStep::Wait);
    }

    #[test]
    fn crossing_reported_just_under_threshold_reveals() {
        let mut latch = RevealLatch::default();

        assert_eq!(latch.observe(true, 0.149_999_99, 0.15), RevealStep::Reveal);
    }

    #[test]
    fn element_taller_than_reachable_threshold_reveals_on_entry() {
        let required = required_ratio(0.15, 700.0, 6_000.0);
        let mut latch = RevealLatch::default();

        assert_eq!(required, 0.0);
        assert_eq!(latch.observe(true, 0.01, required), RevealStep::Reveal);
    }

    #[test]
    fn ordinary_elements_keep_the_threshold() {
        assert_eq!(required_ratio(0.15, 700.0, 400.0), 0.15);
        assert_eq!(required_ratio(0.15, 0.0, 400.0), 0.15);

        let mut latch = RevealLatch::default();
        assert_eq!(latch.observe(true, 0.0, 0.15), RevealStep::Wait);
    }

    #[test]
    fn non_intersecting_entries_never_reveal() {
        let mut latch = RevealLatch::default();

        assert_eq!(latch.observe(false, 0.5, 0.15), RevealStep::Wait);
        assert!(!latch.revealed());
    }
}
