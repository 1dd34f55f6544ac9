use serde::Deserialize;

use crate::telemetry::{LogLevel, Telemetry, UrlLogMode};

pub const CONFIG_ELEMENT_ID: &str = "enhance-config";

const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
const DEFAULT_TYPING_MIN_DELAY_MS: u32 = 50;
const DEFAULT_TYPING_MAX_DELAY_MS: u32 = 120;
const DEFAULT_CURSOR_BLINK_MS: u32 = 500;
const DEFAULT_TOAST_DURATION_MS: u32 = 1_500;
const DEFAULT_MAIL_NAVIGATION_DELAY_MS: u32 = 400;
const DEFAULT_SUBTITLE_SELECTOR: &str = "header .subtitle";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_LOG_URL_MODE: UrlLogMode = UrlLogMode::Full;

const SCROLL_TOP_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const TYPING_DELAY_MS_BOUNDS: (u32, u32) = (1, 2_000);
const CURSOR_BLINK_MS_BOUNDS: (u32, u32) = (50, 5_000);
const TOAST_DURATION_MS_BOUNDS: (u32, u32) = (100, 30_000);
const MAIL_NAVIGATION_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);

/// Page-level tuning, read from an optional
/// `<script type="application/json" id="enhance-config">` block.
#[derive(Clone, Debug, PartialEq)]
pub struct EnhanceConfig {
    pub scroll_top_threshold: f64,
    pub reveal_threshold: f64,
    pub typing_min_delay_ms: u32,
    pub typing_max_delay_ms: u32,
    pub cursor_blink_ms: u32,
    pub toast_duration_ms: u32,
    pub mail_navigation_delay_ms: u32,
    pub subtitle_selector: String,
    pub log_level: LogLevel,
    pub log_url_mode: UrlLogMode,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    scroll_top_threshold: Option<f64>,
    reveal_threshold: Option<f64>,
    typing_min_delay_ms: Option<u32>,
    typing_max_delay_ms: Option<u32>,
    cursor_blink_ms: Option<u32>,
    toast_duration_ms: Option<u32>,
    mail_navigation_delay_ms: Option<u32>,
    subtitle_selector: Option<String>,
    log_level: Option<String>,
    log_url_mode: Option<String>,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}

impl EnhanceConfig {
    /// Parses the JSON config block. Malformed JSON yields the defaults and
    /// the parse error, so the caller can log it once telemetry exists.
    pub fn from_json(source: &str) -> (Self, Option<String>) {
        if source.trim().is_empty() {
            return (Self::default(), None);
        }

        match serde_json::from_str::<RawConfig>(source) {
            Ok(raw) => (Self::from_raw(raw), None),
            Err(error) => (Self::default(), Some(error.to_string())),
        }
    }

    fn from_raw(raw: RawConfig) -> Self {
        let typing_min_delay_ms = with_bounds(
            raw.typing_min_delay_ms,
            DEFAULT_TYPING_MIN_DELAY_MS,
            TYPING_DELAY_MS_BOUNDS,
        );
        let typing_max_delay_ms = with_bounds(
            raw.typing_max_delay_ms,
            DEFAULT_TYPING_MAX_DELAY_MS,
            TYPING_DELAY_MS_BOUNDS,
        )
        .max(typing_min_delay_ms);

        Self {
            scroll_top_threshold: with_bounds_f64(
                raw.scroll_top_threshold,
                DEFAULT_SCROLL_TOP_THRESHOLD,
                SCROLL_TOP_THRESHOLD_BOUNDS,
            ),
            reveal_threshold: with_bounds_f64(
                raw.reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            typing_min_delay_ms,
            typing_max_delay_ms,
            cursor_blink_ms: with_bounds(
                raw.cursor_blink_ms,
                DEFAULT_CURSOR_BLINK_MS,
                CURSOR_BLINK_MS_BOUNDS,
            ),
            toast_duration_ms: with_bounds(
                raw.toast_duration_ms,
                DEFAULT_TOAST_DURATION_MS,
                TOAST_DURATION_MS_BOUNDS,
            ),
            mail_navigation_delay_ms: with_bounds(
                raw.mail_navigation_delay_ms,
                DEFAULT_MAIL_NAVIGATION_DELAY_MS,
                MAIL_NAVIGATION_DELAY_MS_BOUNDS,
            ),
            subtitle_selector: raw
                .subtitle_selector
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_SUBTITLE_SELECTOR.to_string()),
            log_level: raw
                .log_level
                .as_deref()
                .and_then(LogLevel::parse)
                .unwrap_or(DEFAULT_LOG_LEVEL),
            log_url_mode: raw
                .log_url_mode
                .as_deref()
                .and_then(UrlLogMode::parse)
                .unwrap_or(DEFAULT_LOG_URL_MODE),
        }
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            level: self.log_level,
            url_mode: self.log_url_mode,
        }
    }
}

fn with_bounds(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn with_bounds_f64(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
