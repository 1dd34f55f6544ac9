use std::cmp::Ordering;
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlLogMode {
    Host,
    Full,
}

impl UrlLogMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "host" => Some(Self::Host),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

/// Log settings threaded through every component. Cheap to copy into closures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Telemetry {
    pub level: LogLevel,
    pub url_mode: UrlLogMode,
}

impl Telemetry {
    pub fn event(self, level: LogLevel, event: &str, fields: serde_json::Value) {
        if let Some(line) = self.format_event(level, event, fields, now_unix_millis()) {
            emit(level, &line);
        }
    }

    /// Renders one JSON log line, or `None` when `level` is filtered out.
    pub fn format_event(
        self,
        level: LogLevel,
        event: &str,
        fields: serde_json::Value,
        ts: u64,
    ) -> Option<String> {
        if level < self.level {
            return None;
        }

        let mut payload = serde_json::Map::new();
        payload.insert(
            "ts".to_string(),
            serde_json::Value::Number(serde_json::Number::from(ts)),
        );
        payload.insert(
            "level".to_string(),
            serde_json::Value::String(level.as_str().to_string()),
        );
        payload.insert(
            "event".to_string(),
            serde_json::Value::String(event.to_string()),
        );

        if let serde_json::Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(serde_json::Value::Object(payload).to_string())
    }

    /// Destination value for a URL field. Relative or unparseable hrefs are
    /// logged as written.
    pub fn url_value(self, raw: &str) -> String {
        match Url::parse(raw) {
            Ok(url) => value_for_url_logging(&url, self.url_mode),
            Err(_) => raw.to_string(),
        }
    }
}

fn value_for_url_logging(url: &Url, mode: UrlLogMode) -> String {
    match mode {
        UrlLogMode::Host => match url.host_str() {
            Some(host) => match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            },
            None => "unknown".to_string(),
        },
        UrlLogMode::Full => url.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}
