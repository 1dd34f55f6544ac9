use serde_json::json;

use crate::telemetry::Telemetry;

pub const OUTBOUND_LINK_SELECTOR: &str = "a[target=\"_blank\"]";
pub const OUTBOUND_EVENT: &str = "outbound_link";

/// Log fields for a click on an outbound link.
pub fn outbound_fields(telemetry: Telemetry, href: &str) -> serde_json::Value {
    json!({ "url": telemetry.url_value(href) })
}
