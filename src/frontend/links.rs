use super::dom;
use crate::model::links::{outbound_fields, OUTBOUND_EVENT, OUTBOUND_LINK_SELECTOR};
use crate::telemetry::{LogLevel, Telemetry};

pub fn install(telemetry: Telemetry) -> usize {
    let links = dom::query_all(OUTBOUND_LINK_SELECTOR);

    for link in &links {
        let anchor = link.clone();
        dom::listen(link, "click", move |_| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            telemetry.event(LogLevel::Info, OUTBOUND_EVENT, outbound_fields(telemetry, &href));
        });
    }

    links.len()
}
