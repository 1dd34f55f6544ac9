mod controls;
mod copy_email;
mod dom;
mod filter;
mod images;
mod lightbox;
mod links;
mod reveal;
mod smooth_scroll;
mod theme;
mod toast;
mod typing;

use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, HtmlScriptElement};

use crate::config::{EnhanceConfig, CONFIG_ELEMENT_ID};
use crate::telemetry::LogLevel;

fn read_config() -> EnhanceConfig {
    let source = dom::document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| {
            el.dyn_ref::<HtmlScriptElement>()
                .and_then(|script| script.text().ok())
                .or_else(|| el.text_content())
        })
        .unwrap_or_default();

    let (config, error) = EnhanceConfig::from_json(&source);
    if let Some(error) = error {
        config.telemetry().event(
            LogLevel::Info,
            "config_invalid",
            json!({ "error": error, "fallback": "defaults" }),
        );
    }
    config
}

fn enhance() {
    let config = read_config();
    let telemetry = config.telemetry();

    let initial_theme = theme::resolve_theme();
    theme::apply_theme(initial_theme);

    let lazy_images = images::install();
    let anchors = smooth_scroll::install();
    let reveal = reveal::install(config.reveal_threshold);
    let typing = typing::install(&config);
    let controls = controls::mount(config.scroll_top_threshold, initial_theme);
    let filter = filter::install();
    let lightbox = lightbox::install();
    let copy_email = copy_email::install(&config, telemetry);
    let outbound = links::install(telemetry);

    telemetry.event(
        LogLevel::Debug,
        "enhancements_ready",
        json!({
            "theme": initial_theme.as_str(),
            "lazy_images": lazy_images,
            "anchor_links": anchors,
            "outbound_links": outbound,
            "reveal": reveal,
            "typing": typing,
            "controls": controls,
            "filter": filter,
            "lightbox": lightbox,
            "copy_email": copy_email,
        }),
    );
}

pub fn run() {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let once = AddEventListenerOptions::new();
        once.set_once(true);
        let callback = Closure::once_into_js(enhance);
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.unchecked_ref(),
            &once,
        );
        return;
    }

    enhance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::theme::{Theme, THEME_ATTRIBUTE, THEME_KEY};
    use std::{cell::Cell, rc::Rc};
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{
        window, Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit,
    };

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(html: &str) -> Element {
        let document = dom::document().expect("document");
        let host = document.create_element("div").expect("create host");
        host.set_inner_html(html);
        document
            .body()
            .expect("body")
            .append_child(&host)
            .expect("append host");
        host
    }

    fn by_id(id: &str) -> Element {
        dom::document()
            .and_then(|d| d.get_element_by_id(id))
            .unwrap_or_else(|| panic!("missing #{id}"))
    }

    fn click(element: &Element) {
        element
            .dyn_ref::<HtmlElement>()
            .expect("html element")
            .click();
    }

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            let _ = window()
                .expect("window")
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        });
        let _ = JsFuture::from(promise).await;
    }

    fn cancelable_click() -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        Event::new_with_event_init_dict("click", &init).expect("event")
    }

    fn computed_display(element: &Element) -> String {
        window()
            .and_then(|w| w.get_computed_style(element).ok().flatten())
            .and_then(|style| style.get_property_value("display").ok())
            .unwrap_or_default()
    }

    fn root_theme() -> Option<String> {
        dom::document()
            .and_then(|d| d.document_element())
            .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
    }

    fn stored_theme() -> Option<String> {
        dom::local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
    }

    async fn mounted_controls() {
        let initial = theme::resolve_theme();
        theme::apply_theme(initial);
        controls::mount(300.0, initial);
        sleep(50).await;
    }

    async fn scroll_and_settle(top: f64) {
        if let Some(win) = window() {
            win.scroll_to_with_x_and_y(0.0, top);
        }
        sleep(150).await;
    }

    #[wasm_bindgen_test]
    fn theme_round_trip_inserts_style_block_once() {
        let start = theme::resolve_theme();
        let mut current = start;

        for _ in 0..2 {
            current = current.toggled();
            theme::persist_theme(current);
            theme::apply_theme(current);
        }

        let document = dom::document().expect("document");
        assert_eq!(current, start);
        assert_eq!(
            document
                .query_selector_all("#theme-style")
                .expect("valid selector")
                .length(),
            1
        );
        assert_eq!(
            document
                .document_element()
                .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
                .as_deref(),
            Some(start.as_str())
        );
        assert_eq!(
            dom::local_storage()
                .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
                .as_deref(),
            Some(start.as_str())
        );
    }

    #[wasm_bindgen_test]
    fn lazy_hints_skip_images_with_loading_mode() {
        let host = fixture(
            r#"<img id="lazy-plain" src="data:,"><img id="lazy-eager" src="data:," loading="eager">"#,
        );

        assert!(images::install() >= 1);

        let plain = by_id("lazy-plain");
        assert_eq!(plain.get_attribute("loading").as_deref(), Some("lazy"));
        assert_eq!(plain.get_attribute("decoding").as_deref(), Some("async"));

        let eager = by_id("lazy-eager");
        assert_eq!(eager.get_attribute("loading").as_deref(), Some("eager"));
        assert_eq!(eager.get_attribute("decoding"), None);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn same_page_links_only_intercept_existing_targets() {
        let host = fixture(
            r##"<a id="jump-live" href="#scroll-target">go</a>
                <a id="jump-dead" href="#no-such-target">nowhere</a>
                <div id="scroll-target">target</div>"##,
        );
        smooth_scroll::install();

        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);

        let live = Event::new_with_event_init_dict("click", &init).expect("event");
        let proceeded = by_id("jump-live").dispatch_event(&live).expect("dispatch");
        assert!(!proceeded);
        assert_eq!(
            window().and_then(|w| w.location().hash().ok()).as_deref(),
            Some("#scroll-target")
        );

        let dead = Event::new_with_event_init_dict("click", &init).expect("event");
        let proceeded = by_id("jump-dead").dispatch_event(&dead).expect("dispatch");
        assert!(proceeded);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn filter_shows_matching_cards_and_one_active_control() {
        let host = fixture(
            r#"<button id="filter-all" data-filter="all">All</button>
               <button id="filter-rust" data-filter="Rust">Rust</button>
               <article id="card-a" data-tags="rust, wasm"></article>
               <article id="card-b" data-tags="Python"></article>"#,
        );

        assert!(filter::install());
        assert_eq!(
            dom::document()
                .expect("document")
                .query_selector_all("#filter-style")
                .expect("valid selector")
                .length(),
            1
        );
        assert!(by_id("filter-all").class_list().contains("active"));
        assert!(!by_id("card-b").unchecked_into::<HtmlElement>().hidden());

        click(&by_id("filter-rust"));

        assert!(!by_id("card-a").unchecked_into::<HtmlElement>().hidden());
        assert!(by_id("card-b").unchecked_into::<HtmlElement>().hidden());
        assert!(by_id("filter-rust").class_list().contains("active"));
        assert!(!by_id("filter-all").class_list().contains("active"));
        host.remove();
    }

    #[wasm_bindgen_test]
    fn filtered_cards_stay_hidden_under_page_display_rules() {
        let host = fixture(
            r#"<style>.grid-card { display: flex; }</style>
               <button id="filter-all-flex" data-filter="all">All</button>
               <button id="filter-web-flex" data-filter="web">Web</button>
               <div id="card-web" class="grid-card" data-tags="web"></div>
               <div id="card-ml" class="grid-card" data-tags="ml"></div>"#,
        );

        assert!(filter::install());
        assert_eq!(computed_display(&by_id("card-ml")), "flex");

        click(&by_id("filter-web-flex"));

        assert_eq!(computed_display(&by_id("card-web")), "flex");
        assert_eq!(computed_display(&by_id("card-ml")), "none");
        host.remove();
    }

    #[wasm_bindgen_test]
    fn lightbox_opens_on_click_and_closes_on_escape() {
        let host = fixture(r#"<img id="shot" data-lightbox src="data:," alt="Dashboard">"#);

        assert!(lightbox::install());
        click(&by_id("shot"));

        let overlay = by_id("lightbox-overlay");
        assert!(overlay.class_list().contains("is-open"));
        assert_eq!(
            overlay
                .query_selector("img")
                .ok()
                .flatten()
                .and_then(|img| img.get_attribute("alt"))
                .as_deref(),
            Some("Dashboard")
        );

        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        dom::document()
            .expect("document")
            .dispatch_event(&escape)
            .expect("dispatch");

        assert!(!overlay.class_list().contains("is-open"));
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn typing_reveals_subtitle_then_keeps_cursor() {
        let host = fixture(r#"<header><p class="subtitle">  Hi there  </p></header>"#);

        assert!(typing::install(&EnhanceConfig::default()));
        let subtitle = host
            .query_selector("header .subtitle")
            .ok()
            .flatten()
            .expect("subtitle");
        assert_eq!(subtitle.text_content().as_deref(), Some("|"));

        sleep(2_000).await;
        assert_eq!(subtitle.text_content().as_deref(), Some("Hi there|"));
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn latest_toast_message_wins() {
        toast::show("first", 50);
        toast::show("second", 5_000);

        sleep(200).await;

        let toast = by_id("toast");
        assert_eq!(toast.text_content().as_deref(), Some("second"));
        assert!(toast.class_list().contains("is-visible"));
        assert!(dom::document()
            .and_then(|d| d.get_element_by_id("toast-style"))
            .is_some());
    }

    #[wasm_bindgen_test]
    async fn floating_controls_mount_once() {
        mounted_controls().await;
        assert!(!controls::mount(300.0, theme::resolve_theme()));

        let document = dom::document().expect("document");
        for id in ["#enhance-controls", "#back-to-top", "#theme-toggle"] {
            assert_eq!(
                document
                    .query_selector_all(id)
                    .expect("valid selector")
                    .length(),
                1
            );
        }
    }

    #[wasm_bindgen_test]
    async fn back_to_top_appears_only_past_threshold() {
        let host = fixture(r#"<div style="height: 6000px"></div>"#);
        mounted_controls().await;
        let back_to_top = by_id("back-to-top");

        scroll_and_settle(300.0).await;
        assert!(!back_to_top.class_list().contains("is-visible"));

        scroll_and_settle(301.0).await;
        assert!(back_to_top.class_list().contains("is-visible"));

        scroll_and_settle(0.0).await;
        assert!(!back_to_top.class_list().contains("is-visible"));
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn theme_button_flips_marker_icon_and_storage() {
        mounted_controls().await;
        let button = by_id("theme-toggle");
        let before = root_theme()
            .as_deref()
            .and_then(Theme::from_str)
            .expect("theme applied at mount");

        click(&button);
        sleep(300).await;

        let after = before.toggled();
        assert_eq!(root_theme().as_deref(), Some(after.as_str()));
        assert_eq!(stored_theme().as_deref(), Some(after.as_str()));
        assert_eq!(button.text_content().as_deref(), Some(after.icon()));
        assert_eq!(
            button.get_attribute("aria-pressed").as_deref(),
            Some(if after.pressed() { "true" } else { "false" })
        );

        click(&button);
        sleep(300).await;

        assert_eq!(root_theme().as_deref(), Some(before.as_str()));
        assert_eq!(stored_theme().as_deref(), Some(before.as_str()));
        assert_eq!(
            dom::document()
                .expect("document")
                .query_selector_all("#theme-style")
                .expect("valid selector")
                .length(),
            1
        );
    }

    #[wasm_bindgen_test]
    async fn revealed_elements_keep_visible_class_after_leaving_viewport() {
        let host = fixture(
            r#"<div id="reveal-spacer" style="height: 0"></div>
               <section id="reveal-section" data-reveal style="height: 80px">About</section>"#,
        );

        assert!(reveal::install(0.15));
        let section = by_id("reveal-section");
        assert!(section.class_list().contains("reveal"));

        section.scroll_into_view();
        sleep(300).await;
        assert!(section.class_list().contains("is-visible"));

        let _ = by_id("reveal-spacer").set_attribute("style", "height: 8000px");
        scroll_and_settle(0.0).await;
        sleep(150).await;

        assert!(section.class_list().contains("reveal"));
        assert!(section.class_list().contains("is-visible"));
        host.remove();
    }

    #[wasm_bindgen_test]
    fn copy_control_without_address_keeps_default_action() {
        let host = fixture(r#"<span id="copy-nothing" data-copy-email>Say hello</span>"#);

        assert!(copy_email::install(
            &EnhanceConfig::default(),
            EnhanceConfig::default().telemetry()
        ));

        let proceeded = by_id("copy-nothing")
            .dispatch_event(&cancelable_click())
            .expect("dispatch");
        assert!(proceeded);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn outbound_logger_never_blocks_navigation() {
        let host = fixture(
            r#"<a id="outbound-github" href="https://github.com/kyler505" target="_blank">GitHub</a>"#,
        );
        assert!(links::install(EnhanceConfig::default().telemetry()) >= 1);

        let link = by_id("outbound-github");
        let prevented_by_logger = Rc::new(Cell::new(None));
        {
            let prevented_by_logger = prevented_by_logger.clone();
            dom::listen(&link, "click", move |event| {
                prevented_by_logger.set(Some(event.default_prevented()));
                event.prevent_default();
            });
        }

        link.dispatch_event(&cancelable_click()).expect("dispatch");
        assert_eq!(prevented_by_logger.get(), Some(false));
        host.remove();
    }
}
