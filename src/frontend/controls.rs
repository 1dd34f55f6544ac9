use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, AddEventListenerOptions, Event};
use yew::prelude::*;

use super::{dom, theme};
use crate::model::scroll::{back_to_top_visible, BACK_TO_TOP_ID};
use crate::model::theme::{Theme, THEME_TOGGLE_ID};

pub const CONTROLS_ROOT_ID: &str = "enhance-controls";
const CONTROLS_STYLE_ID: &str = "enhance-style";
const CONTROLS_STYLE: &str = r#"
.floating-control { position: fixed; right: 1.25rem; z-index: 900; width: 2.75rem; height: 2.75rem; border: 1px solid var(--muted, #888); border-radius: 50%; background: var(--surface, #fff); color: var(--fg, #111); font-size: 1.15rem; cursor: pointer; box-shadow: 0 4px 14px rgba(0, 0, 0, 0.15); }
#theme-toggle { top: 1.25rem; }
#back-to-top { bottom: 1.25rem; opacity: 0; visibility: hidden; transform: translateY(8px); transition: opacity 0.25s ease, transform 0.25s ease, visibility 0.25s; }
#back-to-top.is-visible { opacity: 1; visibility: visible; transform: none; }
.typing-cursor { font-weight: 300; margin-left: 1px; }
"#;

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    initial: Theme,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let initial = props.initial;
    let theme = use_state(move || initial);

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            theme::persist_theme(next);
            theme::apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    html! {
        <button
            id={THEME_TOGGLE_ID}
            class="floating-control"
            type="button"
            aria-label={(*theme).toggle_label()}
            aria-pressed={(*theme).pressed().to_string()}
            onclick={on_toggle}
        >
            <span aria-hidden="true">{(*theme).icon()}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct BackToTopProps {
    threshold: f64,
}

#[function_component(BackToTop)]
fn back_to_top(props: &BackToTopProps) -> Html {
    let initial_threshold = props.threshold;
    let visible = use_state(move || back_to_top_visible(dom::scroll_offset(), initial_threshold));

    {
        let visible = visible.clone();
        let threshold = props.threshold;
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                visible.set(back_to_top_visible(dom::scroll_offset(), threshold));
            });

            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            let win = window();
            if let Some(win) = win.as_ref() {
                let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                    &options,
                );
            }

            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    let onclick = Callback::from(|_| dom::scroll_window_to(0.0));

    html! {
        <button
            id={BACK_TO_TOP_ID}
            class={classes!("floating-control", (*visible).then_some("is-visible"))}
            type="button"
            aria-label="Back to top"
            aria-hidden={(!*visible).to_string()}
            tabindex={if *visible { "0" } else { "-1" }}
            onclick={onclick}
        >
            <span aria-hidden="true">{"↑"}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingControlsProps {
    pub scroll_top_threshold: f64,
    pub initial_theme: Theme,
}

#[function_component(FloatingControls)]
pub fn floating_controls(props: &FloatingControlsProps) -> Html {
    html! {
        <>
            <ThemeToggle initial={props.initial_theme} />
            <BackToTop threshold={props.scroll_top_threshold} />
        </>
    }
}

/// Mounts the floating theme and back-to-top buttons once per page.
pub fn mount(scroll_top_threshold: f64, initial_theme: Theme) -> bool {
    let Some(document) = dom::document() else {
        return false;
    };
    if document.get_element_by_id(CONTROLS_ROOT_ID).is_some() {
        return false;
    }

    let Some(body) = document.body() else {
        return false;
    };
    let Ok(root) = document.create_element("div") else {
        return false;
    };
    root.set_id(CONTROLS_ROOT_ID);
    if body.append_child(&root).is_err() {
        return false;
    }

    dom::ensure_style_block(CONTROLS_STYLE_ID, CONTROLS_STYLE);
    yew::Renderer::<FloatingControls>::with_root_and_props(
        root,
        FloatingControlsProps {
            scroll_top_threshold,
            initial_theme,
        },
    )
    .render();
    true
}
