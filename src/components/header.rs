use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::language::{use_i18n, LanguageToggle};
use crate::components::scroll_progress::ScrollProgress;

/// Smooth-scrolls to the section with the given id, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("No section with id '{}'", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

const NAV_ITEMS: [(&str, &str); 5] = [
    ("founder-story", "ourStory"),
    ("mission", "mission"),
    ("impact", "impact"),
    ("programs", "programs"),
    ("contact", "contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let i18n = use_i18n();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 20.0);
                    }) as Box<dyn FnMut()>)
                };
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let menu_class = if *menu_open { "nav-links open" } else { "nav-links" };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <ScrollProgress />
            <nav class="nav-content">
                <a href="#hero" class="nav-logo" onclick={go_to("hero")}>
                    {"Bright Beginnings Books"}
                </a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_ITEMS.iter().map(|&(id, key)| html! {
                            <a href={format!("#{}", id)} class="nav-link" onclick={go_to(id)}>
                                { i18n.t(key) }
                            </a>
                        })
                    }
                    <LanguageToggle />
                    <a href="#get-involved" class="nav-donate" onclick={go_to("get-involved")}>
                        { i18n.t("donateNow") }
                    </a>
                </div>
            </nav>
        </header>
    }
}
