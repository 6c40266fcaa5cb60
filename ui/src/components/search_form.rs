use dioxus::prelude::*;

use crate::core::paths::{search_href, SEARCH_PARAM, SEARCH_PATH};
use crate::t;

use super::icons::{CloseIcon, SearchIcon};
use super::navbar::use_lang_marker;

/// Search toggle plus a GET form targeting `/search?query=…`.
///
/// The input stays collapsed until the toggle opens it. Submission goes
/// through the router so native platforms navigate too; blank queries are
/// dropped.
#[component]
pub(crate) fn SearchForm() -> Element {
    let _lang = use_lang_marker();
    let mut search_open = use_signal(|| false);
    let mut query = use_signal(String::new);
    let nav = navigator();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(target) = search_href(&query()) else {
            tracing::debug!("ignoring blank search");
            return;
        };
        tracing::info!(%target, "search submitted");
        if nav.push(target).is_some() {
            tracing::warn!("search navigation was rejected by the router");
            return;
        }
        search_open.set(false);
    };

    let is_open = search_open();
    let input_class = if is_open {
        "search__input"
    } else {
        "search__input search__input--hidden"
    };

    rsx! {
        div { class: "search",
            form {
                class: "search__form",
                role: "search",
                action: SEARCH_PATH,
                method: "get",
                onsubmit: on_submit,
                input {
                    r#type: "search",
                    name: SEARCH_PARAM,
                    class: input_class,
                    value: "{query}",
                    placeholder: t!("search-placeholder"),
                    "aria-label": t!("search-label"),
                    autofocus: is_open,
                    oninput: move |evt| query.set(evt.value()),
                }
            }
            button {
                r#type: "button",
                class: "icon-button search__toggle",
                "aria-expanded": "{is_open}",
                onclick: move |_| search_open.set(!search_open()),
                if is_open {
                    CloseIcon { class: "icon icon--md" }
                    span { class: "visually-hidden", {t!("search-close")} }
                } else {
                    SearchIcon { class: "icon icon--md" }
                    span { class: "visually-hidden", {t!("search-open")} }
                }
            }
        }
    }
}
