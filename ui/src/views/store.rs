use dioxus::prelude::*;

use crate::core::paths::HOME_PATH;

#[component]
pub fn SalePage() -> Element {
    rsx! {
        section { class: "page page-sale",
            h1 { {crate::t!("page-sale-title")} }
        }
    }
}

#[component]
pub fn AccountPage() -> Element {
    rsx! {
        section { class: "page page-account",
            h1 { {crate::t!("page-account-title")} }
        }
    }
}

#[component]
pub fn CartPage() -> Element {
    rsx! {
        section { class: "page page-cart",
            h1 { {crate::t!("page-cart-title")} }
            p { class: "page-cart__empty", {crate::t!("page-cart-empty")} }
        }
    }
}

#[component]
pub fn SearchResults(query: String) -> Element {
    let query = query.trim().to_string();

    rsx! {
        section { class: "page page-search",
            if query.is_empty() {
                p { {crate::t!("page-search-empty")} }
            } else {
                h1 { {crate::t!("page-search-title", query = query.as_str())} }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");

    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("page-not-found-title")} }
            p { {crate::t!("page-not-found-body")} }
            Link { to: HOME_PATH, {crate::t!("page-back-home")} }
        }
    }
}
