use dioxus::prelude::*;

use crate::core::paths::{is_active, ACCOUNT_PATH, CART_PATH, HOME_PATH};
use crate::i18n;
use crate::t;

use super::desktop_menu::DesktopMenu;
use super::icons::{CartIcon, UserIcon};
use super::mobile_drawer::MobileDrawer;
use super::search_form::SearchForm;

// Navbar stylesheet (also inlined for release native builds, where assets are not served)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Storefront header: mobile drawer + brand, desktop mega-menu, and the
/// search / account / cart cluster.
///
/// `pathname` is the current route as rendered by the platform router; it is
/// only read, to mark the matching links as active. Platforms render this
/// from their layout route:
///
/// ```ignore
/// #[component]
/// fn StoreLayout() -> Element {
///     let pathname = use_route::<Route>().to_string();
///     rsx! {
///         Navbar { pathname }
///         Outlet::<Route> {}
///     }
/// }
/// ```
///
/// If the platform provides a `Signal<String>` language code through context,
/// every part of the navbar subscribes to it and re-renders after the locale
/// picker switches language.
#[component]
pub fn Navbar(#[props(into)] pathname: String) -> Element {
    i18n::init();

    let lang = use_lang_marker();
    tracing::debug!(%pathname, %lang, "navbar render");

    let brand = t!("brand");
    let home_class = link_class("navbar__brand", is_active(&pathname, HOME_PATH));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                // Mobile trigger + brand
                div { class: "navbar__start",
                    MobileDrawer { pathname: pathname.clone() }
                    Link { class: home_class, to: HOME_PATH,
                        span { class: "navbar__brand-mark", "{brand}" }
                    }
                }

                div { class: "navbar__center",
                    DesktopMenu { pathname: pathname.clone() }
                }

                div { class: "navbar__end",
                    SearchForm {}
                    AccountLink { pathname: pathname.clone() }
                    CartLink { pathname: pathname.clone() }
                    LocalePicker {}
                }
            }
        }
    }
}

#[component]
fn AccountLink(pathname: String) -> Element {
    let _lang = use_lang_marker();
    rsx! {
        Link {
            class: link_class("icon-button navbar__account", is_active(&pathname, ACCOUNT_PATH)),
            to: ACCOUNT_PATH,
            UserIcon { class: "icon icon--md" }
            span { class: "visually-hidden", {t!("nav-account")} }
        }
    }
}

#[component]
fn CartLink(pathname: String) -> Element {
    let _lang = use_lang_marker();
    rsx! {
        Link {
            class: link_class("icon-button navbar__cart", is_active(&pathname, CART_PATH)),
            to: CART_PATH,
            CartIcon { class: "icon icon--md" }
            span { class: "visually-hidden", {t!("nav-shopping-cart")} }
        }
    }
}

/// Language `<select>`; only shown when more than one locale is embedded.
#[component]
fn LocalePicker() -> Element {
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::info!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let codes = langs();
    if codes.len() <= 1 {
        return rsx! {};
    }

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                value: "{current_lang()}",
                oninput: on_change,
                for code in codes.iter() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}

/// Subscribes the calling component to the platform's language signal (if
/// any) and returns the current code.
pub(crate) fn use_lang_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}

/// `base` plus the `--active` modifier of its last class when `active`.
pub(crate) fn link_class(base: &str, active: bool) -> String {
    if !active {
        return base.to_string();
    }
    match base.split_whitespace().last() {
        Some(block) => format!("{base} {block}--active"),
        None => base.to_string(),
    }
}
