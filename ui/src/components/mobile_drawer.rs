use dioxus::prelude::*;

use crate::core::catalog::active_catalog;
use crate::core::menu::{DrawerLabels, DrawerModel, DrawerSection};
use crate::core::paths::is_active;
use crate::t;

use super::icons::{CartIcon, CloseIcon, MenuIcon, UserIcon};
use super::navbar::{link_class, use_lang_marker};

/// Menu trigger (hidden at desktop widths) and the left slide-in drawer it opens.
///
/// The drawer closes on the close button, the backdrop, or any link inside it.
#[component]
pub(crate) fn MobileDrawer(pathname: String) -> Element {
    let _lang = use_lang_marker();
    let mut open = use_signal(|| false);

    let model = DrawerModel::build(
        active_catalog(),
        DrawerLabels {
            home: t!("brand"),
            account: t!("nav-my-account"),
            cart: t!("nav-cart"),
        },
    );

    let is_open = open();
    let is_hidden = !is_open;
    let drawer_class = if is_open { "drawer drawer--open" } else { "drawer" };

    rsx! {
        button {
            r#type: "button",
            class: "icon-button navbar__menu-trigger",
            "aria-expanded": "{is_open}",
            "aria-controls": "mobile-drawer",
            onclick: move |_| {
                let next = !open();
                tracing::debug!(open = next, "mobile drawer toggled");
                open.set(next);
            },
            MenuIcon { class: "icon icon--lg" }
            span { class: "visually-hidden", {t!("nav-open-menu")} }
        }

        if is_open {
            div { class: "drawer__backdrop", onclick: move |_| open.set(false) }
        }

        aside {
            id: "mobile-drawer",
            class: drawer_class,
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": "{is_hidden}",
            "aria-labelledby": "mobile-drawer-title",

            div { class: "drawer__header",
                h2 { id: "mobile-drawer-title", class: "drawer__title", {t!("nav-drawer-title")} }
                button {
                    r#type: "button",
                    class: "icon-button drawer__close",
                    onclick: move |_| open.set(false),
                    CloseIcon { class: "icon icon--md" }
                    span { class: "visually-hidden", {t!("nav-close-menu")} }
                }
            }

            nav { class: "drawer__nav",
                Link {
                    class: "drawer__brand",
                    to: model.home.href.clone(),
                    onclick: move |_| open.set(false),
                    "{model.home.label}"
                }

                for section in model.sections.iter() {
                    {render_section(section, &pathname, open)}
                }

                div { class: "drawer__footer",
                    Link {
                        class: link_class("drawer__footer-link", is_active(&pathname, &model.account.href)),
                        to: model.account.href.clone(),
                        onclick: move |_| open.set(false),
                        UserIcon { class: "icon icon--sm" }
                        "{model.account.label}"
                    }
                    Link {
                        class: link_class("drawer__footer-link", is_active(&pathname, &model.cart.href)),
                        to: model.cart.href.clone(),
                        onclick: move |_| open.set(false),
                        CartIcon { class: "icon icon--sm" }
                        "{model.cart.label}"
                    }
                }
            }
        }
    }
}

fn render_section(section: &DrawerSection, pathname: &str, mut open: Signal<bool>) -> Element {
    let heading = &section.heading;

    rsx! {
        div { key: "{heading.href}", class: "drawer__section",
            Link {
                class: link_class("drawer__heading", is_active(pathname, &heading.href)),
                to: heading.href.clone(),
                onclick: move |_| open.set(false),
                "{heading.label}"
            }
            if !section.featured.is_empty() {
                ul { class: "drawer__featured",
                    for link in section.featured.iter() {
                        li { key: "{link.href}",
                            Link {
                                class: link_class("drawer__featured-link", is_active(pathname, &link.href)),
                                to: link.href.clone(),
                                onclick: move |_| open.set(false),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
