use dioxus::prelude::*;

use crate::core::catalog::active_catalog;
use crate::core::menu::{desktop_entries, MenuEntry, NavLink};
use crate::core::paths::{element_id, is_active};
use crate::t;

use super::icons::ChevronDownIcon;
use super::navbar::{link_class, use_lang_marker};

/// Horizontal mega-menu shown at desktop widths.
///
/// At most one panel is open. Hovering a trigger opens its panel, clicking
/// toggles it, and leaving the item, following a panel link or pressing
/// Escape closes it.
#[component]
pub(crate) fn DesktopMenu(pathname: String) -> Element {
    let _lang = use_lang_marker();
    let mut open_panel = use_signal(|| Option::<String>::None);

    let entries = desktop_entries(active_catalog(), |name| {
        t!("nav-shop-all", category = name)
    });
    let menu_label = t!("nav-drawer-title");

    rsx! {
        nav {
            class: "navbar__desktop",
            "aria-label": "{menu_label}",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    open_panel.set(None);
                }
            },
            ul { class: "mega-menu",
                for entry in entries.into_iter() {
                    {render_entry(entry, &pathname, open_panel)}
                }
            }
        }
    }
}

fn render_entry(entry: MenuEntry, pathname: &str, open_panel: Signal<Option<String>>) -> Element {
    match entry {
        MenuEntry::Link(link) => render_plain(link, pathname),
        MenuEntry::Panel {
            label,
            shop_all,
            featured,
        } => render_panel(label, shop_all, featured, pathname, open_panel),
    }
}

fn render_plain(link: NavLink, pathname: &str) -> Element {
    let class = link_class("mega-menu__trigger", is_active(pathname, &link.href));

    rsx! {
        li { key: "{link.label}", class: "mega-menu__item",
            Link { class: class, to: link.href.clone(), "{link.label}" }
        }
    }
}

fn render_panel(
    label: String,
    shop_all: NavLink,
    featured: Vec<NavLink>,
    pathname: &str,
    mut open_panel: Signal<Option<String>>,
) -> Element {
    let is_open = open_panel().as_deref() == Some(label.as_str());
    let trigger_class = link_class("mega-menu__trigger", is_active(pathname, &shop_all.href));
    let item_class = if is_open {
        "mega-menu__item mega-menu__item--open"
    } else {
        "mega-menu__item"
    };
    let panel_id = element_id("mega-menu-panel", &shop_all.href);

    let hover_label = label.clone();
    let click_label = label.clone();

    rsx! {
        li {
            key: "{label}",
            class: item_class,
            onmouseenter: move |_| open_panel.set(Some(hover_label.clone())),
            onmouseleave: move |_| open_panel.set(None),

            button {
                r#type: "button",
                class: trigger_class,
                "aria-expanded": "{is_open}",
                "aria-controls": "{panel_id}",
                onclick: move |_| {
                    if open_panel().as_deref() == Some(click_label.as_str()) {
                        open_panel.set(None);
                    } else {
                        open_panel.set(Some(click_label.clone()));
                    }
                },
                "{label}"
                ChevronDownIcon { class: "icon icon--sm mega-menu__chevron" }
            }

            if is_open {
                div { id: "{panel_id}", class: "mega-menu__panel",
                    Link {
                        class: link_class("mega-menu__shop-all", is_active(pathname, &shop_all.href)),
                        to: shop_all.href.clone(),
                        onclick: move |_| open_panel.set(None),
                        div { class: "mega-menu__link-title", "{shop_all.label}" }
                    }
                    div { class: "mega-menu__grid",
                        for link in featured.iter() {
                            Link {
                                key: "{link.href}",
                                class: link_class("mega-menu__link", is_active(pathname, &link.href)),
                                to: link.href.clone(),
                                onclick: move |_| open_panel.set(None),
                                div { class: "mega-menu__link-title", "{link.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
