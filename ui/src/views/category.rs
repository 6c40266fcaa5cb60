use dioxus::prelude::*;

use crate::core::catalog::{active_catalog, Category};
use crate::core::menu::featured_links;

fn find_category(slug: &str) -> Option<&'static Category> {
    let href = format!("/category/{slug}");
    active_catalog().iter().find(|c| c.href == href)
}

#[component]
pub fn CategoryPage(slug: String) -> Element {
    let category = find_category(&slug);
    let name = category.map(|c| c.name.clone()).unwrap_or_else(|| slug.clone());
    let featured = category.map(featured_links).unwrap_or_default();

    rsx! {
        section { class: "page page-category",
            h1 { {crate::t!("page-category-title", category = name.as_str())} }
            if !featured.is_empty() {
                ul { class: "page-category__featured",
                    for link in featured.iter() {
                        li { key: "{link.href}", Link { to: link.href.clone(), "{link.label}" } }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryItemPage(slug: String, item: String) -> Element {
    let name = find_category(&slug)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| slug.clone());
    let label = find_category(&slug)
        .and_then(|c| c.featured.iter().find(|f| f.to_lowercase() == item))
        .cloned()
        .unwrap_or_else(|| item.clone());

    rsx! {
        section { class: "page page-category-item",
            h1 { {crate::t!("page-item-title", item = label.as_str(), category = name.as_str())} }
        }
    }
}
