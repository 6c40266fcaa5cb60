use dioxus::prelude::*;

use crate::core::catalog::active_catalog;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("page-home-title")} }
            p { {crate::t!("page-home-intro")} }

            ul { class: "page-home__categories",
                for category in active_catalog().iter() {
                    li { key: "{category.href}",
                        Link { class: "page-home__category", to: category.href.clone(), "{category.name}" }
                    }
                }
            }
        }
    }
}
