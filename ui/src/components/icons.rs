//! Inline Lucide icons (24×24 stroke set). Sized through the `class` prop.

use dioxus::prelude::*;

#[component]
fn LucideSvg(class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn MenuIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        LucideSvg { class: class,
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        }
    }
}

#[component]
pub fn CloseIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        LucideSvg { class: class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn SearchIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        LucideSvg { class: class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn UserIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        LucideSvg { class: class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn CartIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        LucideSvg { class: class,
            circle { cx: "8", cy: "21", r: "1" }
            circle { cx: "19", cy: "21", r: "1" }
            path { d: "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" }
        }
    }
}

#[component]
pub fn ChevronDownIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        LucideSvg { class: class,
            path { d: "m6 9 6 6 6-6" }
        }
    }
}
