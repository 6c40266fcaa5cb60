use dioxus::prelude::*;

use ui::components::Navbar;
use ui::views::{
    AccountPage, CartPage, CategoryItemPage, CategoryPage, Home, NotFound, SalePage,
    SearchResults,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileLayout)]
        #[route("/")]
        Home {},
        #[route("/category/:slug")]
        CategoryPage { slug: String },
        #[route("/category/:slug/:item")]
        CategoryItemPage { slug: String, item: String },
        #[route("/sale")]
        SalePage {},
        #[route("/account")]
        AccountPage {},
        #[route("/cart")]
        CartPage {},
        #[route("/search?:query")]
        SearchResults { query: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// On phones the navbar collapses to the drawer trigger, brand and cart.
#[component]
fn MobileLayout() -> Element {
    let route = use_route::<Route>();
    rsx! {
        Navbar { pathname: route.to_string() }
        main { class: "store-main",
            Outlet::<Route> {}
        }
    }
}
