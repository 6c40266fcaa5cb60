#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::Navbar;
use ui::views::{
    AccountPage, CartPage, CategoryItemPage, CategoryPage, Home, NotFound, SalePage,
    SearchResults,
};
use ui::{register_catalog, Catalog};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(StoreLayout)]
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

/// Optional catalog override, looked up in the resource directory.
const CATALOG_FILE: &str = "catalog.json";

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); desktop /assets only carries catalog.json.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("ShopSphere – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

/// Registers `catalog.json` from `dir` when present; otherwise the built-in
/// categories stay active.
fn install_catalog(dir: &Path) {
    let path = dir.join(CATALOG_FILE);
    match Catalog::load_optional(&path) {
        Ok(Some(catalog)) => {
            register_catalog(catalog);
        }
        Ok(None) => tracing::debug!(path = %path.display(), "no catalog override; using built-in categories"),
        Err(err) => tracing::warn!(path = %path.display(), %err, "ignoring catalog override"),
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    // After launch so the logger is already installed.
    use_hook(|| install_catalog(&resolve_resource_dir()));

    // Global reactive language code; the navbar's locale picker updates it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so routed pages re-render their strings too.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout route: the shared `Navbar` above the routed page.
#[component]
fn StoreLayout() -> Element {
    let route = use_route::<Route>();
    rsx! {
        Navbar { pathname: route.to_string() }
        main { class: "store-main",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_catalog_file_keeps_builtin_categories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CATALOG_FILE),
            r#"[{"name": "A", "href": "/a"}, {"name": "A", "href": "/b"}]"#,
        )
        .unwrap();

        install_catalog(dir.path());
        assert_eq!(ui::active_catalog(), Catalog::builtin());
    }

    #[test]
    fn missing_catalog_file_keeps_builtin_categories() {
        let dir = tempfile::tempdir().unwrap();
        install_catalog(dir.path());
        assert_eq!(ui::active_catalog(), Catalog::builtin());
    }

    #[test]
    fn shipped_catalog_override_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(CATALOG_FILE);
        let catalog = Catalog::load_optional(&path).unwrap().expect("assets/catalog.json");
        assert_eq!(&catalog, Catalog::builtin());
    }

    #[test]
    fn featured_links_parse_into_item_routes() {
        let route: Route = "/category/electronics/laptops".parse().unwrap();
        assert_eq!(
            route,
            Route::CategoryItemPage {
                slug: "electronics".into(),
                item: "laptops".into()
            }
        );
    }

    #[test]
    fn plain_category_routes() {
        assert_eq!("/sale".parse::<Route>().unwrap(), Route::SalePage {});
        assert_eq!("/cart".parse::<Route>().unwrap(), Route::CartPage {});
        assert_eq!("/account".parse::<Route>().unwrap(), Route::AccountPage {});
    }

    #[test]
    fn search_route_carries_the_query() {
        assert_eq!(
            "/search?query=phones".parse::<Route>().unwrap(),
            Route::SearchResults {
                query: "phones".into()
            }
        );
    }
}
