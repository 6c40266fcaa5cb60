//! Route paths the navigation links to, and the helpers that derive them.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const HOME_PATH: &str = "/";
pub const ACCOUNT_PATH: &str = "/account";
pub const CART_PATH: &str = "/cart";
pub const SEARCH_PATH: &str = "/search";

/// Query parameter carrying the search text.
pub const SEARCH_PARAM: &str = "query";

/// Unreserved characters (RFC 3986) pass through; everything else is encoded.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Link path for a featured item: `base + "/" + lowercase(item)`.
pub fn featured_href(base: &str, item: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), item.to_lowercase())
}

/// Navigation target for a search, or `None` when there is nothing to search for.
pub fn search_href(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "{SEARCH_PATH}?{SEARCH_PARAM}={}",
        utf8_percent_encode(query, QUERY_VALUE)
    ))
}

/// HTML id for an element tied to `href`, e.g. `mega-menu-panel` and
/// `/category/home` give `mega-menu-panel-category-home`.
///
/// Anything outside ASCII alphanumerics becomes a single `-`, so the id never
/// contains whitespace.
pub fn element_id(prefix: &str, href: &str) -> String {
    let mut id = String::from(prefix);
    let mut pending_dash = true;
    for ch in href.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash {
                id.push('-');
                pending_dash = false;
            }
            id.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    id
}

/// Whether `href` should be styled as the current location.
///
/// The query string is ignored. `/` only matches itself; anything else also
/// matches its descendants (`/category/home` is active on `/category/home/decor`).
pub fn is_active(pathname: &str, href: &str) -> bool {
    let path = pathname.split(['?', '#']).next().unwrap_or_default();
    let path = trim_trailing_slash(path);
    let href = trim_trailing_slash(href);

    if href == HOME_PATH {
        return path == HOME_PATH;
    }
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_href_lowercases_item() {
        assert_eq!(
            featured_href("/category/electronics", "Laptops"),
            "/category/electronics/laptops"
        );
        assert_eq!(
            featured_href("/category/clothing", "T-shirts"),
            "/category/clothing/t-shirts"
        );
    }

    #[test]
    fn featured_href_does_not_double_slash() {
        assert_eq!(featured_href("/category/home/", "Decor"), "/category/home/decor");
    }

    #[test]
    fn search_href_plain_word() {
        assert_eq!(search_href("laptops").as_deref(), Some("/search?query=laptops"));
    }

    #[test]
    fn search_href_trims_and_encodes() {
        assert_eq!(
            search_href("  red shoes ").as_deref(),
            Some("/search?query=red%20shoes")
        );
        assert_eq!(
            search_href("a&b=c").as_deref(),
            Some("/search?query=a%26b%3Dc")
        );
        assert_eq!(
            search_href("t-shirt_v2.0~").as_deref(),
            Some("/search?query=t-shirt_v2.0~")
        );
    }

    #[test]
    fn search_href_encodes_unicode() {
        assert_eq!(search_href("café").as_deref(), Some("/search?query=caf%C3%A9"));
    }

    #[test]
    fn search_href_empty_is_none() {
        assert_eq!(search_href(""), None);
        assert_eq!(search_href("   \t"), None);
    }

    #[test]
    fn element_id_is_whitespace_free() {
        assert_eq!(
            element_id("mega-menu-panel", "/category/home"),
            "mega-menu-panel-category-home"
        );
        assert_eq!(
            element_id("mega-menu-panel", "/category/Gift cards/"),
            "mega-menu-panel-category-gift-cards"
        );
        assert!(!element_id("mega-menu-panel", "/a  b\tc").contains(char::is_whitespace));
    }

    #[test]
    fn home_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/cart", "/"));
        assert!(!is_active("/category/home", "/"));
    }

    #[test]
    fn active_on_exact_and_descendant_paths() {
        assert!(is_active("/category/home", "/category/home"));
        assert!(is_active("/category/home/decor", "/category/home"));
        assert!(is_active("/category/home/", "/category/home"));
    }

    #[test]
    fn not_active_on_shared_prefix() {
        assert!(!is_active("/category/homeware", "/category/home"));
        assert!(!is_active("/sales", "/sale"));
    }

    #[test]
    fn query_string_is_ignored() {
        assert!(is_active("/search?query=phones", SEARCH_PATH));
        assert!(!is_active("/?query=cart", CART_PATH));
    }
}
