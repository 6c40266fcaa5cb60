//! View model shared by the mobile drawer and the desktop menu.
//!
//! Both layouts render from these structs, so every link the navbar can
//! show is computed here and can be checked without a DOM.

use super::catalog::{Catalog, Category};
use super::paths::{featured_href, ACCOUNT_PATH, CART_PATH, HOME_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Featured links of a category, in catalog order.
pub fn featured_links(category: &Category) -> Vec<NavLink> {
    category
        .featured
        .iter()
        .map(|item| NavLink::new(item.as_str(), featured_href(&category.href, item)))
        .collect()
}

/// One top-level item of the desktop menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Category without featured items.
    Link(NavLink),
    /// Category that expands into a panel.
    Panel {
        label: String,
        shop_all: NavLink,
        featured: Vec<NavLink>,
    },
}

/// Desktop entries; `shop_all` produces the panel's "shop all" label from a category name.
pub fn desktop_entries(catalog: &Catalog, shop_all: impl Fn(&str) -> String) -> Vec<MenuEntry> {
    catalog
        .iter()
        .map(|category| {
            if category.has_featured() {
                MenuEntry::Panel {
                    label: category.name.clone(),
                    shop_all: NavLink::new(shop_all(&category.name), category.href.as_str()),
                    featured: featured_links(category),
                }
            } else {
                MenuEntry::Link(NavLink::new(category.name.as_str(), category.href.as_str()))
            }
        })
        .collect()
}

/// Localized labels the drawer needs beyond catalog data.
#[derive(Debug, Clone)]
pub struct DrawerLabels {
    pub home: String,
    pub account: String,
    pub cart: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerSection {
    pub heading: NavLink,
    /// Empty for plain categories; the drawer then renders no sub-list.
    pub featured: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerModel {
    pub home: NavLink,
    pub sections: Vec<DrawerSection>,
    pub account: NavLink,
    pub cart: NavLink,
}

impl DrawerModel {
    pub fn build(catalog: &Catalog, labels: DrawerLabels) -> Self {
        let sections = catalog
            .iter()
            .map(|category| DrawerSection {
                heading: NavLink::new(category.name.as_str(), category.href.as_str()),
                featured: featured_links(category),
            })
            .collect();

        Self {
            home: NavLink::new(labels.home, HOME_PATH),
            sections,
            account: NavLink::new(labels.account, ACCOUNT_PATH),
            cart: NavLink::new(labels.cart, CART_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> DrawerLabels {
        DrawerLabels {
            home: "ShopSphere".into(),
            account: "My Account".into(),
            cart: "Cart".into(),
        }
    }

    #[test]
    fn electronics_laptops_link() {
        let entries = desktop_entries(Catalog::builtin(), |name| format!("Shop all {name}"));
        let MenuEntry::Panel { featured, .. } = &entries[1] else {
            panic!("Electronics should expand into a panel");
        };
        assert!(featured.contains(&NavLink::new("Laptops", "/category/electronics/laptops")));
    }

    #[test]
    fn panel_shop_all_points_at_category() {
        let entries = desktop_entries(Catalog::builtin(), |name| format!("Shop all {name}"));
        match &entries[0] {
            MenuEntry::Panel { label, shop_all, .. } => {
                assert_eq!(label, "Clothing");
                assert_eq!(shop_all, &NavLink::new("Shop all Clothing", "/category/clothing"));
            }
            other => panic!("unexpected entry {other:?}"),
        }
    }

    #[test]
    fn sale_is_a_plain_desktop_link() {
        let entries = desktop_entries(Catalog::builtin(), |name| name.to_string());
        assert_eq!(entries[3], MenuEntry::Link(NavLink::new("Sale", "/sale")));
    }

    #[test]
    fn drawer_has_home_four_sections_account_cart() {
        let model = DrawerModel::build(Catalog::builtin(), labels());
        assert_eq!(model.home.href, "/");
        assert_eq!(model.sections.len(), 4);
        assert_eq!(model.account.href, "/account");
        assert_eq!(model.cart.href, "/cart");

        let headings: Vec<_> = model
            .sections
            .iter()
            .map(|s| s.heading.href.as_str())
            .collect();
        assert_eq!(
            headings,
            ["/category/clothing", "/category/electronics", "/category/home", "/sale"]
        );
    }

    #[test]
    fn drawer_sale_section_has_no_sub_links() {
        let model = DrawerModel::build(Catalog::builtin(), labels());
        assert!(model.sections[3].featured.is_empty());
    }

    #[test]
    fn drawer_sub_links_follow_catalog_order() {
        let model = DrawerModel::build(Catalog::builtin(), labels());
        let featured: Vec<_> = model
            .sections
            .iter()
            .flat_map(|s| s.featured.iter().map(|l| l.href.as_str()))
            .collect();
        assert_eq!(featured.len(), 9);
        assert_eq!(featured.first(), Some(&"/category/clothing/t-shirts"));
        assert_eq!(featured.last(), Some(&"/category/home/kitchen"));
    }
}
