//! Link properties of the storefront navigation, checked against the view
//! model both the drawer and the desktop menu render from.

use ui::core::catalog::{Catalog, Category};
use ui::core::menu::{desktop_entries, featured_links, DrawerLabels, DrawerModel, MenuEntry, NavLink};
use ui::core::paths::{is_active, search_href, ACCOUNT_PATH, CART_PATH};

fn drawer(catalog: &Catalog) -> DrawerModel {
    DrawerModel::build(
        catalog,
        DrawerLabels {
            home: "ShopSphere".into(),
            account: "My Account".into(),
            cart: "Cart".into(),
        },
    )
}

fn shop_all(name: &str) -> String {
    format!("Shop all {name}")
}

#[test]
fn every_featured_item_is_linked_in_both_layouts() {
    let catalog = Catalog::builtin();
    let entries = desktop_entries(catalog, shop_all);
    let model = drawer(catalog);

    for (index, category) in catalog.iter().enumerate() {
        if !category.has_featured() {
            continue;
        }
        let expected: Vec<NavLink> = category
            .featured
            .iter()
            .map(|item| NavLink::new(item.as_str(), format!("{}/{}", category.href, item.to_lowercase())))
            .collect();

        match &entries[index] {
            MenuEntry::Panel { featured, .. } => assert_eq!(featured, &expected, "{}", category.name),
            other => panic!("{} should be a panel, got {other:?}", category.name),
        }
        assert_eq!(model.sections[index].featured, expected, "{}", category.name);
    }
}

#[test]
fn categories_without_featured_items_are_plain_links() {
    let catalog = Catalog::new(vec![
        Category::new("Sale", "/sale", Vec::<String>::new()),
        Category::new("Gift cards", "/gift-cards", Vec::<String>::new()),
    ]);

    let entries = desktop_entries(&catalog, shop_all);
    assert_eq!(
        entries,
        [
            MenuEntry::Link(NavLink::new("Sale", "/sale")),
            MenuEntry::Link(NavLink::new("Gift cards", "/gift-cards")),
        ]
    );

    let model = drawer(&catalog);
    assert!(model.sections.iter().all(|s| s.featured.is_empty()));
    assert_eq!(model.sections[0].heading, NavLink::new("Sale", "/sale"));
}

#[test]
fn drawer_lists_home_categories_account_cart() {
    let model = drawer(Catalog::builtin());

    assert_eq!(model.home, NavLink::new("ShopSphere", "/"));
    assert_eq!(
        model
            .sections
            .iter()
            .map(|s| s.heading.label.as_str())
            .collect::<Vec<_>>(),
        ["Clothing", "Electronics", "Home", "Sale"]
    );
    assert_eq!(model.account, NavLink::new("My Account", "/account"));
    assert_eq!(model.cart, NavLink::new("Cart", "/cart"));
}

#[test]
fn laptops_resolve_under_electronics() {
    let electronics = Category::new(
        "Electronics",
        "/category/electronics",
        ["Phones", "Laptops", "Accessories"],
    );
    let links = featured_links(&electronics);
    assert_eq!(links[1], NavLink::new("Laptops", "/category/electronics/laptops"));
}

#[test]
fn search_targets_the_search_route() {
    for query in ["phones", "Hoodies", "4k tv"] {
        let href = search_href(query).expect("non-empty query navigates");
        assert!(href.starts_with("/search?query="), "{href}");
    }
    assert_eq!(search_href("Hoodies").as_deref(), Some("/search?query=Hoodies"));
    assert_eq!(search_href("  "), None);
}

#[test]
fn account_and_cart_paths_do_not_depend_on_location() {
    let model = drawer(Catalog::builtin());
    for pathname in ["/", "/sale", "/category/home/decor", "/search?query=x"] {
        assert_eq!(model.account.href, ACCOUNT_PATH, "on {pathname}");
        assert_eq!(model.cart.href, CART_PATH, "on {pathname}");
        assert!(!is_active(pathname, CART_PATH));
    }
}

#[test]
fn custom_catalog_round_trips_through_json() {
    let json = serde_json::to_string(Catalog::builtin()).unwrap();
    let parsed = Catalog::from_json(&json).unwrap();
    assert_eq!(&parsed, Catalog::builtin());
}
