//! Shared UI crate for ShopSphere. The storefront navbar, its link model and
//! the placeholder pages behind its routes live here; platform crates only
//! declare routes and launch.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Storefront header (components/navbar.rs) and its parts
    mod desktop_menu;
    mod mobile_drawer;
    mod navbar;
    mod search_form;
    pub use navbar::Navbar;

    pub mod icons;
}

pub use crate::core::catalog::{active_catalog, register_catalog, Catalog, CatalogError, Category};
