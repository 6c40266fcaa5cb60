//! Category catalog backing the storefront navigation.
//!
//! The built-in list is compiled in. A platform may register a replacement
//! once at startup (the desktop shell does this from `catalog.json`); every
//! render then reads `active_catalog()`.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A navigational grouping with a base path and optional featured sub-items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub featured: Vec<String>,
}

impl Category {
    pub fn new<N, H, I, F>(name: N, href: H, featured: I) -> Self
    where
        N: Into<String>,
        H: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            href: href.into(),
            featured: featured.into_iter().map(Into::into).collect(),
        }
    }

    /// Categories without featured items render as a plain link everywhere.
    pub fn has_featured(&self) -> bool {
        !self.featured.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no categories")]
    Empty,
    #[error("category #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("category `{name}` has an empty href")]
    EmptyHref { name: String },
    #[error("category `{name}` href `{href}` must start with `/`")]
    NotRootRelative { name: String, href: String },
    #[error("category `{name}` is listed more than once")]
    DuplicateCategory { name: String },
    #[error("more than one category links to `{href}`")]
    DuplicateHref { href: String },
    #[error("category `{category}` lists featured item `{item}` more than once")]
    DuplicateFeatured { category: String, item: String },
}

/// Ordered list of categories as shown in the menus.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// (name, href, featured) rows for the compiled-in catalog.
const BUILTIN: &[(&str, &str, &[&str])] = &[
    (
        "Clothing",
        "/category/clothing",
        &["T-shirts", "Hoodies", "Pants"],
    ),
    (
        "Electronics",
        "/category/electronics",
        &["Phones", "Laptops", "Accessories"],
    ),
    ("Home", "/category/home", &["Furniture", "Decor", "Kitchen"]),
    ("Sale", "/sale", &[]),
];

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    categories: BUILTIN
        .iter()
        .map(|(name, href, featured)| Category::new(*name, *href, featured.iter().copied()))
        .collect(),
});

static REGISTERED: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Parse a JSON array of categories and validate it.
    pub fn from_json(src: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(src)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a catalog file. A missing file is `Ok(None)`.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, CatalogError> {
        match std::fs::read_to_string(path) {
            Ok(src) => Self::from_json(&src).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::Empty);
        }

        // Names and hrefs key the rendered menu items, so both must be unique.
        let mut names = HashSet::new();
        let mut hrefs = HashSet::new();
        for (index, category) in self.categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if category.href.trim().is_empty() {
                return Err(CatalogError::EmptyHref {
                    name: category.name.clone(),
                });
            }
            if !category.href.starts_with('/') {
                return Err(CatalogError::NotRootRelative {
                    name: category.name.clone(),
                    href: category.href.clone(),
                });
            }
            if !names.insert(category.name.trim().to_lowercase()) {
                return Err(CatalogError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
            let href = match category.href.trim_end_matches('/') {
                "" => "/",
                trimmed => trimmed,
            };
            if !hrefs.insert(href) {
                return Err(CatalogError::DuplicateHref {
                    href: category.href.clone(),
                });
            }

            // Paths are lowercased, so "Phones" and "phones" collide.
            let mut seen = HashSet::new();
            for item in &category.featured {
                if !seen.insert(item.to_lowercase()) {
                    return Err(CatalogError::DuplicateFeatured {
                        category: category.name.clone(),
                        item: item.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Install a catalog for the rest of the process. Returns `false` if one was
/// already registered (the first registration wins).
pub fn register_catalog(catalog: Catalog) -> bool {
    let count = catalog.len();
    match REGISTERED.set(catalog) {
        Ok(()) => {
            tracing::info!(categories = count, "registered storefront catalog");
            true
        }
        Err(_) => {
            tracing::warn!("storefront catalog already registered; ignoring replacement");
            false
        }
    }
}

/// The registered catalog, or the built-in one.
pub fn active_catalog() -> &'static Catalog {
    REGISTERED.get().unwrap_or_else(Catalog::builtin)
}
