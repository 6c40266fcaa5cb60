//! Process-wide catalog registration. Lives in its own test binary because
//! the registered catalog cannot be reset once set.

use ui::{active_catalog, register_catalog, Catalog, Category};

#[test]
fn first_registration_wins() {
    assert_eq!(active_catalog(), Catalog::builtin());

    let books = Catalog::new(vec![
        Category::new("Books", "/category/books", ["Fiction", "Comics"]),
        Category::new("Outlet", "/outlet", Vec::<String>::new()),
    ]);
    let games = Catalog::new(vec![Category::new(
        "Games",
        "/category/games",
        Vec::<String>::new(),
    )]);

    assert!(register_catalog(books.clone()));
    assert!(!register_catalog(games));
    assert_eq!(active_catalog(), &books);
}
