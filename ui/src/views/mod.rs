mod category;
pub use category::{CategoryItemPage, CategoryPage};

mod home;
pub use home::Home;

mod store;
pub use store::{AccountPage, CartPage, NotFound, SalePage, SearchResults};
