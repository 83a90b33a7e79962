pub mod home;
pub mod property;
pub mod search;

pub use home::home_page;
pub use property::property_page;
pub use search::{results_fragment, search_page};
