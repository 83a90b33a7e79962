pub mod filters;
pub mod pagination;
pub mod params;
pub mod state;
pub mod views;

pub use filters::FilterKey;
pub use pagination::PaginationState;
pub use params::Params;
pub use state::{DisplayMode, SearchState};
pub use views::{new_view_id, ViewRegistry};
