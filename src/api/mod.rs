pub mod api_error;
pub mod client;
pub mod models;

pub use api_error::FetchError;
pub use client::{HttpListingsClient, ListingPage, ListingsApi};
