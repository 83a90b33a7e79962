pub mod listing;

pub use listing::ListingViewModel;
