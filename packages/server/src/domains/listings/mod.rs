pub mod data;
pub mod models;
pub mod service;
pub mod store;

// Re-export data types (API boundary types)
pub use data::types::{
    ListingData, ListingFilters, StatsData, StatusUpdate, SubmitListingInput,
};

// Re-export models (domain models)
pub use models::listing::{ItemType, Listing, ListingStatus};

pub use service::{ListingService, ListingStats};
pub use store::ListingStore;
