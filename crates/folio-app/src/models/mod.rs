pub mod project_listing;

pub use project_listing::ProjectListing;
