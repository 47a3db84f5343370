//! # folio-core
//!
//! Core domain models and navigation logic for Folio.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod dispatch;
pub mod ids;
pub mod navigation;
pub mod ports;

// Re-export commonly used types at the crate root
pub use carousel::Carousel;
pub use catalog::{
    CaseStudy, Catalog, CatalogEntry, CatalogError, CatalogFilter, Category, CategoryCount,
    CategoryFilter, ViewToggle,
};
pub use config::SiteConfig;
pub use contact::BookingLink;
pub use dispatch::{ViewDescriptor, ViewDispatcher};
pub use ids::EntryId;
pub use navigation::{NavigationEvent, NavigationState, NavigationStateMachine, View};
