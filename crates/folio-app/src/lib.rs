//! Folio Application Orchestration Layer
//!
//! This crate contains the use cases and the navigation controller that sit
//! between the content catalog and a view layer.

pub mod app;
pub mod deps;
pub mod models;
pub mod usecases;

pub use app::App;
pub use deps::AppDeps;
