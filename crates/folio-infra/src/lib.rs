//! Infrastructure adapters for Folio: where the catalog comes from.

pub mod catalog;
