mod document;
mod embedded;
mod json_file;

pub use document::{CatalogDocument, CURRENT_SCHEMA_VERSION};
pub use embedded::EmbeddedCatalogSource;
pub use json_file::JsonFileCatalogSource;
