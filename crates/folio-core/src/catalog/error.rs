use thiserror::Error;

use crate::ids::EntryId;

/// Shape errors found while building a [`Catalog`](super::Catalog).
///
/// These are authoring mistakes in the static content source; they surface
/// once at startup and never at navigation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog entry at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("duplicate catalog entry id: {0}")]
    DuplicateId(EntryId),

    #[error("catalog entry {id} has an empty `{field}`")]
    EmptyField { id: EntryId, field: &'static str },
}
