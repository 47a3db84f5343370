mod entry_id;

pub use entry_id::EntryId;
