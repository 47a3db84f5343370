//! Folio
//!
//! Bootstrap and a terminal view layer around the Folio core.

pub mod bootstrap;
pub mod shell;
