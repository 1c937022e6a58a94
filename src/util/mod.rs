//! Small shared helpers: formatting and persisted browser storage.

pub mod format;
pub mod persist;
