//! Command implementations.

pub mod completions;
pub mod query;
pub mod terminal;
pub mod version;
