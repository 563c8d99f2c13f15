//! SQLite access layer for sqlw.
//!
//! This module provides the database handle with:
//! - One fresh connection and one transaction per call
//! - Result normalization and a per-handle error policy
//! - An optional append-only activity log
//!
//! # Submodules
//!
//! - [`database`] - The handle and its query helpers
//! - [`policy`] - Options, error policy and session mode
//! - [`activity`] - Timestamped activity log
//! - [`file`] - Append-only text file writes
//! - [`terminal`] - Interactive query loop
//! - [`async_db`] - Async facade running helpers on the blocking pool

pub mod activity;
pub mod async_db;
pub mod database;
pub mod file;
pub mod policy;
pub mod terminal;

pub use activity::ActivityLog;
pub use async_db::AsyncDatabase;
pub use database::{Database, ALL_COLUMNS};
pub use policy::{ErrorPolicy, Mode, Options};
