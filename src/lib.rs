//! wardstore library root.
//! Embedded SQLite storage layer for the WardBook record-keeping tools:
//! one connection handle, one-shot schema bootstrap, raw query passthrough.

pub mod config;
pub mod db;
pub mod errors;
pub mod ui;
pub mod utils;

pub use db::{Cursor, Database, ResultSet};
pub use errors::{StoreError, StoreResult};
