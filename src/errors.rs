//! Unified storage error type.
//! All modules (db, config, utils) return StoreError to keep the error
//! handling consistent; the public `Database` surface translates these
//! into the sentinel values documented on each method.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("No open connection")]
    NoConnection,

    #[error("Empty statement")]
    EmptyStatement,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
