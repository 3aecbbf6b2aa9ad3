#![deny(unsafe_code)]

use std::path::PathBuf;

use shelter_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create table {table}: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to clear table {table}: {source}")]
    Clear {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to insert into {table} (row {key}): {source}")]
    Insert {
        table: &'static str,
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query on {table} failed: {source}")]
    Query {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("transaction failed: {0}")]
    Transaction(#[source] rusqlite::Error),

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("invalid key read from {table}: {source}")]
    InvalidKey {
        table: &'static str,
        #[source]
        source: ModelError,
    },
}
