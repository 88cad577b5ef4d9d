//! Error types for the bookmark store.

use thiserror::Error;

/// Errors raised while opening or mutating the bookmark database.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The database file could not be created or opened.
    #[error("bookmark database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// A read or write transaction could not be started.
    #[error("bookmark transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// The bookmarks table could not be opened.
    #[error("bookmark table error: {0}")]
    Table(#[from] redb::TableError),

    /// A get/insert/remove on the table failed.
    #[error("bookmark storage error: {0}")]
    Storage(#[from] redb::StorageError),

    /// A write transaction failed to commit.
    #[error("bookmark commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// A bookmark list could not be encoded as JSON.
    #[error("bookmark serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The directory holding the database could not be created.
    #[error("bookmark io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
