//! # Swatchlist - persistent store of colored text entries
//!
//! Swatchlist owns a small SQLite table of `(text, color)` records that backs a
//! visual list of colored items:
//! - Storage directory provisioning under a host-supplied data directory
//! - Idempotent schema creation and seed top-up to a minimum population
//! - Bulk read-back and projection into renderable descriptors
//! - Full-table clearing on shutdown

pub mod app;
pub mod config;
pub mod entry;
pub mod seed;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use app::{RunOutcome, StoreApp};
pub use entry::{project, Entry, RenderDescriptor};
pub use storage::{ensure_storage_dir, EntryStore, InitReport};

use std::path::PathBuf;

/// Default file name of the store inside the `sqlite` directory
pub const DB_NAME: &str = "test.db";

/// Name of the single table holding entries
pub const ENTRIES_TABLE: &str = "entries";

/// Population threshold checked once at initialization
pub const MIN_ENTRIES: usize = 100;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error kinds for store operations, one per failing stage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to create storage directory {path}: {source}")]
    Provisioning {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Schema error: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("Seed insert failed: {0}")]
    SeedInsert(#[source] rusqlite::Error),

    #[error("Read error: {0}")]
    Read(#[source] rusqlite::Error),

    #[error("Delete error: {0}")]
    Delete(#[source] rusqlite::Error),

    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),
}
