//! Storage Layer - SQLite-backed entry store
//!
//! The store is a single file at `<data_dir>/sqlite/<db_name>` holding one table:
//! - entries(text, color)
//!
//! No connection outlives a call: each operation opens the file, does one unit
//! of work and closes it again.

pub mod location;
pub mod schema;
pub mod sqlite;

pub use location::{db_path, ensure_storage_dir, SQLITE_DIR};
pub use sqlite::{EntryStore, InitReport};
