//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rand::Rng;
use rusqlite::{params, Connection, OpenFlags};
use crate::entry::Entry;
use crate::seed;
use crate::{Result, StoreError, MIN_ENTRIES};
use super::schema;

/// Outcome of a successful initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// Rows present before the top-up
    pub existing: usize,
    /// Rows inserted by the top-up
    pub inserted: usize,
}

impl InitReport {
    pub fn total(&self) -> usize {
        self.existing + self.inserted
    }
}

/// Handle to the entry store file.
///
/// Holds only the path. Every operation opens its own connection and drops it
/// before returning, on success and on error alike.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

#[derive(Clone, Copy)]
enum OpenMode {
    Create,
    ReadWrite,
    ReadOnly,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Only `Create` may bring a new file into existence
    fn open(&self, mode: OpenMode) -> Result<Connection> {
        let base = OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let flags = match mode {
            OpenMode::Create => {
                base | OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
            }
            OpenMode::ReadWrite => base | OpenFlags::SQLITE_OPEN_READ_WRITE,
            OpenMode::ReadOnly => base | OpenFlags::SQLITE_OPEN_READ_ONLY,
        };

        Connection::open_with_flags(&self.path, flags).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })
    }

    // ========== Initialization ==========

    /// Create the table if needed and top it up with random palette entries.
    ///
    /// All inserts share one transaction; a failure part way leaves the
    /// pre-existing rows untouched.
    pub fn try_initialize<R: Rng + ?Sized>(
        &self,
        min_entries: usize,
        rng: &mut R,
    ) -> Result<InitReport> {
        let mut conn = self.open(OpenMode::Create)?;

        conn.execute(schema::CREATE_ENTRIES_TABLE, []).map_err(StoreError::Schema)?;
        let existing: i64 = conn
            .query_row(schema::COUNT_ENTRIES, [], |row| row.get(0))
            .map_err(StoreError::Schema)?;
        let existing = existing as usize;
        tracing::debug!("Found {} existing entries in {}", existing, self.path.display());

        let wanted = seed::top_up_count(existing, min_entries);
        if wanted > 0 {
            tracing::info!("Only found {} entries; adding {} more...", existing, wanted);
            let batch = seed::generate_seed_batch(wanted, rng);

            let tx = conn.transaction().map_err(StoreError::SeedInsert)?;
            {
                let mut stmt = tx.prepare(schema::INSERT_ENTRY).map_err(StoreError::SeedInsert)?;
                for entry in &batch {
                    stmt.execute(params![entry.text, entry.color])
                        .map_err(StoreError::SeedInsert)?;
                    tracing::debug!("Added new entry of {}", entry);
                }
            }
            tx.commit().map_err(StoreError::SeedInsert)?;
        }

        tracing::debug!("Finished creating table \"entries\" in {}", self.path.display());
        Ok(InitReport { existing, inserted: wanted })
    }

    /// Initialize with the default threshold, reporting only success.
    pub fn initialize(&self) -> bool {
        self.initialize_with(MIN_ENTRIES)
    }

    pub fn initialize_with(&self, min_entries: usize) -> bool {
        self.initialize_report(min_entries).is_some()
    }

    /// Initialize with a thread-local RNG; a failure is logged and yields `None`.
    pub fn initialize_report(&self, min_entries: usize) -> Option<InitReport> {
        let result = self.try_initialize(min_entries, &mut rand::thread_rng());
        tracing::info!("Sqlite initialization of {} complete", self.path.display());
        match result {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::error!(
                    "Error creating table \"entries\" in {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    // ========== Read Operations ==========

    /// Read every entry in storage order.
    ///
    /// Opens the file read-only, so a missing store is an error rather than a
    /// freshly created empty one.
    pub fn try_list_entries(&self) -> Result<Vec<Entry>> {
        let conn = self.open(OpenMode::ReadOnly)?;
        let mut stmt = conn.prepare(schema::SELECT_ENTRIES).map_err(StoreError::Read)?;

        let entries = stmt
            .query_map([], |row| {
                Ok(Entry {
                    text: row.get(0)?,
                    color: row.get(1)?,
                })
            })
            .map_err(StoreError::Read)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::Read)?;

        Ok(entries)
    }

    /// Read every entry; any failure is logged and yields an empty list.
    pub fn list_entries(&self) -> Vec<Entry> {
        self.try_list_entries().unwrap_or_else(|e| {
            tracing::error!("Failed to read in db at {}: {}", self.path.display(), e);
            Vec::new()
        })
    }

    // ========== Delete Operations ==========

    /// Delete every row of `table_name`, returning how many went.
    pub fn try_clear_all(&self, table_name: &str) -> Result<usize> {
        if !schema::is_valid_table_name(table_name) {
            return Err(StoreError::InvalidTableName(table_name.to_string()));
        }

        let conn = self.open(OpenMode::ReadWrite)?;
        let deleted = conn
            .execute(&schema::delete_all_statement(table_name), [])
            .map_err(StoreError::Delete)?;
        tracing::debug!("Deleted {} rows from {}", deleted, table_name);
        Ok(deleted)
    }

    pub fn clear_all(&self, table_name: &str) -> bool {
        match self.try_clear_all(table_name) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(
                    "Failed to clear {} in {}: {}",
                    table_name,
                    self.path.display(),
                    e
                );
                false
            }
        }
    }
}
