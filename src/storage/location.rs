//! Storage location provisioning

use crate::{Result, StoreError};
use std::path::{Path, PathBuf};

/// Subdirectory of the data directory that holds the store file
pub const SQLITE_DIR: &str = "sqlite";

/// Resolve `base_dir/sqlite`, creating it and any missing parents.
///
/// Calling this again for the same base directory is a no-op. Fails if the
/// directory cannot be created or the path is taken by a non-directory.
pub fn ensure_storage_dir(base_dir: &Path) -> Result<PathBuf> {
    let dir = base_dir.join(SQLITE_DIR);

    if !dir.is_dir() {
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Provisioning {
            path: dir.clone(),
            source,
        })?;
        tracing::debug!("Created folder {}", dir.display());
    }

    tracing::info!("Sqlite folder is: {}", dir.display());
    Ok(dir)
}

/// Path of the store file inside a provisioned directory
pub fn db_path(sqlite_dir: &Path, db_name: &str) -> PathBuf {
    sqlite_dir.join(db_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_provisioning_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("app").join("data");

        let first = ensure_storage_dir(&base).unwrap();
        let second = ensure_storage_dir(&base).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, base.join("sqlite"));
        assert!(first.is_dir());
    }

    #[test]
    fn test_provisioning_fails_on_file_collision() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("sqlite"), b"not a directory").unwrap();

        let err = ensure_storage_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, StoreError::Provisioning { .. }));
    }

    #[test]
    fn test_db_path() {
        let dir = Path::new("/data/sqlite");
        assert_eq!(db_path(dir, "test.db"), PathBuf::from("/data/sqlite/test.db"));
    }
}
