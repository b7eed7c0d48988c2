//! Host lifecycle around the entry store
//!
//! Start provisions the directory and initializes the store; stop clears the
//! `entries` table. What "start" and "stop" mean is up to whoever drives this.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::entry::{project, RenderDescriptor};
use crate::storage::{db_path, ensure_storage_dir, EntryStore, InitReport};
use crate::{Result, ENTRIES_TABLE};

/// What happened over one start-render-stop cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub initialized: bool,
    pub rendered: usize,
    pub cleared: bool,
}

impl RunOutcome {
    /// Clean only if startup initialized the store
    pub fn succeeded(&self) -> bool {
        self.initialized
    }
}

#[derive(Debug)]
pub struct StoreApp {
    sqlite_dir: PathBuf,
    store: EntryStore,
    init_report: Option<InitReport>,
}

impl StoreApp {
    /// Provision the storage directory, then initialize the store.
    ///
    /// Only a provisioning failure is an error; a failed initialization is
    /// logged and shows up as [`StoreApp::is_initialized`] returning false.
    pub fn start(settings: &Settings) -> Result<Self> {
        let sqlite_dir = ensure_storage_dir(&settings.data_dir)?;
        let store = EntryStore::new(db_path(&sqlite_dir, &settings.db_name));
        let init_report = store.initialize_report(settings.min_entries);

        Ok(Self {
            sqlite_dir,
            store,
            init_report,
        })
    }

    pub fn sqlite_dir(&self) -> &Path {
        &self.sqlite_dir
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn is_initialized(&self) -> bool {
        self.init_report.is_some()
    }

    /// Row counts from startup, if initialization succeeded
    pub fn init_report(&self) -> Option<InitReport> {
        self.init_report
    }

    /// Read all entries and project each into a render descriptor
    pub fn load_descriptors(&self) -> Vec<RenderDescriptor> {
        let entries = self.store.list_entries();
        tracing::debug!("Total lines: {}", entries.len());

        entries
            .iter()
            .map(|entry| {
                let descriptor = project(entry);
                tracing::debug!("New descriptor is {:?}", descriptor);
                descriptor
            })
            .collect()
    }

    /// Clear the entries table
    pub fn stop(&self) -> bool {
        self.store.clear_all(ENTRIES_TABLE)
    }

    /// Start, hand the descriptors to `render`, then stop.
    ///
    /// Render and stop run even when initialization failed, so whatever the
    /// store still holds is shown and then cleared.
    pub fn run<F>(settings: &Settings, render: F) -> Result<RunOutcome>
    where
        F: FnOnce(&[RenderDescriptor]),
    {
        let app = Self::start(settings)?;
        let descriptors = app.load_descriptors();
        render(&descriptors);

        Ok(RunOutcome {
            initialized: app.is_initialized(),
            rendered: descriptors.len(),
            cleared: app.stop(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{COLORS, TEXTS};
    use tempfile::TempDir;

    fn settings_in(dir: &Path) -> Settings {
        Settings::default().with_data_dir(Some(dir.to_path_buf()))
    }

    #[test]
    fn test_full_lifecycle() {
        let tmp = TempDir::new().unwrap();
        let app = StoreApp::start(&settings_in(tmp.path())).unwrap();

        assert!(app.is_initialized());
        assert_eq!(app.init_report(), Some(InitReport { existing: 0, inserted: 101 }));
        assert_eq!(app.sqlite_dir(), tmp.path().join("sqlite"));
        assert_eq!(app.store().path(), tmp.path().join("sqlite").join("test.db"));

        let entries = app.store().list_entries();
        assert_eq!(entries.len(), 101);
        for entry in &entries {
            assert!(TEXTS.contains(&entry.text.as_str()));
            assert!(COLORS.contains(&entry.color.as_str()));
        }

        let descriptors = app.load_descriptors();
        assert_eq!(descriptors.len(), 101);
        assert!(descriptors.iter().all(|d| d.channels[3] == "1" && d.rgb8().is_some()));

        assert!(app.stop());
        assert!(app.store().list_entries().is_empty());
        assert!(app.load_descriptors().is_empty());
    }

    #[test]
    fn test_restart_after_stop_reseeds() {
        let tmp = TempDir::new().unwrap();
        let settings = settings_in(tmp.path());

        let app = StoreApp::start(&settings).unwrap();
        assert!(app.stop());

        let app = StoreApp::start(&settings).unwrap();
        assert_eq!(app.store().list_entries().len(), 101);
    }

    #[test]
    fn test_custom_threshold() {
        let tmp = TempDir::new().unwrap();
        let mut settings = settings_in(tmp.path());
        settings.min_entries = 4;

        let app = StoreApp::start(&settings).unwrap();
        assert_eq!(app.load_descriptors().len(), 5);
    }

    #[test]
    fn test_start_fails_when_dir_cannot_be_made() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();

        assert!(StoreApp::start(&settings_in(&blocker)).is_err());
    }

    #[test]
    fn test_run_cycle_renders_then_clears() {
        let tmp = TempDir::new().unwrap();
        let settings = settings_in(tmp.path());
        let mut seen = 0;

        let outcome = StoreApp::run(&settings, |descriptors| seen = descriptors.len()).unwrap();
        assert_eq!(seen, 101);
        assert_eq!(outcome, RunOutcome { initialized: true, rendered: 101, cleared: true });
        assert!(outcome.succeeded());

        let store = EntryStore::new(tmp.path().join("sqlite").join("test.db"));
        assert!(store.list_entries().is_empty());
    }

    #[test]
    fn test_run_cycle_reports_failed_initialization() {
        let tmp = TempDir::new().unwrap();
        let mut settings = settings_in(tmp.path());
        settings.db_name = "taken".to_string();
        std::fs::create_dir_all(tmp.path().join("sqlite").join("taken")).unwrap();

        let mut rendered = false;
        let outcome = StoreApp::run(&settings, |_| rendered = true).unwrap();
        assert!(rendered);
        assert!(!outcome.initialized);
        assert!(!outcome.succeeded());
        assert_eq!(outcome.rendered, 0);
    }

    #[test]
    fn test_bad_db_name_is_not_initialized() {
        let tmp = TempDir::new().unwrap();
        let mut settings = settings_in(tmp.path());
        // A directory where the store file should be
        settings.db_name = "taken".to_string();
        std::fs::create_dir_all(tmp.path().join("sqlite").join("taken")).unwrap();

        let app = StoreApp::start(&settings).unwrap();
        assert!(!app.is_initialized());
        assert!(app.load_descriptors().is_empty());
    }
}
