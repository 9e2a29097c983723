use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::format::RosterFile;
use crate::roster::Roster;

/// Persistence boundary for the roster.
///
/// The planner treats the store as a plain load/save collaborator; store
/// failures surface unchanged and retry policy belongs to the caller.
pub trait RosterStore {
    fn load(&self) -> Result<Roster, StoreError>;
    fn save(&self, roster: &Roster) -> Result<(), StoreError>;
}

/// File-backed store keeping the whole roster in one JSON document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the roster, or start an empty one when no file exists yet.
    pub fn load_or_default(&self) -> Result<Roster, StoreError> {
        match self.load() {
            Ok(roster) => Ok(roster),
            Err(StoreError::FileNotFound { .. }) => Ok(Roster::default()),
            Err(e) => Err(e),
        }
    }
}

impl RosterStore for JsonFileStore {
    fn load(&self) -> Result<Roster, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::FileNotFound { path: self.path.display().to_string() });
        }

        let mut file = File::open(&self.path)?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;

        let parsed: RosterFile = serde_json::from_str(&text)?;
        if parsed.schema_version != crate::SCHEMA_VERSION {
            return Err(StoreError::VersionMismatch {
                found: parsed.schema_version,
                expected: crate::SCHEMA_VERSION,
            });
        }

        let roster = parsed.into_roster();
        log::info!("Loaded {} players from {:?}", roster.players().len(), self.path);
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(&RosterFile::from_roster(roster))?;

        // Atomic save: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(data.as_bytes())?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, &self.path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_reference;
    use crate::models::Player;

    fn sample_roster() -> Roster {
        let reference = default_reference();
        Roster::from_players(vec![
            Player::with_main_team(1, "Ben Ward", "PL", 14, &reference.default_status),
            Player::with_main_team(2, "Aaron Hill", "PB", 9, &reference.default_status),
        ])
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("roster.json"));

        let roster = sample_roster();
        store.save(&roster).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.players(), roster.players());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nothing.json"));
        assert!(matches!(store.load(), Err(StoreError::FileNotFound { .. })));
        assert!(store.load_or_default().unwrap().players().is_empty());
    }

    #[test]
    fn version_mismatch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(
            &path,
            r#"{"schema_version": 99, "saved_at": "2026-01-01T00:00:00Z", "players": []}"#,
        )
        .unwrap();

        let store = JsonFileStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::VersionMismatch { found: 99, .. })));
    }

    #[test]
    fn ids_continue_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("roster.json"));
        store.save(&sample_roster()).unwrap();

        let mut loaded = store.load().unwrap();
        let reference = default_reference();
        let id = loaded
            .create_player(
                crate::roster::NewPlayer::new("Chris Young", "PC"),
                reference,
            )
            .unwrap()
            .id;
        assert_eq!(id, 3);
    }
}
