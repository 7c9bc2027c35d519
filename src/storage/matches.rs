//! Match record files.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{StorageConfig, StorageError};
use crate::models::{MatchId, MatchRecord};

/// Read a match record from any JSON file.
pub fn read_match_file(path: &Path) -> Result<MatchRecord, StorageError> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.display().to_string()));
    }

    let reader = BufReader::new(File::open(path)?);
    let record: MatchRecord = serde_json::from_reader(reader)?;
    debug!(
        "Read match {} ({} participants) from {:?}",
        record.match_id(),
        record.info.participants.len(),
        path
    );
    Ok(record)
}

/// Read-only access to stored match records.
#[derive(Debug, Clone)]
pub struct MatchStore {
    config: StorageConfig,
}

impl MatchStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Path of the file holding `match_id`.
    pub fn path_for(&self, match_id: &MatchId) -> Result<PathBuf, StorageError> {
        if !match_id.is_path_safe() {
            return Err(StorageError::InvalidMatchId(match_id.to_string()));
        }
        Ok(self
            .config
            .matches_dir()
            .join(format!("{}.json", match_id.as_str())))
    }

    /// Load one match record.
    pub fn load(&self, match_id: &MatchId) -> Result<MatchRecord, StorageError> {
        let path = self.path_for(match_id)?;
        if !path.exists() {
            return Err(StorageError::NotFound(match_id.to_string()));
        }
        read_match_file(&path)
    }

    /// IDs of every stored match, sorted. Empty if the directory is missing.
    pub fn list(&self) -> Result<Vec<MatchId>, StorageError> {
        let dir = self.config.matches_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => ids.push(MatchId::from(stem)),
                None => warn!("Skipping non-UTF-8 file name: {:?}", path),
            }
        }
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(ids)
    }

    /// Load every stored match, skipping files that fail to parse.
    pub fn load_all(&self) -> Result<Vec<MatchRecord>, StorageError> {
        let mut records = Vec::new();
        for id in self.list()? {
            match self.load(&id) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping match {}: {}", id, e),
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MATCH_JSON: &str = r#"{
        "metadata": { "matchId": "NA1_7" },
        "info": {
            "gameDuration": 1620,
            "gameCreation": 1700000000000,
            "participants": [ { "puuid": "a", "championName": "Garen" } ]
        }
    }"#;

    fn store_with(temp_dir: &TempDir, files: &[(&str, &str)]) -> MatchStore {
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        fs::create_dir_all(config.matches_dir()).unwrap();
        for (name, body) in files {
            fs::write(config.matches_dir().join(name), body).unwrap();
        }
        MatchStore::new(config)
    }

    #[test]
    fn test_load_match() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with(&temp_dir, &[("NA1_7.json", MATCH_JSON)]);

        let record = store.load(&MatchId::from("NA1_7")).unwrap();
        assert_eq!(record.match_id().as_str(), "NA1_7");
        assert_eq!(record.info.game_duration, 1620);
        assert_eq!(record.info.participants[0].champion_name, "Garen");
    }

    #[test]
    fn test_load_missing_match() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with(&temp_dir, &[]);

        let err = store.load(&MatchId::from("NA1_404")).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_match() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with(&temp_dir, &[("bad.json", "{ not json")]);

        let err = store.load(&MatchId::from("bad")).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn test_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with(&temp_dir, &[]);

        let err = store.load(&MatchId::from("../secrets")).unwrap_err();
        assert!(matches!(err, StorageError::InvalidMatchId(_)));
    }

    #[test]
    fn test_list_and_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with(
            &temp_dir,
            &[
                ("NA1_7.json", MATCH_JSON),
                ("NA1_3.json", MATCH_JSON),
                ("broken.json", "[]"),
                ("notes.txt", "ignore me"),
            ],
        );

        let ids: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["NA1_3", "NA1_7", "broken"]);

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_list_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = MatchStore::new(StorageConfig::new(temp_dir.path().join("nope")));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_read_match_file_missing() {
        let err = read_match_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }
}
