use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::RiddleError;

pub const RIDDLES_FILE: &str = "riddles.json";

const NO_RIDDLE: &str = "No riddle available.";
const NO_SOLUTION: &str = "No solution available.";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RiddleRecord {
    pub riddle: String,
    pub solution: String,
}

impl RiddleRecord {
    pub fn new(riddle: impl Into<String>, solution: impl Into<String>) -> Self {
        RiddleRecord {
            riddle: riddle.into(),
            solution: solution.into(),
        }
    }

    /// Record handed out when no riddles could be loaded.
    pub fn unavailable() -> Self {
        Self::new(NO_RIDDLE, NO_SOLUTION)
    }
}

/// In-memory riddle collection backed by a JSON file.
///
/// Loading never fails: any problem with the file is logged and leaves the
/// collection empty, in which case [`RiddleStore::pick_random`] hands out
/// [`RiddleRecord::unavailable`].
#[derive(Debug)]
pub struct RiddleStore {
    path: PathBuf,
    riddles: RwLock<Vec<RiddleRecord>>,
}

impl RiddleStore {
    /// Creates an empty store reading from `<root_dir>/riddles.json`.
    pub fn new(root_dir: impl AsRef<Path>) -> Self {
        Self::from_file(root_dir.as_ref().join(RIDDLES_FILE))
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        RiddleStore {
            path: path.into(),
            riddles: RwLock::new(Vec::new()),
        }
    }

    pub fn with_riddles(riddles: Vec<RiddleRecord>) -> Self {
        RiddleStore {
            path: PathBuf::new(),
            riddles: RwLock::new(riddles),
        }
    }

    pub fn load(&self) {
        log::info!("Attempting to load riddles from: {}", self.path.display());

        let riddles = match read_riddles(&self.path) {
            Ok(riddles) => {
                log::info!("{} riddles successfully loaded.", riddles.len());
                riddles
            }
            Err(RiddleError::Missing(path)) => {
                log::warn!("{path} does not exist in the expected location!");
                Vec::new()
            }
            Err(RiddleError::Empty) => {
                log::warn!("{} loaded but contains no riddles.", RIDDLES_FILE);
                Vec::new()
            }
            Err(e) => {
                log::error!("Error loading {}: {e}", RIDDLES_FILE);
                Vec::new()
            }
        };

        *self.riddles.write().unwrap_or_else(|e| e.into_inner()) = riddles;
    }

    // Reload from disk when a previous load left the collection empty.
    pub fn ensure_loaded(&self) {
        log::info!("Number of riddles available: {}", self.len());
        if self.is_empty() {
            log::warn!("Riddles list is empty, reloading...");
            self.load();
            log::info!("After reload: {} riddles available.", self.len());
        }
    }

    pub fn pick_random(&self) -> RiddleRecord {
        self.riddles
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(RiddleRecord::unavailable)
    }

    pub fn len(&self) -> usize {
        self.riddles.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn read_riddles(path: &Path) -> Result<Vec<RiddleRecord>, RiddleError> {
    if !path.exists() {
        return Err(RiddleError::Missing(path.display().to_string()));
    }
    let data = fs::read_to_string(path)?;
    let riddles: Vec<RiddleRecord> = serde_json::from_str(&data)?;
    if riddles.is_empty() {
        return Err(RiddleError::Empty);
    }
    Ok(riddles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_riddles_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_riddles(&dir.path().join(RIDDLES_FILE));
        assert!(matches!(result, Err(RiddleError::Missing(_))));
    }

    #[test]
    fn read_riddles_rejects_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RIDDLES_FILE);
        fs::write(&path, "[]").unwrap();
        assert!(matches!(read_riddles(&path), Err(RiddleError::Empty)));
    }

    #[test]
    fn read_riddles_rejects_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RIDDLES_FILE);
        fs::write(&path, r#"[{"riddle": "only half"}]"#).unwrap();
        assert!(matches!(
            read_riddles(&path),
            Err(RiddleError::Serialization(_))
        ));
    }
}
