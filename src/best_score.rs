//! Best-score persistence for the host binary.
//!
//! The engine only takes a best score at construction and reports it back; this
//! module is the file behind it, a small JSON document `{"best_score": n}`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct BestScoreFile {
    best_score: u32,
}

/// Where the best score is kept, if anywhere
#[derive(Debug, Clone, Default)]
pub struct BestScoreStore {
    path: Option<PathBuf>,
    saved: u32,
}

impl BestScoreStore {
    /// A store with no file behind it: loads 0, saves nothing
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            saved: 0,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the stored best
    ///
    /// A missing file is a first run and yields 0. A file that is not valid
    /// JSON is logged and treated the same way, so it gets overwritten on the
    /// next new best. Any other I/O failure is an error.
    pub fn load(&mut self) -> Result<u32> {
        let Some(path) = &self.path else {
            return Ok(0);
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no best score file yet");
                return Ok(0);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };

        let best = match serde_json::from_str::<BestScoreFile>(&text) {
            Ok(file) => file.best_score,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed best score file");
                0
            }
        };
        self.saved = best;
        Ok(best)
    }

    /// Write `best` if it beats what was last loaded or saved
    ///
    /// Returns whether the file was written.
    pub fn save_if_higher(&mut self, best: u32) -> Result<bool> {
        if best <= self.saved {
            return Ok(false);
        }
        let Some(path) = &self.path else {
            self.saved = best;
            return Ok(false);
        };

        let json = serde_json::to_string(&BestScoreFile { best_score: best })?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), best, "best score saved");
        self.saved = best;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "arcade-tetris-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_loads_zero() {
        let mut store = BestScoreStore::at(scratch("missing"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let path = scratch("roundtrip");
        let mut store = BestScoreStore::at(&path);
        assert_eq!(store.load().unwrap(), 0);
        assert!(store.save_if_higher(340).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"best_score":340}"#);

        let mut reopened = BestScoreStore::at(&path);
        assert_eq!(reopened.load().unwrap(), 340);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn lower_scores_are_not_written() {
        let path = scratch("lower");
        fs::write(&path, r#"{"best_score": 1200}"#).unwrap();
        let mut store = BestScoreStore::at(&path);
        assert_eq!(store.load().unwrap(), 1200);
        assert!(!store.save_if_higher(1200).unwrap());
        assert!(!store.save_if_higher(40).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"best_score": 1200}"#);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_loads_zero() {
        let path = scratch("malformed");
        fs::write(&path, "not json").unwrap();
        let mut store = BestScoreStore::at(&path);
        assert_eq!(store.load().unwrap(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn in_memory_store_never_writes() {
        let mut store = BestScoreStore::in_memory();
        assert_eq!(store.load().unwrap(), 0);
        assert!(!store.save_if_higher(100).unwrap());
        assert!(store.path().is_none());
    }
}
