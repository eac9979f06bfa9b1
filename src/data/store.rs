use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::PERSISTENCE;
use crate::domain::Pair;

/// JSON-file persistence for the pair list. Every mutation rewrites the
/// whole list; the in-memory copy stays authoritative when I/O fails,
/// so failures are logged and otherwise swallowed.
#[derive(Debug, Clone)]
pub struct PairStore {
    path: PathBuf,
}

impl Default for PairStore {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}

impl PairStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PERSISTENCE.pairs.filename),
        }
    }

    /// The persisted list, or empty when the file is missing or unreadable.
    pub fn load(&self) -> Vec<Pair> {
        match self.try_load() {
            Ok(pairs) => pairs,
            Err(e) => {
                log::error!("Failed to load pair list from {:?}: {e:#}", self.path);
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Pair>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, pairs: &[Pair]) {
        if let Err(e) = self.try_save(pairs) {
            log::error!("Failed to save pair list to {:?}: {e:#}", self.path);
        }
    }

    fn try_save(&self, pairs: &[Pair]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(pairs)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the pairs file only. The eframe state file (theme, window
    /// geometry) is untouched.
    pub fn clear(&self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            log::error!("Failed to clear pair list at {:?}: {e}", self.path);
        }
    }

    /// On-disk size of the pair list, feeding the settings stats.
    pub fn bytes_used(&self) -> u64 {
        fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PairUpdate, WatchList};
    use tempfile::tempdir;

    const ZERO: &str = "0x0000000000000000000000000000000000000000";
    const ONE: &str = "0x1111111111111111111111111111111111111111";

    fn sample_pairs() -> Vec<Pair> {
        let mut list = WatchList::default();
        for (name, address) in [("First", ZERO), ("Second", ONE)] {
            let pair = list.validate_new(name, address).unwrap();
            list.apply(PairUpdate::Add(pair));
        }
        list.pairs().to_vec()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = PairStore::new(dir.path());
        assert!(store.load().is_empty());
        assert_eq!(store.bytes_used(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = PairStore::new(dir.path());
        let pairs = sample_pairs();
        store.save(&pairs);
        let loaded = store.load();
        assert_eq!(loaded, pairs);
        // Insertion order is display order.
        assert_eq!(loaded[0].name, "First");
        assert_eq!(loaded[1].name, "Second");
    }

    #[test]
    fn loading_flag_is_not_persisted() {
        let dir = tempdir().unwrap();
        let store = PairStore::new(dir.path());
        let mut pairs = sample_pairs();
        pairs[0].loading = true;
        store.save(&pairs);
        assert!(!store.load()[0].loading);
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let store = PairStore::new(dir.path());
        fs::write(dir.path().join(PERSISTENCE.pairs.filename), "not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn clear_removes_only_the_pairs_file() {
        let dir = tempdir().unwrap();
        let other = dir.path().join(PERSISTENCE.app.state_filename);
        fs::write(&other, "{}").unwrap();

        let store = PairStore::new(dir.path());
        store.save(&sample_pairs());
        assert!(store.bytes_used() > 0);

        store.clear();
        assert_eq!(store.bytes_used(), 0);
        assert!(store.load().is_empty());
        assert!(other.exists());
    }

    #[test]
    fn clear_on_missing_file_is_silent() {
        let dir = tempdir().unwrap();
        PairStore::new(dir.path()).clear();
    }
}
