// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MonthStore, StorageError};
use rota_domain::{CycleStateRecord, MonthKey, MonthRecord};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const CYCLE_STATE_FILE: &str = "last_cycle_state.json";

/// [`MonthStore`] backed by a directory of JSON documents.
///
/// Each month is `YYYY-MM.json`; the rotation snapshot is
/// `last_cycle_state.json`. Writes go through a temporary file and a rename
/// so a crash never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|err| {
            StorageError::InitializationError(format!(
                "Cannot create data directory {}: {err}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    /// Returns the directory the store reads and writes.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn month_path(&self, key: MonthKey) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
        let mut temp = path.as_os_str().to_owned();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);
        fs::write(&temp, contents)?;
        fs::rename(&temp, path)?;
        Ok(())
    }

    fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Parses a month key out of a `YYYY-MM.json` file name.
fn month_key_from_file_name(name: &str) -> Option<MonthKey> {
    let stem = name.strip_suffix(".json")?;
    let (year, month) = stem.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: u16 = year.parse().ok()?;
    let month: u8 = month.parse().ok()?;
    MonthKey::new(year, month).ok()
}

impl MonthStore for JsonFileStore {
    fn load_month(&self, key: MonthKey) -> Result<Option<MonthRecord>, StorageError> {
        let Some(contents) = Self::read_optional(&self.month_path(key))? else {
            return Ok(None);
        };
        let record: MonthRecord = serde_json::from_str(&contents)?;
        Ok(Some(record))
    }

    fn save_month(&self, record: &MonthRecord) -> Result<(), StorageError> {
        let path = self.month_path(record.key);
        debug!(month = %record.key, path = %path.display(), "saving month record");
        let contents = serde_json::to_vec_pretty(record)?;
        Self::write_atomically(&path, &contents)
    }

    fn list_months(&self) -> Result<Vec<MonthKey>, StorageError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str()
                && let Some(key) = month_key_from_file_name(name)
            {
                keys.push(key);
            }
        }
        keys.sort_unstable();
        Ok(keys)
    }

    fn load_cycle_state(&self) -> Result<Option<CycleStateRecord>, StorageError> {
        let Some(contents) = Self::read_optional(&self.root.join(CYCLE_STATE_FILE))? else {
            return Ok(None);
        };
        let record: CycleStateRecord = serde_json::from_str(&contents)?;
        Ok(Some(record))
    }

    fn save_cycle_state(&self, record: &CycleStateRecord) -> Result<(), StorageError> {
        let path = self.root.join(CYCLE_STATE_FILE);
        debug!(derived_from = %record.derived_from, "saving cycle-state snapshot");
        let contents = serde_json::to_vec_pretty(record)?;
        Self::write_atomically(&path, &contents)
    }
}
