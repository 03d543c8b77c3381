use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{SlotStore, StorageError};

/// One `<key>.json` file per slot inside a data directory.
///
/// Writes land in a temporary sibling first and are renamed over the target,
/// so a reader never sees a half-written collection.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Unavailable(format!(
                "invalid slot name '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStore for FileSlots {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let temp = path.with_extension("json.tmp");
        fs::write(&temp, value)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let slots = FileSlots::open(dir.path()).unwrap();

        assert!(slots.get("logs").unwrap().is_none());
        slots.set("logs", "[]").unwrap();
        assert_eq!(slots.get("logs").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("logs.json").exists());
        assert!(!dir.path().join("logs.json.tmp").exists());

        slots.remove("logs").unwrap();
        slots.remove("logs").unwrap();
        assert!(slots.get("logs").unwrap().is_none());
    }

    #[test]
    fn rejects_slot_names_that_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let slots = FileSlots::open(dir.path()).unwrap();
        assert!(slots.set("../outside", "x").is_err());
    }
}
