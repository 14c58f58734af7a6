// Local input store.
// One file per day under the cache root, named by the zero-padded day key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Canonical width of a stored key: day "3" is stored as file "03".
const KEY_WIDTH: usize = 2;

/// Filesystem-backed store holding one input document per day.
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Open a store rooted at `root`, resolving it to an absolute path and
    /// creating the directory (with parents) if absent.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = std::path::absolute(root)?;
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "opened input store");
        Ok(Self { root })
    }

    /// Whether an input for `key` is present. Absence is not an error; any
    /// other filesystem failure is.
    pub fn exists(&self, key: &str) -> Result<bool> {
        match fs::metadata(self.entry_path(key)) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Full contents of the stored input for `key`.
    pub fn read(&self, key: &str) -> Result<String> {
        Ok(fs::read_to_string(self.entry_path(key))?)
    }

    /// Persist an input for `key`, overwriting any existing entry. Not
    /// atomic: a torn write only costs a re-fetch, since every entry is
    /// re-derivable from the origin.
    pub fn write(&self, key: &str, document: &str) -> Result<()> {
        Ok(fs::write(self.entry_path(key), document)?)
    }

    /// Resolved root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // Keys are left-padded to a fixed width so entries sort lexicographically.
    // A storage concern only: callers always use the un-padded key.
    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key:0>w$}", w = KEY_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = InputStore::open(temp_dir.path()).unwrap();

        store.write("3", "1000\n2000\n").unwrap();

        assert!(store.exists("3").unwrap());
        assert_eq!(store.read("3").unwrap(), "1000\n2000\n");
    }

    #[test]
    fn short_keys_are_zero_padded_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = InputStore::open(temp_dir.path()).unwrap();

        store.write("3", "padded").unwrap();

        assert!(temp_dir.path().join("03").is_file());
        assert_eq!(store.read("3").unwrap(), "padded");
    }

    #[test]
    fn wide_keys_are_stored_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let store = InputStore::open(temp_dir.path()).unwrap();

        store.write("12", "twelve").unwrap();

        assert!(temp_dir.path().join("12").is_file());
        assert_eq!(store.read("12").unwrap(), "twelve");
    }

    #[test]
    fn missing_key_exists_false() {
        let temp_dir = TempDir::new().unwrap();
        let store = InputStore::open(temp_dir.path()).unwrap();

        assert!(!store.exists("7").unwrap());
    }

    #[test]
    fn reading_missing_key_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = InputStore::open(temp_dir.path()).unwrap();

        assert!(store.read("7").is_err());
    }

    #[test]
    fn write_overwrites_existing_entry() {
        let temp_dir = TempDir::new().unwrap();
        let store = InputStore::open(temp_dir.path()).unwrap();

        store.write("5", "first").unwrap();
        store.write("5", "second").unwrap();

        assert_eq!(store.read("5").unwrap(), "second");
    }

    #[test]
    fn open_creates_nested_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("nested").join("inputs");

        let store = InputStore::open(&root).unwrap();

        assert!(root.is_dir());
        assert!(store.root().is_absolute());
    }
}
