use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{validate_name, Error, OptionReader, OptionWriter};

/// An option store keeping one pretty-printed JSON file per option.
///
/// Option `blockplus_patterns` lives at `<root>/blockplus_patterns.json`.
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so readers never observe a half-written option.
pub struct JsonFileOptionStore {
    root: PathBuf,
}

impl JsonFileOptionStore {
    pub fn new(root: PathBuf) -> Result<JsonFileOptionStore, Error> {
        let attr = fs::metadata(&root).map_err(|error| Error::RootPathInvalid {
            path: root.clone(),
            error,
        })?;

        if !attr.is_dir() {
            return Err(Error::RootPathInvalid {
                path: root,
                error: io::Error::other("Root path must be a directory."),
            });
        }

        if attr.permissions().readonly() {
            return Err(Error::RootPathInvalid {
                path: root,
                error: io::Error::other("Root directory must be writable"),
            });
        }

        match root.canonicalize() {
            Ok(root) => Ok(JsonFileOptionStore { root }),
            Err(error) => Err(Error::RootPathInvalid { path: root, error }),
        }
    }

    /// Open `root`, creating the directory first if it does not exist.
    pub fn create(root: PathBuf) -> Result<JsonFileOptionStore, Error> {
        fs::create_dir_all(&root).map_err(|error| Error::RootPathInvalid {
            path: root.clone(),
            error,
        })?;
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn option_path(&self, name: &str) -> Result<PathBuf, Error> {
        validate_name(name)?;
        Ok(self.root.join(format!("{}.json", name)))
    }
}

impl OptionReader for JsonFileOptionStore {
    fn get_option(&mut self, name: &str) -> Result<Option<Value>, Error> {
        let file_path = self.option_path(name)?;
        log::debug!("Reading {}...", file_path.display());

        let contents = match fs::read_to_string(&file_path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(Error::Io {
                    path: file_path,
                    error,
                })
            }
        };

        let value = serde_json::from_str(&contents).map_err(|error| Error::Json {
            name: name.to_string(),
            error,
        })?;
        Ok(Some(value))
    }
}

impl OptionWriter for JsonFileOptionStore {
    fn update_option(&mut self, name: &str, value: Value) -> Result<(), Error> {
        let file_path = self.option_path(name)?;
        let temp_path = file_path.with_extension("json.tmp");
        log::debug!("Writing {}...", file_path.display());

        let serialized = serde_json::to_string_pretty(&value).map_err(|error| Error::Json {
            name: name.to_string(),
            error,
        })?;

        fs::write(&temp_path, serialized).map_err(|error| Error::Io {
            path: temp_path.clone(),
            error,
        })?;
        fs::rename(&temp_path, &file_path).map_err(|error| Error::Io {
            path: file_path,
            error,
        })
    }

    fn delete_option(&mut self, name: &str) -> Result<bool, Error> {
        let file_path = self.option_path(name)?;
        log::debug!("Deleting {}...", file_path.display());

        match fs::remove_file(&file_path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(Error::Io {
                path: file_path,
                error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileOptionStore::new(dir.path().to_path_buf()).unwrap();

        store
            .update_option("blockplus_patterns", json!({"a": {"id": "a"}}))
            .unwrap();
        assert!(dir.path().join("blockplus_patterns.json").exists());
        assert!(!dir.path().join("blockplus_patterns.json.tmp").exists());

        let value = store.get_option("blockplus_patterns").unwrap();
        assert_eq!(value, Some(json!({"a": {"id": "a"}})));
    }

    #[test]
    fn missing_option_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileOptionStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.get_option("blockplus_settings").unwrap().is_none());
        assert!(!store.delete_option("blockplus_settings").unwrap());
    }

    #[test]
    fn root_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain-file");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            JsonFileOptionStore::new(file),
            Err(Error::RootPathInvalid { .. })
        ));
    }

    #[test]
    fn create_makes_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("store");
        let store = JsonFileOptionStore::create(root.clone()).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.canonicalize().unwrap());
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let mut store = JsonFileOptionStore::new(dir.path().to_path_buf()).unwrap();
        assert!(matches!(
            store.get_option("broken"),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn rejects_names_that_escape_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileOptionStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.get_option("../outside").is_err());
    }
}
