use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::ports::{PersistencePort, PortError, validate_key};

const NOTE_EXTENSION: &str = "txt";

/// [`PersistencePort`] keeping one file per key under a root directory.
///
/// The root is created on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PortError> {
        validate_key(key)?;
        Ok(self.root.join(key).with_extension(NOTE_EXTENSION))
    }

    /// Keys with a stored value, sorted.
    pub fn keys(&self) -> Result<Vec<String>, PortError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == NOTE_EXTENSION)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && validate_key(stem).is_ok()
            {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

impl PersistencePort for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no stored value at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, value)?;
        log::debug!("stored {} bytes at {}", value.len(), path.display());
        Ok(())
    }
}
