use fs2::FileExt;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PersistentStore, StoreError};

type Document = BTreeMap<String, String>;

/// Store backed by a single JSON object file (`{"<key>": "<value>", ...}`).
///
/// Every access holds an advisory lock on a sibling `.lock` file, and writes
/// replace the document atomically through a temporary file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/ticklist/store.json`, or the current directory when the
    /// platform has no data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("ticklist").join("store.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self, exclusive: bool) -> Result<File, StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let lock_path = sibling(&self.path, ".lock");
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| StoreError::Lock {
                path: lock_path.clone(),
                source,
            })?;

        let locked = if exclusive {
            file.lock_exclusive()
        } else {
            file.lock_shared()
        };
        locked.map_err(|source| StoreError::Lock {
            path: lock_path,
            source,
        })?;
        Ok(file)
    }

    fn read_document(&self) -> Result<Document, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Document::new());
        }

        match serde_json::from_str(&content) {
            Ok(document) => Ok(document),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Store document is corrupt, treating it as empty"
                );
                Ok(Document::new())
            }
        }
    }

    fn write_document(&self, document: &Document) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(document).map_err(|source| StoreError::Encode {
                path: self.path.clone(),
                source,
            })?;

        let tmp_path = sibling(&self.path, ".tmp");
        fs::write(&tmp_path, content).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PersistentStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _lock = self.lock(false)?;
        let mut document = self.read_document()?;
        Ok(document.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _lock = self.lock(true)?;
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document)?;
        tracing::trace!(path = %self.path.display(), key, "Store entry written");
        Ok(())
    }
}

/// `path` with `suffix` appended to its file name.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("store"));
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_appends_to_file_name() {
        let path = Path::new("/tmp/ticklist/store.json");
        assert_eq!(
            sibling(path, ".lock"),
            PathBuf::from("/tmp/ticklist/store.json.lock")
        );
    }
}
