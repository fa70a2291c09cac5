//! Atomic TOML file operations.
//!
//! Writes go to a hidden temporary file next to the target, are synced, then
//! renamed over it. Read-modify-write cycles hold an exclusive lock file.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use commons_core::CommonsError;
use serde::{Serialize, de::DeserializeOwned};

/// Errors that can occur during atomic TOML operations.
#[derive(Debug)]
pub enum AtomicTomlError {
    /// File I/O error.
    Io(std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
    /// TOML serialization error.
    Serialize(toml::ser::Error),
    /// File locking error.
    Lock(String),
}

impl std::fmt::Display for AtomicTomlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicTomlError::Io(e) => write!(f, "I/O error: {}", e),
            AtomicTomlError::Parse(e) => write!(f, "TOML parse error: {}", e),
            AtomicTomlError::Serialize(e) => write!(f, "TOML serialization error: {}", e),
            AtomicTomlError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicTomlError {}

impl From<std::io::Error> for AtomicTomlError {
    fn from(e: std::io::Error) -> Self {
        AtomicTomlError::Io(e)
    }
}

impl From<toml::de::Error> for AtomicTomlError {
    fn from(e: toml::de::Error) -> Self {
        AtomicTomlError::Parse(e)
    }
}

impl From<toml::ser::Error> for AtomicTomlError {
    fn from(e: toml::ser::Error) -> Self {
        AtomicTomlError::Serialize(e)
    }
}

impl From<AtomicTomlError> for CommonsError {
    fn from(e: AtomicTomlError) -> Self {
        match e {
            AtomicTomlError::Io(err) => err.into(),
            AtomicTomlError::Parse(err) => err.into(),
            AtomicTomlError::Serialize(err) => err.into(),
            AtomicTomlError::Lock(message) => CommonsError::data_access(message),
        }
    }
}

/// A TOML document on disk holding one `T`.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for AtomicTomlFile<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<T> std::fmt::Debug for AtomicTomlFile<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtomicTomlFile")
            .field("path", &self.path)
            .finish()
    }
}

impl<T> AtomicTomlFile<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Reads and parses the document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is blank
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(toml::from_str(&content)?))
    }

    /// Writes the document through a synced temporary file and a rename.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(data)?;
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Loads (or starts from `default_value`), applies `f`, and saves, all
    /// under an exclusive lock. Returns whatever `f` returns.
    pub fn update<R, F>(&self, default_value: T, f: F) -> Result<R, AtomicTomlError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let _lock = FileLock::acquire(&self.path)?;
        let mut data = self.load()?.unwrap_or(default_value);
        let result = f(&mut data);
        self.save(&data)?;
        Ok(result)
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicTomlError> {
        let invalid = |message: &str| {
            AtomicTomlError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                message.to_string(),
            ))
        };
        let parent = self
            .path
            .parent()
            .ok_or_else(|| invalid("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| invalid("Path has no file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on `<path>.lock`, released on drop.
///
/// The lock file itself is left in place: unlinking it would let a waiter
/// that already opened the old inode run alongside a newcomer.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicTomlError> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| AtomicTomlError::Lock(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        label: String,
        count: u32,
    }

    fn counter(count: u32) -> Counter {
        Counter {
            label: "responses".to_string(),
            count,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("nested").join("c.toml"));

        file.save(&counter(3)).unwrap();
        assert_eq!(file.load().unwrap(), Some(counter(3)));
        assert!(!temp_dir.path().join("nested").join(".c.toml.tmp").exists());
    }

    #[test]
    fn test_missing_and_blank_files_load_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.toml");
        let file = AtomicTomlFile::<Counter>::new(path.clone());
        assert_eq!(file.load().unwrap(), None);

        fs::write(&path, "  \n").unwrap();
        assert_eq!(file.load().unwrap(), None);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.toml");
        let file = AtomicTomlFile::<Counter>::new(path.clone());

        let after = file
            .update(counter(0), |c| {
                c.count += 10;
                c.count
            })
            .unwrap();
        assert_eq!(after, 10);
        let after = file.update(counter(0), |c| {
            c.count += 5;
            c.count
        });
        assert_eq!(after.unwrap(), 15);
        assert_eq!(file.load().unwrap().unwrap().count, 15);
    }

    #[test]
    fn test_parse_error_converts_to_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.toml");
        fs::write(&path, "label = ").unwrap();

        let err: CommonsError = AtomicTomlFile::<Counter>::new(path).load().unwrap_err().into();
        assert!(matches!(err, CommonsError::Serialization { ref format, .. } if format == "TOML"));
    }
}
