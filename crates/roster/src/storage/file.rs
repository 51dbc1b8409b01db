use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Repository;
use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::student::Student;

/// File-based storage implementation
///
/// The whole collection lives in a single JSON array. Saves go through a
/// sibling temporary file that is renamed over the target.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    pretty: bool,
}

impl FileStorage {
    /// Create a new file storage backed by the JSON file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Create a file storage from configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_path).with_pretty(config.pretty)
    }

    /// Toggle pretty-printed output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the backing JSON file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the path of the temporary file used while saving
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("students.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Repository for FileStorage {
    fn get_all(&self) -> Result<Vec<Student>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let students: Vec<Student> = serde_json::from_str(&content)?;
        debug!("Loaded {} students from {}", students.len(), self.path.display());
        Ok(students)
    }

    fn save_all(&self, students: &[Student]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let json = if self.pretty {
            serde_json::to_vec_pretty(students)?
        } else {
            serde_json::to_vec(students)?
        };

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| StorageError::io(&temp_path, e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::io(&self.path, e));
        }

        info!("Saved {} students to {}", students.len(), self.path.display());
        Ok(())
    }
}
