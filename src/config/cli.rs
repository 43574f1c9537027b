use crate::core::Storage;
use crate::utils::error::{GenError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage; relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        fs::read_to_string(&full_path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => GenError::TemplateNotFound { path: full_path },
            _ => GenError::ReadError {
                path: full_path,
                source,
            },
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            self.create_dir_all(parent)?;
        }

        fs::write(&full_path, data).map_err(|source| GenError::WriteError {
            path: full_path,
            source,
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let full_path = self.resolve(path);
        fs::create_dir_all(&full_path).map_err(|source| GenError::CreateDirError {
            path: full_path,
            source,
        })
    }
}
