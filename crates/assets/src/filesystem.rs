//! Filesystem-backed asset store.
//!
//! Assets live under `<base>/<category-dir>/<name>`. Individual file
//! writes are atomic enough for the append-mostly upload pattern; reads
//! happen concurrently from request threads without locking.

use crate::{AssetCategory, AssetError, AssetStore, SharedAssetData};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemAssetStore {
    base_path: PathBuf,
}

impl FilesystemAssetStore {
    /// Creates the store rooted at `base_path`, creating the directory
    /// tree on demand.
    pub fn new<P: AsRef<Path>>(base_path: P) -> std::io::Result<Self> {
        let base = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base)?;
        Ok(Self { base_path: base })
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves an asset name inside its category directory.
    ///
    /// Returns `None` for names that would escape the base directory.
    fn resolve_path_safe(&self, category: AssetCategory, name: &str) -> Option<PathBuf> {
        if name.is_empty() || Path::new(name).is_absolute() {
            return None;
        }
        for component in Path::new(name).components() {
            match component {
                std::path::Component::Normal(_) => {}
                // ".." or any non-plain component escapes the store
                _ => return None,
            }
        }
        Some(self.base_path.join(category.dir_name()).join(name))
    }
}

impl AssetStore for FilesystemAssetStore {
    fn get(&self, category: AssetCategory, name: &str) -> Option<SharedAssetData> {
        let path = self.resolve_path_safe(category, name)?;
        std::fs::read(&path).ok().map(Arc::new)
    }

    fn put(&self, category: AssetCategory, name: &str, data: Vec<u8>) -> Result<(), AssetError> {
        let path = self
            .resolve_path_safe(category, name)
            .ok_or_else(|| AssetError::InvalidName(name.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, data).map_err(|e| AssetError::StoreFailed {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    fn list(&self, category: AssetCategory) -> Vec<String> {
        let dir = self.base_path.join(category.dir_name());
        let Ok(entries) = std::fs::read_dir(&dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort_unstable();
        names
    }

    fn name(&self) -> &'static str {
        "FilesystemAssetStore"
    }
}
