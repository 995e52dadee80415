use papermill_types::DocumentKind;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for asset registry operations.
#[derive(Error, Debug, Clone)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("failed to store asset '{name}': {message}")]
    StoreFailed { name: String, message: String },

    #[error("invalid asset name: {0}")]
    InvalidName(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::Io(err.to_string())
    }
}

/// Shared asset data (reference-counted bytes).
pub type SharedAssetData = Arc<Vec<u8>>;

/// The namespace an asset lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Logo,
    Image,
    Template(DocumentKind),
}

impl AssetCategory {
    /// Subdirectory / key prefix for this category.
    pub fn dir_name(self) -> String {
        match self {
            AssetCategory::Logo => "logos".to_string(),
            AssetCategory::Image => "images".to_string(),
            AssetCategory::Template(kind) => format!("templates/{}", kind.extension()),
        }
    }

    /// Extensions probed, in order, when a logical name carries none.
    pub fn default_extensions(self) -> &'static [&'static str] {
        match self {
            AssetCategory::Logo | AssetCategory::Image => &["png", "jpg", "jpeg", "gif"],
            AssetCategory::Template(DocumentKind::Presentation) => &["pptx"],
            AssetCategory::Template(DocumentKind::Document) => &["docx"],
            AssetCategory::Template(DocumentKind::Spreadsheet) => &["xlsx"],
            AssetCategory::Template(DocumentKind::PageDocument) => &["pdf"],
        }
    }
}

/// A registry of uploaded assets, readable concurrently from request
/// threads. Implementations must tolerate names that do not exist.
pub trait AssetStore: Send + Sync + Debug {
    /// Fetch an asset by exact name within a category.
    fn get(&self, category: AssetCategory, name: &str) -> Option<SharedAssetData>;

    /// Store (or replace) an asset.
    fn put(&self, category: AssetCategory, name: &str, data: Vec<u8>) -> Result<(), AssetError>;

    /// List the logical names stored under a category.
    fn list(&self, category: AssetCategory) -> Vec<String>;

    /// Returns a human-readable name for this store (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory asset store, pre-populated before use. Works anywhere and
/// backs most of the test suite.
#[derive(Debug, Default)]
pub struct InMemoryAssetStore {
    entries: RwLock<HashMap<String, SharedAssetData>>,
}

impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(category: AssetCategory, name: &str) -> String {
        format!("{}/{}", category.dir_name(), name)
    }
}

impl AssetStore for InMemoryAssetStore {
    fn get(&self, category: AssetCategory, name: &str) -> Option<SharedAssetData> {
        let entries = self.entries.read().ok()?;
        entries.get(&Self::key(category, name)).cloned()
    }

    fn put(&self, category: AssetCategory, name: &str, data: Vec<u8>) -> Result<(), AssetError> {
        if name.trim().is_empty() {
            return Err(AssetError::InvalidName(name.to_string()));
        }
        let mut entries = self.entries.write().map_err(|_| AssetError::StoreFailed {
            name: name.to_string(),
            message: "asset store lock poisoned".to_string(),
        })?;
        entries.insert(Self::key(category, name), Arc::new(data));
        Ok(())
    }

    fn list(&self, category: AssetCategory) -> Vec<String> {
        let prefix = format!("{}/", category.dir_name());
        let Ok(entries) = self.entries.read() else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .keys()
            .filter_map(|k| k.strip_prefix(&prefix))
            .map(str::to_string)
            .collect();
        names.sort_unstable();
        names
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetStore"
    }
}
