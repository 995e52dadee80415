use crate::generate_filename;
use chrono::{DateTime, Utc};
use papermill_types::DocumentKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A retrievable handle to one generated document.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub filename: String,
    pub path: PathBuf,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

/// Flat directory of generated files with a retention window.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    retention: Duration,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P, retention: Duration) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, retention })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Persist generated bytes under a fresh unique filename.
    pub fn save(&self, kind: DocumentKind, bytes: &[u8]) -> Result<GeneratedFile, StoreError> {
        let filename = generate_filename(kind);
        let path = self.dir.join(&filename);
        std::fs::write(&path, bytes)?;
        log::debug!("stored {} ({} bytes)", filename, bytes.len());
        Ok(GeneratedFile {
            filename,
            path,
            size: bytes.len() as u64,
            created_at: Utc::now(),
        })
    }

    /// Look up a previously generated file for download.
    pub fn open(&self, filename: &str) -> Result<GeneratedFile, StoreError> {
        // Filenames are our own flat namespace; anything path-like is suspect.
        if filename.is_empty() || filename.contains(['/', '\\']) || filename.contains("..") {
            return Err(StoreError::InvalidFilename(filename.to_string()));
        }
        let path = self.dir.join(filename);
        let meta =
            std::fs::metadata(&path).map_err(|_| StoreError::NotFound(filename.to_string()))?;
        if !meta.is_file() {
            return Err(StoreError::NotFound(filename.to_string()));
        }
        Ok(GeneratedFile {
            filename: filename.to_string(),
            path,
            size: meta.len(),
            created_at: modified_time(&meta),
        })
    }

    /// All stored files, newest first.
    pub fn list(&self) -> Result<Vec<GeneratedFile>, StoreError> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            let Ok(filename) = entry.file_name().into_string() else {
                continue;
            };
            files.push(GeneratedFile {
                filename,
                path: entry.path(),
                size: meta.len(),
                created_at: modified_time(&meta),
            });
        }
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(files)
    }

    /// Delete files older than the retention window. Returns how many were
    /// removed. Files that vanish mid-sweep are ignored; an in-flight
    /// download racing a deletion is accepted as out of scope.
    pub fn sweep_expired(&self) -> Result<usize, StoreError> {
        let cutoff = SystemTime::now()
            .checked_sub(self.retention)
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let mut removed = 0;
        for entry in std::fs::read_dir(&self.dir)? {
            let Ok(entry) = entry else { continue };
            let Ok(meta) = entry.metadata() else { continue };
            if !meta.is_file() {
                continue;
            }
            let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            if modified < cutoff && std::fs::remove_file(entry.path()).is_ok() {
                removed += 1;
            }
        }
        if removed > 0 {
            log::info!("retention sweep removed {removed} expired file(s)");
        }
        Ok(removed)
    }
}

fn modified_time(meta: &std::fs::Metadata) -> DateTime<Utc> {
    meta.modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}
