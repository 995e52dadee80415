//! papermill: a document composition engine.
//!
//! Maps declarative JSON content models (slides, sections, sheets, page
//! blocks plus a named color palette) onto fully laid-out office files:
//! pptx, docx, xlsx and pdf. The transport shell hands a validated
//! request to [`DocumentService`], which resolves the palette and assets,
//! runs the matching composer and persists the bytes under a unique
//! retrievable filename.

mod config;
mod error;
mod service;

pub use config::ServiceConfig;
pub use error::GenerationError;
pub use service::DocumentService;

pub use papermill_assets::{AssetCategory, AssetStore, FilesystemAssetStore, InMemoryAssetStore};
pub use papermill_content::{
    DocumentRequest, PageDocumentRequest, PresentationRequest, SpreadsheetRequest,
    ValidationError,
};
pub use papermill_store::{FileStore, GeneratedFile, StoreError};
pub use papermill_style::{all as palettes, default_palette, resolve as resolve_palette, Palette};
pub use papermill_types::DocumentKind;
