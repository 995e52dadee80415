//! Validated content models for document generation requests.
//!
//! Requests arrive as loosely shaped JSON from tool-calling clients. This
//! crate gives each output kind a closed struct with explicit optional
//! fields, validated once at the boundary and treated as immutable value
//! objects throughout composition. Absence of an optional field means
//! "omit this visual element", never an error.

mod common;
mod document;
mod error;
mod page;
mod presentation;
mod spreadsheet;

pub use common::{CellValue, StatBlock, TableData};
pub use document::{DocumentRequest, Section};
pub use error::ValidationError;
pub use page::{PageBlock, PageDocumentRequest};
pub use presentation::{PresentationRequest, SlideContent};
pub use spreadsheet::{ChartSpec, FormulaSpec, SheetContent, SpreadsheetRequest};
