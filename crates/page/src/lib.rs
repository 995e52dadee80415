//! Paged (PDF) document composition: a linear flow of typed blocks laid
//! out top-down with automatic page breaks, serialized through `lopdf`.

mod compose;
mod error;
pub mod layout;
mod model;
mod pdf;
mod template;
mod text;

pub use compose::PageComposer;
pub use error::ComposeError;
pub use layout::{BlockKind, PageSize};
pub use model::{PageElement, PdfModel, PdfPage};
pub use pdf::write_pdf;
pub use template::{apply_template, prepend_template};
