//! Word-processor document (docx) composition: a flowing sequence of
//! styled blocks rather than placed shapes. Heading colors come from the
//! resolved palette via the styles part.

mod compose;
mod error;
mod model;
mod write;

pub use compose::DocComposer;
pub use error::ComposeError;
pub use model::{DocBlock, DocModel};
pub use write::write_docx;
