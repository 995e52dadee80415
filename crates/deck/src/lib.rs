//! Presentation (pptx) composition: turns a validated slide request plus
//! a resolved palette and assets into a placed shape model, then
//! serializes it as an OOXML package.

mod compose;
mod error;
pub mod layout;
mod model;
mod write;

pub use compose::DeckComposer;
pub use error::ComposeError;
pub use layout::SlideLayout;
pub use model::{Align, Deck, Para, Shape, Slide};
pub use write::write_pptx;
