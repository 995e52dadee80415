//! Shared value types for the papermill composition engine.

mod color;
mod geometry;
mod kind;

pub use color::Color;
pub use geometry::{Emu, Rect, EMU_PER_INCH, EMU_PER_POINT};
pub use kind::DocumentKind;
