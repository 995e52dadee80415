//! Palette resolution for the papermill composition engine.
//!
//! Every generated document draws its colors from one [`Palette`] of five
//! role-bound colors. Resolution never fails: an unknown or empty name maps
//! to the default palette.

mod palette;

pub use palette::{all, default_palette, resolve, Palette};
