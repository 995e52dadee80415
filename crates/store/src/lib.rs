//! Storage for generated files.
//!
//! Generated documents live in one flat directory keyed by generated
//! filename. The store hands out retrieval handles for the transport
//! shell and runs the retention sweep that deletes entries older than a
//! configured window. Request threads read concurrently; the sweep never
//! shares locks with them.

mod naming;
mod store;
mod sweeper;

pub use naming::generate_filename;
pub use store::{FileStore, GeneratedFile, StoreError};
pub use sweeper::spawn_retention_sweeper;
