//! Asset registry and locator.
//!
//! Uploaded logos, images and templates live in an [`AssetStore`] keyed by
//! category plus logical name. Composers never read the store directly;
//! they go through [`locate`], which probes default extensions and treats
//! "nothing found" as an ordinary `None` — an absent asset means "skip this
//! visual element", never a failed document.

mod filesystem;
mod locator;
mod store;

pub use filesystem::FilesystemAssetStore;
pub use locator::locate;
pub use store::{AssetCategory, AssetError, AssetStore, InMemoryAssetStore, SharedAssetData};
