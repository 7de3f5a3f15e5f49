//! Data models for the explorer core.
//!
//! - [`FileEntry`], [`FileCatalog`] - Flat listing as received from the backend
//! - [`KeyCatalog`] - Membership check used to validate session requests
//! - [`Timestamp`] - File modification time
//! - [`FileTree`], [`TreeNode`], [`NodeKind`] - Display tree built from a catalog

mod catalog;
mod timestamp;
mod tree;

pub use catalog::{FileCatalog, FileEntry, KeyCatalog};
pub use timestamp::Timestamp;
pub use tree::{FileTree, NodeKind, TreeNode};
