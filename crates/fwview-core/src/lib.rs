//! Core logic for the file-watch explorer.
//!
//! Target-independent; the browser front end drives it from event handlers.
//!
//! - [`decode_listing`] turns the backend document into a [`FileCatalog`]
//! - [`TreeBuilder`] builds the display [`FileTree`] from a catalog
//! - [`Session`] tracks open files and the active one
//! - [`RefreshGate`] orders overlapping listing refreshes

mod builder;
pub mod error;
mod listing;
pub mod models;
mod refresh;
mod session;

pub use builder::{SiblingOrder, TreeBuilder};
pub use error::{FetchError, MalformedReason, PayloadError, SessionError, TreeError};
pub use listing::{Listing, UnavailableNode, decode_listing};
pub use models::{FileCatalog, FileEntry, FileTree, KeyCatalog, NodeKind, Timestamp, TreeNode};
pub use refresh::{RefreshGate, RefreshOrdering, RefreshTicket};
pub use session::{Cycle, Session};
