//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`TreeView`] - Navigable file tree built from the listing
//! - [`TabStrip`] - Open files, with the active one highlighted
//! - [`FileViewer`] - Details of the active file

#[allow(clippy::module_inception)]
mod explorer;
mod header;
mod tabs;
mod tree_view;
mod viewer;

pub use explorer::Explorer;
pub use header::Header;
pub use tabs::TabStrip;
pub use tree_view::TreeView;
pub use viewer::FileViewer;
