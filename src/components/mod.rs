//! UI components built with Leptos.
//!
//! - [`explorer`] - File tree, open-file tabs and file viewer
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Status bar with listing state and notices

pub mod explorer;
pub mod icons;
pub mod status;

pub use explorer::Explorer;
