//! Utility modules for browser and display concerns.
//!
//! Provides:
//! - [`console`] - Browser console logging
//! - [`fetch_listing`] - Listing fetch with timeout
//! - [`format`] - Labels, sizes and timestamps for display

pub mod console;
mod fetch;
pub mod format;

pub use fetch::fetch_listing;
