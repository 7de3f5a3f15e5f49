//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use fwview_core::{RefreshOrdering, SiblingOrder};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "fwview";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Listing endpoint, relative to the page origin.
pub const FILES_ENDPOINT: &str = "/v1.0/files";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Which response wins when refreshes overlap.
pub const REFRESH_ORDERING: RefreshOrdering = RefreshOrdering::LatestCompleted;

// =============================================================================
// Tree Configuration
// =============================================================================

/// Hierarchy delimiter in listing paths.
pub const PATH_DELIMITER: char = '/';

/// Sibling ranking used when the listing carries no ranks of its own.
pub fn default_sibling_order() -> SiblingOrder {
    SiblingOrder::Insertion
}

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a transient notice stays visible, in milliseconds.
pub const NOTICE_DURATION_MS: u32 = 3000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
