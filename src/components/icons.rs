//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuFile as File,
        LuFileText as FileText, LuFolder as Folder, LuFolderOpen as FolderOpen,
        LuImage as FileImage, LuInfo as Info, LuRefreshCw as Refresh, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkText as FileText, BsFolder2Open as FolderOpen, BsFolderFill as Folder,
        BsInfoCircle as Info, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(CLOSE, Close);
themed_icon!(REFRESH, Refresh);
themed_icon!(INFO, Info);

/// Icon for a file, picked by extension.
pub fn file_icon(name: &str) -> Icon {
    match name.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
        Some("md" | "txt" | "log" | "rs" | "toml" | "json" | "cpp" | "h" | "py") => FILE_TEXT,
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg") => FILE_IMAGE,
        _ => FILE,
    }
}
