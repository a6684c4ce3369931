// FileScout - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "FileScout";

/// Application identifier used for config directories.
pub const APP_ID: &str = "FileScout";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Search limits
// =============================================================================

/// Default cap on the number of matches collected by a single search.
///
/// The walk stops as soon as the cap is reached and the outcome is flagged
/// as truncated.  Guards against a volume-root search with a short term
/// filling memory with millions of rows.
pub const DEFAULT_MAX_RESULTS: usize = 50_000;

/// Minimum user-configurable result cap.
pub const MIN_MAX_RESULTS: usize = 100;

/// Maximum user-configurable result cap.
pub const ABSOLUTE_MAX_RESULTS: usize = 1_000_000;

/// A `SearchProgress::Progress` message is sent every this many visited
/// files.  Keeps channel traffic low on very large trees.
pub const PROGRESS_REPORT_INTERVAL: usize = 2_000;

/// Maximum number of search messages the UI processes per frame.
pub const MAX_SEARCH_MESSAGES_PER_FRAME: usize = 200;

/// Maximum number of terms kept in the in-memory search history.
pub const MAX_SEARCH_HISTORY: usize = 20;

// =============================================================================
// Preview limits
// =============================================================================

/// Bounding box (pixels) that image previews are shrunk to fit.
pub const PREVIEW_MAX_DIMENSION: u32 = 400;

/// Default maximum number of characters shown in a text preview.
pub const DEFAULT_MAX_PREVIEW_CHARS: usize = 100_000;

/// Minimum user-configurable preview text length.
pub const MIN_MAX_PREVIEW_CHARS: usize = 1_000;

/// Maximum user-configurable preview text length.
pub const ABSOLUTE_MAX_PREVIEW_CHARS: usize = 1_000_000;

/// Extensions (lower-case, no dot) previewed as raster images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

// =============================================================================
// Folder registry
// =============================================================================

/// Display name of the volume-root registry entry.
pub const SYSTEM_ROOT_NAME: &str = "System Root";

/// Volume root searched by the "System Root" entry.
#[cfg(target_os = "windows")]
pub const SYSTEM_ROOT_PATH: &str = "C:\\";

/// Volume root searched by the "System Root" entry.
#[cfg(not(target_os = "windows"))]
pub const SYSTEM_ROOT_PATH: &str = "/";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
