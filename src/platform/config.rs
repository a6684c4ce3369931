// FileScout - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance, and for the well-known user folders that
// seed the folder registry.

use crate::util::constants;
use crate::util::error::{ConfigError, FileScoutError};
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

/// Resolved platform paths for FileScout configuration and user folders.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/filescout/ or %APPDATA%\FileScout\config\)
    pub config_dir: PathBuf,

    /// The user's home directory.
    pub home_dir: PathBuf,

    /// Well-known user folders, `None` when the platform does not report one.
    pub desktop_dir: Option<PathBuf>,
    pub document_dir: Option<PathBuf>,
    pub picture_dir: Option<PathBuf>,
    pub video_dir: Option<PathBuf>,
    pub audio_dir: Option<PathBuf>,

    /// Fallbacks taken during resolution. Resolution runs before logging is
    /// initialised, so the caller reports these.
    pub warnings: Vec<String>,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined, recording a warning in `warnings`.
    pub fn resolve() -> Self {
        let mut warnings = Vec::new();

        let config_dir = match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
            None => fallback_dir("configuration", &mut warnings),
        };

        let user_dirs = UserDirs::new();
        let pick = |f: fn(&UserDirs) -> Option<&Path>| {
            user_dirs.as_ref().and_then(f).map(Path::to_path_buf)
        };
        let home_dir = match user_dirs.as_ref() {
            Some(u) => u.home_dir().to_path_buf(),
            None => fallback_dir("home", &mut warnings),
        };

        Self {
            config_dir,
            home_dir,
            desktop_dir: pick(UserDirs::desktop_dir),
            document_dir: pick(UserDirs::document_dir),
            picture_dir: pick(UserDirs::picture_dir),
            video_dir: pick(UserDirs::video_dir),
            audio_dir: pick(UserDirs::audio_dir),
            warnings,
        }
    }
}

/// Current directory, with a warning naming the directory it stands in for.
fn fallback_dir(what: &str, warnings: &mut Vec<String>) -> PathBuf {
    warnings.push(format!(
        "Could not determine the {what} directory; using the current directory."
    ));
    PathBuf::from(".")
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[search]` section.
    pub search: SearchSection,
    /// `[preview]` section.
    pub preview: PreviewSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[[folders]]` array of extra registry entries.
    pub folders: Vec<FolderEntry>,
}

/// `[search]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Maximum matches collected per search.
    pub max_results: Option<usize>,
}

/// `[preview]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PreviewSection {
    /// Maximum characters shown in a text preview.
    pub max_text_chars: Option<usize>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// One `[[folders]]` entry.
#[derive(Debug, serde::Deserialize)]
pub struct FolderEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum matches collected per search.
    pub max_results: usize,
    /// Maximum characters shown in a text preview.
    pub max_preview_chars: usize,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Extra folder registry entries, in file order.
    pub extra_folders: Vec<(String, PathBuf)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_results: constants::DEFAULT_MAX_RESULTS,
            max_preview_chars: constants::DEFAULT_MAX_PREVIEW_CHARS,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            extra_folders: Vec::new(),
        }
    }
}

/// Load and validate `config.toml` from `config_dir`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults and a warning;
/// the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = FileScoutError::from(ConfigError::Io {
                path: config_path,
                source,
            });
            tracing::warn!(error = %err, "Using default configuration");
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            validate(raw)
        }
        Err(source) => {
            let err = FileScoutError::from(ConfigError::TomlParse {
                path: config_path,
                source,
            });
            tracing::warn!(error = %err, "Using default configuration");
            (AppConfig::default(), vec![format!("{err}. Using defaults.")])
        }
    }
}

/// Validate each field against named constants, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    let mut out_of_range = |field: &str, value: String, expected: String, default: String| {
        let err = ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value,
            expected,
        };
        warnings.push(format!("{err}. Using default ({default})."));
    };

    if let Some(max) = raw.search.max_results {
        if (constants::MIN_MAX_RESULTS..=constants::ABSOLUTE_MAX_RESULTS).contains(&max) {
            config.max_results = max;
        } else {
            out_of_range(
                "search.max_results",
                max.to_string(),
                format!(
                    "{}-{}",
                    constants::MIN_MAX_RESULTS,
                    constants::ABSOLUTE_MAX_RESULTS
                ),
                constants::DEFAULT_MAX_RESULTS.to_string(),
            );
        }
    }

    if let Some(chars) = raw.preview.max_text_chars {
        if (constants::MIN_MAX_PREVIEW_CHARS..=constants::ABSOLUTE_MAX_PREVIEW_CHARS)
            .contains(&chars)
        {
            config.max_preview_chars = chars;
        } else {
            out_of_range(
                "preview.max_text_chars",
                chars.to_string(),
                format!(
                    "{}-{}",
                    constants::MIN_MAX_PREVIEW_CHARS,
                    constants::ABSOLUTE_MAX_PREVIEW_CHARS
                ),
                constants::DEFAULT_MAX_PREVIEW_CHARS.to_string(),
            );
        }
    }

    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            out_of_range(
                "ui.font_size",
                size.to_string(),
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
                constants::DEFAULT_FONT_SIZE.to_string(),
            );
        }
    }

    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(format!(
                "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark)."
            )),
        }
    }

    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info)."
            ));
        }
    }

    for entry in raw.folders {
        if entry.name.trim().is_empty() {
            warnings.push(format!(
                "[[folders]] entry for '{}' has an empty name and was ignored.",
                entry.path.display()
            ));
            continue;
        }
        config
            .extra_folders
            .push((entry.name.trim().to_string(), entry.path));
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}
