// FileScout - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every user-visible failure maps to one of these variants; the GUI renders
// them through `Display` and never inspects message strings.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all FileScout operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum FileScoutError {
    /// Search request was rejected before the walk started.
    Search(SearchError),

    /// File preview could not be produced.
    Preview(PreviewError),

    /// Opening or revealing a file via the OS failed.
    Launch(LaunchError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for FileScoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(e) => write!(f, "Search error: {e}"),
            Self::Preview(e) => write!(f, "Preview error: {e}"),
            Self::Launch(e) => write!(f, "Launch error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for FileScoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Preview(e) => Some(e),
            Self::Launch(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Search errors
// ---------------------------------------------------------------------------

/// Validation errors raised while building a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search term is empty or whitespace only.
    EmptyTerm,

    /// No root folder was selected.
    NoRootsSelected,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTerm => write!(f, "Please enter some text to search for."),
            Self::NoRootsSelected => write!(f, "Please select at least one folder to search."),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<SearchError> for FileScoutError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// Preview errors
// ---------------------------------------------------------------------------

/// Errors raised by the preview decoders.
#[derive(Debug)]
pub enum PreviewError {
    /// The file could not be opened or read.
    Io { path: PathBuf, source: io::Error },

    /// Image decoding failed (corrupt data or unsupported sub-format).
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    /// PDF parsing or text extraction failed.
    Pdf {
        path: PathBuf,
        source: lopdf::Error,
    },

    /// The PDF contains no pages.
    NoPages { path: PathBuf },

    /// The Word document is not a readable zip container.
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// The Word document body is not well-formed XML.
    Xml {
        path: PathBuf,
        source: xml::reader::Error,
    },

    /// The Excel workbook could not be opened or read.
    Spreadsheet {
        path: PathBuf,
        source: calamine::Error,
    },

    /// The Excel workbook contains no worksheets.
    NoWorksheets { path: PathBuf },
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::Image { path, source } => {
                write!(f, "Cannot decode image '{}': {source}", path.display())
            }
            Self::Pdf { path, source } => {
                write!(f, "Cannot read PDF '{}': {source}", path.display())
            }
            Self::NoPages { path } => {
                write!(f, "PDF '{}' has no pages", path.display())
            }
            Self::Archive { path, source } => {
                write!(f, "'{}' is not a valid Word document: {source}", path.display())
            }
            Self::Xml { path, source } => {
                write!(f, "Malformed document body in '{}': {source}", path.display())
            }
            Self::Spreadsheet { path, source } => {
                write!(f, "Cannot read workbook '{}': {source}", path.display())
            }
            Self::NoWorksheets { path } => {
                write!(f, "Workbook '{}' has no worksheets", path.display())
            }
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::Pdf { source, .. } => Some(source),
            Self::Archive { source, .. } => Some(source),
            Self::Xml { source, .. } => Some(source),
            Self::Spreadsheet { source, .. } => Some(source),
            Self::NoPages { .. } | Self::NoWorksheets { .. } => None,
        }
    }
}

impl From<PreviewError> for FileScoutError {
    fn from(e: PreviewError) -> Self {
        Self::Preview(e)
    }
}

// ---------------------------------------------------------------------------
// Launch errors
// ---------------------------------------------------------------------------

/// Errors raised when handing a path to the OS file manager / default app.
#[derive(Debug)]
pub enum LaunchError {
    /// The target path does not exist.
    NotFound { path: PathBuf },

    /// The helper process could not be started (e.g. `xdg-open` missing).
    Spawn {
        program: String,
        path: PathBuf,
        source: io::Error,
    },

    /// The helper process ran but reported failure.
    ExitStatus {
        program: String,
        path: PathBuf,
        code: Option<i32>,
    },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "'{}' no longer exists", path.display())
            }
            Self::Spawn {
                program,
                path,
                source,
            } => write!(
                f,
                "Could not start '{program}' for '{}': {source}",
                path.display()
            ),
            Self::ExitStatus {
                program,
                path,
                code,
            } => match code {
                Some(code) => write!(
                    f,
                    "'{program}' failed for '{}' (exit code {code})",
                    path.display()
                ),
                None => write!(
                    f,
                    "'{program}' was terminated while handling '{}'",
                    path.display()
                ),
            },
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LaunchError> for FileScoutError {
    fn from(e: LaunchError) -> Self {
        Self::Launch(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for FileScoutError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for FileScout results.
pub type Result<T> = std::result::Result<T, FileScoutError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            SearchError::EmptyTerm.to_string(),
            "Please enter some text to search for."
        );
        assert_eq!(
            SearchError::NoRootsSelected.to_string(),
            "Please select at least one folder to search."
        );
    }

    #[test]
    fn test_source_chain_preserved() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: FileScoutError = PreviewError::Io {
            path: PathBuf::from("a.png"),
            source: io_err,
        }
        .into();
        let preview = err.source().expect("top-level source");
        assert!(preview.source().is_some());
        assert!(err.to_string().starts_with("Preview error: Cannot read 'a.png'"));
    }

    #[test]
    fn test_exit_status_display() {
        let err = LaunchError::ExitStatus {
            program: "xdg-open".to_string(),
            path: PathBuf::from("/tmp"),
            code: Some(3),
        };
        assert!(err.to_string().contains("exit code 3"));
    }
}
