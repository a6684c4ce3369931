// FileScout - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::SearchError;
use std::path::{Path, PathBuf};

// =============================================================================
// Folder registry entry
// =============================================================================

/// A named search root offered in the folder picker.
///
/// Built once at startup by `core::registry` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderContext {
    /// Human-readable name shown next to the checkbox ("Documents").
    pub name: String,

    /// Directory walked when this entry is selected.
    pub path: PathBuf,

    /// Display priority. Lower values are walked first, which makes the
    /// priority the tie-break for equally relevant results.
    pub priority: u32,
}

impl FolderContext {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, priority: u32) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            priority,
        }
    }

    /// Checkbox label, e.g. "Documents (Priority 2)".
    pub fn label(&self) -> String {
        format!("{} (Priority {})", self.name, self.priority)
    }
}

// =============================================================================
// Search request / result
// =============================================================================

/// A validated search request, built from UI state at search time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonically increasing identifier. Results carrying an older id
    /// than the most recent request are discarded by the UI.
    pub id: u64,

    /// Trimmed, non-empty search term (original casing preserved).
    pub term: String,

    /// Root directories, walked in this order.
    pub roots: Vec<PathBuf>,
}

impl SearchRequest {
    /// Build a request, rejecting an empty term or an empty root list.
    ///
    /// Duplicate roots are dropped (first occurrence wins) so a folder
    /// selected both from the registry and the folder dialog is walked once.
    pub fn new(id: u64, term: &str, roots: Vec<PathBuf>) -> Result<Self, SearchError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(SearchError::EmptyTerm);
        }

        let mut unique: Vec<PathBuf> = Vec::with_capacity(roots.len());
        for root in roots {
            if !unique.contains(&root) {
                unique.push(root);
            }
        }
        if unique.is_empty() {
            return Err(SearchError::NoRootsSelected);
        }

        Ok(Self {
            id,
            term: term.to_string(),
            roots: unique,
        })
    }
}

/// A single filename match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// File name without directory components.
    pub filename: String,

    /// Absolute (or root-relative, if the root was relative) path.
    pub full_path: PathBuf,

    /// Extension including the leading dot (".pdf"), empty if none.
    pub extension: String,

    /// Case-insensitive occurrence count of the term within `filename`.
    pub relevance: usize,
}

impl SearchResult {
    /// Build a result for `path`, scoring `filename` with `relevance`.
    pub fn new(path: &Path, filename: String, relevance: usize) -> Self {
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        Self {
            filename,
            full_path: path.to_path_buf(),
            extension,
            relevance,
        }
    }
}

/// Everything a completed walk produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Matches sorted by relevance descending (stable).
    pub results: Vec<SearchResult>,

    /// Number of files examined.
    pub files_visited: usize,

    /// Entries the walker could not read (permission denied etc.).
    pub skipped_entries: usize,

    /// True if the walk stopped early because the result cap was reached.
    pub truncated: bool,

    /// True if the walk stopped because the cancel flag was set.
    pub cancelled: bool,
}

// =============================================================================
// Search progress (background thread → UI thread)
// =============================================================================

/// Messages sent from the background search thread to the UI thread.
/// Every message carries the id of the request that produced it.
#[derive(Debug, Clone)]
pub enum SearchProgress {
    /// The worker thread has started walking.
    Started { id: u64 },

    /// Periodic heartbeat with the number of files examined so far.
    Progress { id: u64, files_visited: usize },

    /// The walk finished; the full sorted result list is attached.
    Completed { id: u64, outcome: SearchOutcome },

    /// The walk was cancelled before completion. No results are delivered.
    Cancelled { id: u64 },
}

impl SearchProgress {
    /// Id of the request this message belongs to.
    pub fn request_id(&self) -> u64 {
        match self {
            Self::Started { id }
            | Self::Progress { id, .. }
            | Self::Completed { id, .. }
            | Self::Cancelled { id } => *id,
        }
    }
}
