// FileScout - app/state.rs
//
// Application state management. Holds the folder selection, the current
// result set, table sort, preview and pending user requests.
// Owned by the eframe::App implementation and only touched on the UI thread.

use crate::core::model::{FolderContext, SearchProgress, SearchRequest, SearchResult};
use crate::core::preview::{self, ImagePreview, PreviewConfig, PreviewContent};
use crate::core::registry;
use crate::core::results::{self, ResultColumn, SortState};
use crate::util::constants;
use crate::util::error::{self, FileScoutError, LaunchError};
use std::path::{Path, PathBuf};

// =============================================================================
// Notices
// =============================================================================

/// Severity of a modal notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal message shown over the main window until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Error notice titled after the failing concern.
    pub fn from_error(err: &FileScoutError) -> Self {
        let (title, message) = match err {
            FileScoutError::Search(e) => ("Search", e.to_string()),
            FileScoutError::Preview(e) => ("Preview", e.to_string()),
            FileScoutError::Launch(e) => ("Open File", e.to_string()),
            FileScoutError::Config(e) => ("Configuration", e.to_string()),
        };
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message,
        }
    }
}

// =============================================================================
// Preview pane
// =============================================================================

/// What the preview pane currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewPane {
    #[default]
    Empty,
    Text {
        path: PathBuf,
        text: String,
    },
    Image {
        path: PathBuf,
        image: ImagePreview,
    },
}

// =============================================================================
// AppState
// =============================================================================

/// Top-level application state.
pub struct AppState {
    /// Folder registry, fixed at startup.
    pub folders: Vec<FolderContext>,

    /// Checkbox state, parallel to `folders`.
    pub folder_selected: Vec<bool>,

    /// Ad-hoc roots picked via the folder dialog; always searched.
    pub custom_roots: Vec<PathBuf>,

    /// Contents of the search box.
    pub search_term: String,

    /// Most recent search terms, newest first.
    pub search_history: Vec<String>,

    /// Results of the latest completed search, in relevance order.
    pub results: Vec<SearchResult>,

    /// Current table sort.
    pub sort: SortState,

    /// Indices into `results` in display order.
    pub display_order: Vec<usize>,

    /// Selected row (index into `display_order`).
    pub selected_index: Option<usize>,

    /// Whether a search is currently in progress.
    pub search_in_progress: bool,

    /// Id of the newest search request; output from any other id is dropped.
    pub active_search_id: Option<u64>,

    /// Term of the newest search request.
    pub active_term: String,

    /// Files examined so far by the running search.
    pub files_visited: usize,

    /// Current preview pane content.
    pub preview: PreviewPane,

    /// GPU texture for an image preview, created lazily by the preview panel.
    pub preview_texture: Option<egui::TextureHandle>,

    /// Modal notice awaiting dismissal.
    pub notice: Option<Notice>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Result cap passed to the search worker.
    pub max_results: usize,

    /// Decoder limits for previews.
    pub preview_config: PreviewConfig,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    // ---- Requests raised by panels, consumed by the app each frame ----
    /// The Search button was pressed.
    pub pending_search: bool,
    /// The Cancel button was pressed.
    pub request_cancel: bool,
    /// The user asked to add an ad-hoc folder via the folder dialog.
    pub request_add_folder: bool,
    /// Preview this path.
    pub pending_preview: Option<PathBuf>,
    /// Open this path with the default application.
    pub pending_open: Option<PathBuf>,
    /// Reveal this path in the file manager.
    pub pending_reveal: Option<PathBuf>,
}

impl AppState {
    /// Create initial state for the given registry.
    pub fn new(folders: Vec<FolderContext>, max_results: usize, preview_config: PreviewConfig) -> Self {
        let folder_selected = vec![false; folders.len()];
        Self {
            folders,
            folder_selected,
            custom_roots: Vec::new(),
            search_term: String::new(),
            search_history: Vec::new(),
            results: Vec::new(),
            sort: SortState::default(),
            display_order: Vec::new(),
            selected_index: None,
            search_in_progress: false,
            active_search_id: None,
            active_term: String::new(),
            files_visited: 0,
            preview: PreviewPane::Empty,
            preview_texture: None,
            notice: None,
            status_message: "Ready. Select folders and enter a search term.".to_string(),
            max_results,
            preview_config,
            dark_mode: true,
            show_about: false,
            pending_search: false,
            request_cancel: false,
            request_add_folder: false,
            pending_preview: None,
            pending_open: None,
            pending_reveal: None,
        }
    }

    // ---- Search ----------------------------------------------------------

    /// All roots the next search will walk: selected registry folders in
    /// priority order, then ad-hoc folders.
    pub fn selected_roots(&self) -> Vec<PathBuf> {
        let mut roots = registry::selected_roots(&self.folders, &self.folder_selected);
        roots.extend(self.custom_roots.iter().cloned());
        roots
    }

    /// Validate the current UI state into a request with the given id.
    ///
    /// On validation failure an error notice is raised, nothing else changes
    /// and `None` is returned. On success the previous results are cleared
    /// and the state switches to "in progress".
    pub fn begin_search(&mut self, id: u64) -> Option<SearchRequest> {
        let request = match self.build_request(id) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, "Search request rejected");
                self.notice = Some(Notice::from_error(&e));
                return None;
            }
        };

        self.record_history(&request.term);
        self.results.clear();
        self.display_order.clear();
        self.selected_index = None;
        self.files_visited = 0;
        self.search_in_progress = true;
        self.active_search_id = Some(request.id);
        self.active_term = request.term.clone();
        self.status_message = format!(
            "Searching {} folder(s) for '{}'...",
            request.roots.len(),
            request.term
        );
        Some(request)
    }

    /// Apply one message from the search worker.
    ///
    /// Messages from any request other than the active one are ignored.
    pub fn apply_progress(&mut self, msg: SearchProgress) {
        if Some(msg.request_id()) != self.active_search_id {
            tracing::debug!(
                id = msg.request_id(),
                active = ?self.active_search_id,
                "Dropping message from superseded search"
            );
            return;
        }

        match msg {
            SearchProgress::Started { .. } => {
                self.search_in_progress = true;
            }
            SearchProgress::Progress { files_visited, .. } => {
                self.files_visited = files_visited;
                self.status_message =
                    format!("Searching... ({files_visited} files examined)");
            }
            SearchProgress::Completed { outcome, .. } => {
                self.search_in_progress = false;
                self.files_visited = outcome.files_visited;
                self.results = outcome.results;
                self.refresh_order();

                let count = self.results.len();
                self.status_message = if outcome.truncated {
                    format!(
                        "Stopped at {count} matches (result limit). Refine the search term to see everything."
                    )
                } else {
                    format!(
                        "{count} match(es) in {} files examined.",
                        outcome.files_visited
                    )
                };
                if count == 0 {
                    self.notice = Some(Notice::info(
                        "Search",
                        format!("No files found matching '{}'.", self.active_term),
                    ));
                }
            }
            SearchProgress::Cancelled { .. } => {
                self.search_in_progress = false;
                self.status_message = "Search cancelled.".to_string();
            }
        }
    }

    fn build_request(&self, id: u64) -> error::Result<SearchRequest> {
        Ok(SearchRequest::new(id, &self.search_term, self.selected_roots())?)
    }

    /// Push `term` to the front of the history, de-duplicated and capped.
    pub fn record_history(&mut self, term: &str) {
        self.search_history.retain(|t| t != term);
        self.search_history.insert(0, term.to_string());
        self.search_history.truncate(constants::MAX_SEARCH_HISTORY);
    }

    /// Add an ad-hoc root, ignoring duplicates.
    pub fn add_custom_root(&mut self, path: PathBuf) {
        let in_registry = self.folders.iter().any(|f| f.path == path);
        if in_registry || self.custom_roots.contains(&path) {
            self.status_message = format!("'{}' is already listed.", path.display());
            return;
        }
        tracing::info!(path = %path.display(), "Ad-hoc folder added");
        self.custom_roots.push(path);
    }

    // ---- Result table ----------------------------------------------------

    /// Header click on `column`.
    pub fn toggle_sort(&mut self, column: ResultColumn) {
        let selected = self.selected_result().map(|r| r.full_path.clone());
        self.sort = self.sort.toggled(column);
        self.refresh_order();
        // Keep the same row selected after re-sorting.
        self.selected_index = selected.and_then(|path| {
            self.display_order
                .iter()
                .position(|&i| self.results[i].full_path == path)
        });
    }

    fn refresh_order(&mut self) {
        self.display_order = results::sorted_indices(&self.results, self.sort);
        if let Some(idx) = self.selected_index {
            if idx >= self.display_order.len() {
                self.selected_index = None;
            }
        }
    }

    /// Result at display row `row`.
    pub fn result_at(&self, row: usize) -> Option<&SearchResult> {
        self.display_order
            .get(row)
            .and_then(|&i| self.results.get(i))
    }

    /// Currently selected result, if any.
    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.selected_index.and_then(|row| self.result_at(row))
    }

    // ---- Preview ---------------------------------------------------------

    /// Decode `path` and show it in the preview pane.
    ///
    /// Unsupported types raise an informational notice; decode failures raise
    /// an error notice. In both cases the pane keeps its previous content.
    pub fn load_preview(&mut self, path: &Path) {
        match preview::preview_file(path, &self.preview_config) {
            Ok(PreviewContent::Image(image)) => {
                self.preview_texture = None;
                self.preview = PreviewPane::Image {
                    path: path.to_path_buf(),
                    image,
                };
                self.status_message = format!("Previewing {}", path.display());
            }
            Ok(PreviewContent::Text(text)) => {
                self.preview_texture = None;
                self.preview = PreviewPane::Text {
                    path: path.to_path_buf(),
                    text,
                };
                self.status_message = format!("Previewing {}", path.display());
            }
            Ok(PreviewContent::Unsupported { extension }) => {
                let what = if extension.is_empty() {
                    "files without an extension".to_string()
                } else {
                    format!("'{extension}' files")
                };
                self.notice = Some(Notice::info(
                    "Preview",
                    format!("Cannot preview {what}."),
                ));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Preview failed");
                self.notice = Some(Notice::from_error(&FileScoutError::from(e)));
            }
        }
    }

    /// Clear the preview pane.
    pub fn clear_preview(&mut self) {
        self.preview = PreviewPane::Empty;
        self.preview_texture = None;
    }

    // ---- Shell launches --------------------------------------------------

    /// Surface the outcome of an open/reveal request.
    pub fn report_launch(&mut self, result: Result<(), LaunchError>) {
        match result {
            Ok(()) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Shell launch failed");
                self.notice = Some(Notice::from_error(&FileScoutError::from(e)));
            }
        }
    }
}
