// FileScout - core/search.rs
//
// Recursive filename search with substring-count relevance.
//
// Architecture note: this module uses `walkdir` for directory traversal as an
// OS abstraction. It reads only directory entries, never file contents, and
// it is fully synchronous -- threading is owned by `app::search`.
//
//   - Unreadable entries are skipped and counted; they never abort the walk.
//   - The cancel flag is checked on every walker iteration.
//   - `max_results` stops the walk as soon as the cap is reached.

use crate::core::model::{SearchOutcome, SearchRequest, SearchResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// =============================================================================
// Configuration
// =============================================================================

/// Tuning knobs for a single search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Stop collecting once this many matches have been found.
    /// `None` means unbounded.
    pub max_results: Option<usize>,

    /// Optional cancel flag. When set to `true` the walk stops at the next
    /// entry and the outcome is returned with `cancelled = true` and no
    /// results.
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl SearchConfig {
    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst))
    }
}

// =============================================================================
// Relevance
// =============================================================================

/// Number of case-insensitive, non-overlapping occurrences of `term` in
/// `filename`.
///
/// An empty term scores zero rather than "matches everywhere".
pub fn relevance(term: &str, filename: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    let term = term.to_lowercase();
    filename.to_lowercase().matches(term.as_str()).count()
}

// =============================================================================
// Walk
// =============================================================================

/// Walk every root in `request`, collecting files whose name contains the
/// term (case-insensitive), then sort by relevance descending.
///
/// `on_file_visited` is called once per file examined with the running
/// count; keep it cheap (it runs inside the walk loop).
///
/// Symlinks are not followed. Roots that do not exist or cannot be read are
/// skipped like any other unreadable entry.
pub fn search_roots<F>(
    request: &SearchRequest,
    config: &SearchConfig,
    mut on_file_visited: F,
) -> SearchOutcome
where
    F: FnMut(usize),
{
    let term_lower = request.term.to_lowercase();
    let mut outcome = SearchOutcome::default();

    tracing::debug!(
        id = request.id,
        term = %request.term,
        roots = request.roots.len(),
        max_results = ?config.max_results,
        "Search starting"
    );

    'roots: for root in &request.roots {
        let walker = walkdir::WalkDir::new(root).follow_links(false).into_iter();

        for entry_result in walker {
            if config.is_cancelled() {
                tracing::debug!(id = request.id, "Search cancelled by request");
                outcome.results.clear();
                outcome.cancelled = true;
                return outcome;
            }

            let entry = match entry_result {
                Ok(e) => e,
                Err(e) => {
                    outcome.skipped_entries += 1;
                    tracing::debug!(
                        path = ?e.path(),
                        error = %e,
                        "Skipping unreadable entry"
                    );
                    continue;
                }
            };

            // Links are not followed, but a link to a directory is still a
            // directory entry, never a file result.
            let is_dir_link = entry.path_is_symlink() && entry.path().is_dir();
            if entry.file_type().is_dir() || is_dir_link {
                continue;
            }

            outcome.files_visited += 1;
            on_file_visited(outcome.files_visited);

            let filename = entry.file_name().to_string_lossy();
            let count = filename
                .to_lowercase()
                .matches(term_lower.as_str())
                .count();
            if count == 0 {
                continue;
            }

            outcome
                .results
                .push(SearchResult::new(entry.path(), filename.into_owned(), count));

            if config
                .max_results
                .is_some_and(|max| outcome.results.len() >= max)
            {
                tracing::info!(
                    id = request.id,
                    cap = outcome.results.len(),
                    "Result cap reached; stopping walk early"
                );
                outcome.truncated = true;
                break 'roots;
            }
        }
    }

    // Stable: equal relevance keeps encounter order (root order, then walk order).
    outcome
        .results
        .sort_by(|a, b| b.relevance.cmp(&a.relevance));

    tracing::debug!(
        id = request.id,
        matches = outcome.results.len(),
        visited = outcome.files_visited,
        skipped = outcome.skipped_entries,
        truncated = outcome.truncated,
        "Search complete"
    );

    outcome
}
