// FileScout - app/search.rs
//
// Search lifecycle management. Runs the filesystem walk on a background
// thread and reports `SearchProgress` messages to the UI thread via an mpsc
// channel.
//
// Architecture:
//   - `SearchManager` lives on the UI thread; `run_search` runs on a
//     short-lived background thread, one per search.
//   - An `Arc<AtomicBool>` cancel flag lets the UI stop a walk cooperatively.
//   - One channel lives as long as the manager; every message carries its
//     request id so the receiver can drop output from superseded searches.

use crate::core::model::{SearchProgress, SearchRequest};
use crate::core::search::{self, SearchConfig};
use crate::util::constants;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

/// Manages background search threads.
pub struct SearchManager {
    tx: mpsc::Sender<SearchProgress>,
    rx: mpsc::Receiver<SearchProgress>,

    /// Cancel flag of the most recently started search.
    cancel_flag: Option<Arc<AtomicBool>>,

    /// Id handed out to the next request.
    next_id: u64,
}

impl SearchManager {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            cancel_flag: None,
            next_id: 1,
        }
    }

    /// Reserve the id for the next search request.
    pub fn next_request_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start walking `request` on a new background thread.
    ///
    /// Any search still running is cancelled first.
    pub fn start_search(&mut self, request: SearchRequest, max_results: Option<usize>) {
        self.cancel_search();

        let cancel = Arc::new(AtomicBool::new(false));
        self.cancel_flag = Some(Arc::clone(&cancel));

        let config = SearchConfig {
            max_results,
            cancel_flag: Some(cancel),
        };
        let tx = self.tx.clone();
        let id = request.id;

        std::thread::spawn(move || run_search(request, config, tx));

        tracing::info!(id, "Search started");
    }

    /// Request cancellation of the running search.
    /// The background thread sends `SearchProgress::Cancelled` and exits.
    pub fn cancel_search(&mut self) {
        if let Some(flag) = self.cancel_flag.take() {
            flag.store(true, Ordering::SeqCst);
        }
    }

    /// Poll for progress messages without blocking, up to the per-frame cap.
    pub fn poll_progress(&self) -> Vec<SearchProgress> {
        self.rx
            .try_iter()
            .take(constants::MAX_SEARCH_MESSAGES_PER_FRAME)
            .collect()
    }
}

impl Default for SearchManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background search body: walk, then deliver the full outcome once.
fn run_search(request: SearchRequest, config: SearchConfig, tx: mpsc::Sender<SearchProgress>) {
    let id = request.id;
    if tx.send(SearchProgress::Started { id }).is_err() {
        return; // Receiver dropped (UI closed); exit quietly.
    }

    let progress_tx = tx.clone();
    let outcome = search::search_roots(&request, &config, |visited| {
        if visited % constants::PROGRESS_REPORT_INTERVAL == 0 {
            let _ = progress_tx.send(SearchProgress::Progress {
                id,
                files_visited: visited,
            });
        }
    });

    let msg = if outcome.cancelled {
        tracing::info!(id, "Search cancelled");
        SearchProgress::Cancelled { id }
    } else {
        tracing::info!(
            id,
            matches = outcome.results.len(),
            visited = outcome.files_visited,
            "Search complete"
        );
        SearchProgress::Completed { id, outcome }
    };
    let _ = tx.send(msg);
}
