// FileScout - core/results.rs
//
// Column sorting for the result table. Produces an index permutation over
// the result list so the underlying Vec keeps its delivered (relevance)
// order and re-sorting never clones rows.

use crate::core::model::SearchResult;
use std::cmp::Ordering;

/// Sortable result-table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultColumn {
    Filename,
    Path,
    Type,
    Relevance,
}

impl ResultColumn {
    /// All columns in display order.
    pub fn all() -> &'static [ResultColumn] {
        &[
            ResultColumn::Filename,
            ResultColumn::Path,
            ResultColumn::Type,
            ResultColumn::Relevance,
        ]
    }

    /// Column header text.
    pub fn label(&self) -> &'static str {
        match self {
            ResultColumn::Filename => "Filename",
            ResultColumn::Path => "Path",
            ResultColumn::Type => "Type",
            ResultColumn::Relevance => "Relevance",
        }
    }
}

/// Current table sort: a column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: ResultColumn,
    pub descending: bool,
}

impl Default for SortState {
    /// Relevance, highest first -- the order results are delivered in.
    fn default() -> Self {
        Self {
            column: ResultColumn::Relevance,
            descending: true,
        }
    }
}

impl SortState {
    /// Header click: same column flips direction, a new column starts
    /// ascending (descending for Relevance).
    pub fn toggled(self, column: ResultColumn) -> Self {
        if self.column == column {
            Self {
                column,
                descending: !self.descending,
            }
        } else {
            Self {
                column,
                descending: column == ResultColumn::Relevance,
            }
        }
    }
}

/// Indices into `results` in display order for `sort`.
///
/// The sort is stable, so rows that compare equal keep their delivered order.
pub fn sorted_indices(results: &[SearchResult], sort: SortState) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..results.len()).collect();
    indices.sort_by(|&a, &b| {
        let ord = compare(&results[a], &results[b], sort.column);
        if sort.descending {
            ord.reverse()
        } else {
            ord
        }
    });
    indices
}

fn compare(a: &SearchResult, b: &SearchResult, column: ResultColumn) -> Ordering {
    match column {
        ResultColumn::Filename => a
            .filename
            .to_lowercase()
            .cmp(&b.filename.to_lowercase()),
        ResultColumn::Path => a.full_path.cmp(&b.full_path),
        ResultColumn::Type => a
            .extension
            .to_lowercase()
            .cmp(&b.extension.to_lowercase()),
        ResultColumn::Relevance => a.relevance.cmp(&b.relevance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn result(path: &str, relevance: usize) -> SearchResult {
        let p = Path::new(path);
        let name = p.file_name().unwrap().to_string_lossy().into_owned();
        SearchResult::new(p, name, relevance)
    }

    #[test]
    fn test_default_is_delivered_order() {
        let results = vec![result("/a/b.txt", 3), result("/a/a.txt", 1), result("/a/c.txt", 1)];
        assert_eq!(sorted_indices(&results, SortState::default()), vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_by_filename_case_insensitive() {
        let results = vec![result("/x/Beta.txt", 1), result("/x/alpha.txt", 1)];
        let sort = SortState::default().toggled(ResultColumn::Filename);
        assert!(!sort.descending);
        assert_eq!(sorted_indices(&results, sort), vec![1, 0]);
        assert_eq!(sorted_indices(&results, sort.toggled(ResultColumn::Filename)), vec![0, 1]);
    }

    #[test]
    fn test_sort_by_type_is_stable() {
        let results = vec![
            result("/x/one.pdf", 1),
            result("/x/two.txt", 1),
            result("/x/three.PDF", 1),
        ];
        let sort = SortState {
            column: ResultColumn::Type,
            descending: false,
        };
        assert_eq!(sorted_indices(&results, sort), vec![0, 2, 1]);
    }

    #[test]
    fn test_toggle_relevance_flips_direction() {
        let sort = SortState::default().toggled(ResultColumn::Relevance);
        assert_eq!(sort.column, ResultColumn::Relevance);
        assert!(!sort.descending);
    }
}
