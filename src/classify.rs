use crate::data::{Dataset, EMPTY_CELL};
use serde::Serialize;
use std::collections::HashSet;

/// Per-column classification driving generator behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Disjoint column-name lists in header order. The deduplicated union is
/// what axis selectors offer the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnClasses {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl ColumnClasses {
    /// Union offered to axis selectors: categorical first, then numeric,
    /// deduplicated.
    pub fn all(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.categorical
            .iter()
            .chain(self.numeric.iter())
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.numeric.iter().any(|c| c == name) || self.categorical.iter().any(|c| c == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        if self.numeric.iter().any(|c| c == name) {
            Some(ColumnKind::Numeric)
        } else if self.categorical.iter().any(|c| c == name) {
            Some(ColumnKind::Categorical)
        } else {
            None
        }
    }
}

/// Pluggable column-type inference. Swapping the strategy must not touch
/// generator call sites.
pub trait ColumnClassifier {
    fn classify(&self, data: &Dataset) -> ColumnClasses;
}

/// Row-0-only inference: a column is Numeric when its first-row value is a
/// number or parses fully as one. Later rows are never consulted, so a
/// column whose first value is blank stays Categorical even if every other
/// row holds numbers. That limitation is part of the contract; `MajorityVote`
/// exists for hosts that want the stricter reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstRowHeuristic;

impl ColumnClassifier for FirstRowHeuristic {
    fn classify(&self, data: &Dataset) -> ColumnClasses {
        let mut classes = ColumnClasses::default();
        let Some(first) = data.rows.first() else {
            return classes;
        };

        let mut seen = HashSet::new();
        for (idx, name) in data.headers.iter().enumerate() {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let cell = first.get(idx).unwrap_or(&EMPTY_CELL);
            if cell.as_number().is_some() {
                classes.numeric.push(name.clone());
            } else {
                classes.categorical.push(name.clone());
            }
        }
        classes
    }
}

/// Majority-vote inference: Numeric when a strict majority of rows hold a
/// numeric value for the column. Ties fall to Categorical.
#[derive(Debug, Clone, Copy, Default)]
pub struct MajorityVote;

impl ColumnClassifier for MajorityVote {
    fn classify(&self, data: &Dataset) -> ColumnClasses {
        let mut classes = ColumnClasses::default();
        if data.rows.is_empty() {
            return classes;
        }

        let mut seen = HashSet::new();
        for (idx, name) in data.headers.iter().enumerate() {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let numeric_count = data
                .rows
                .iter()
                .filter(|row| row.get(idx).unwrap_or(&EMPTY_CELL).as_number().is_some())
                .count();
            if numeric_count * 2 > data.rows.len() {
                classes.numeric.push(name.clone());
            } else {
                classes.categorical.push(name.clone());
            }
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Cell;

    fn make_data() -> Dataset {
        Dataset::new(
            vec!["country".to_string(), "sales".to_string(), "code".to_string()],
            vec![
                vec![
                    Cell::Text("US".to_string()),
                    Cell::Number(10.0),
                    Cell::Text("7".to_string()),
                ],
                vec![
                    Cell::Text("FR".to_string()),
                    Cell::Number(5.0),
                    Cell::Text("9".to_string()),
                ],
            ],
        )
    }

    #[test]
    fn test_first_row_classification() {
        let classes = FirstRowHeuristic.classify(&make_data());
        assert_eq!(classes.numeric, vec!["sales", "code"]);
        assert_eq!(classes.categorical, vec!["country"]);
    }

    #[test]
    fn test_lists_are_disjoint_and_cover_headers() {
        let data = make_data();
        let classes = FirstRowHeuristic.classify(&data);
        for name in &classes.numeric {
            assert!(!classes.categorical.contains(name));
        }
        let mut all = classes.all();
        all.sort();
        let mut headers = data.headers.clone();
        headers.sort();
        assert_eq!(all, headers);
    }

    #[test]
    fn test_empty_dataset_yields_empty_lists() {
        let classes = FirstRowHeuristic.classify(&Dataset::default());
        assert!(classes.numeric.is_empty());
        assert!(classes.categorical.is_empty());
    }

    #[test]
    fn test_blank_first_row_value_is_categorical() {
        // Row 0 decides alone: a blank first value makes the column
        // Categorical even though every later row is numeric.
        let data = Dataset::new(
            vec!["v".to_string()],
            vec![
                vec![Cell::Empty],
                vec![Cell::Number(1.0)],
                vec![Cell::Number(2.0)],
            ],
        );
        let classes = FirstRowHeuristic.classify(&data);
        assert_eq!(classes.categorical, vec!["v"]);

        // Majority vote flips it.
        let classes = MajorityVote.classify(&data);
        assert_eq!(classes.numeric, vec!["v"]);
    }

    #[test]
    fn test_majority_vote_tie_is_categorical() {
        let data = Dataset::new(
            vec!["v".to_string()],
            vec![vec![Cell::Number(1.0)], vec![Cell::Text("x".to_string())]],
        );
        let classes = MajorityVote.classify(&data);
        assert_eq!(classes.categorical, vec!["v"]);
    }

    #[test]
    fn test_duplicate_headers_classified_once() {
        let data = Dataset::new(
            vec!["a".to_string(), "a".to_string()],
            vec![vec![Cell::Number(1.0), Cell::Text("x".to_string())]],
        );
        let classes = FirstRowHeuristic.classify(&data);
        assert_eq!(classes.numeric, vec!["a"]);
        assert!(classes.categorical.is_empty());
        assert_eq!(classes.all(), vec!["a"]);
    }

    #[test]
    fn test_selector_union_order() {
        let classes = FirstRowHeuristic.classify(&make_data());
        assert_eq!(classes.all(), vec!["country", "sales", "code"]);
        assert_eq!(classes.kind_of("sales"), Some(ColumnKind::Numeric));
        assert_eq!(classes.kind_of("country"), Some(ColumnKind::Categorical));
        assert_eq!(classes.kind_of("missing"), None);
    }
}
