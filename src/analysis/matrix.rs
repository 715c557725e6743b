// Category × frame count matrix.
//
// The scorer needs counts per (category, frame) over the full
// cross-category vocabulary. A sorted vocabulary plus one integer row per
// category is all the structure the algorithm uses, so that is all we
// build, without a vectorization framework.

use std::collections::{BTreeMap, BTreeSet};

/// Count matrix: one row per category, one column per vocabulary frame.
#[derive(Debug, Clone)]
pub struct CountMatrix {
    /// Row labels, in the order of `rows`.
    pub categories: Vec<String>,
    /// Column labels: the sorted union of all frames across categories.
    pub vocabulary: Vec<String>,
    /// `rows[c][v]` = occurrences of `vocabulary[v]` in `categories[c]`.
    pub rows: Vec<Vec<u32>>,
}

impl CountMatrix {
    /// Build the matrix from flattened per-category frame lists.
    pub fn build(frames_by_category: &BTreeMap<String, Vec<String>>) -> Self {
        let vocabulary: Vec<String> = frames_by_category
            .values()
            .flatten()
            .collect::<BTreeSet<&String>>()
            .into_iter()
            .cloned()
            .collect();

        let mut categories = Vec::with_capacity(frames_by_category.len());
        let mut rows = Vec::with_capacity(frames_by_category.len());

        for (category, frames) in frames_by_category {
            let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
            for frame in frames {
                *counts.entry(frame.as_str()).or_insert(0) += 1;
            }
            let row: Vec<u32> = vocabulary
                .iter()
                .map(|frame| counts.get(frame.as_str()).copied().unwrap_or(0))
                .collect();
            categories.push(category.clone());
            rows.push(row);
        }

        Self {
            categories,
            vocabulary,
            rows,
        }
    }

    /// Total frame occurrences in one category row.
    pub fn row_total(&self, row: usize) -> u32 {
        self.rows[row].iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn vocabulary_is_the_sorted_union() {
        let frames: BTreeMap<String, Vec<String>> = [
            ("a".to_string(), labels(&["Giving", "Taking"])),
            ("b".to_string(), labels(&["Killing", "Giving"])),
        ]
        .into();

        let matrix = CountMatrix::build(&frames);
        assert_eq!(matrix.vocabulary, vec!["Giving", "Killing", "Taking"]);
        assert_eq!(matrix.categories, vec!["a", "b"]);
    }

    #[test]
    fn absent_frames_count_zero_not_omitted() {
        let frames: BTreeMap<String, Vec<String>> = [
            ("a".to_string(), labels(&["Giving", "Giving", "Taking"])),
            ("b".to_string(), labels(&["Taking", "Taking", "Taking"])),
        ]
        .into();

        let matrix = CountMatrix::build(&frames);
        assert_eq!(matrix.rows, vec![vec![2, 1], vec![0, 3]]);
        assert_eq!(matrix.row_total(0), 3);
        assert_eq!(matrix.row_total(1), 3);
    }

    #[test]
    fn every_row_spans_the_full_vocabulary() {
        let frames: BTreeMap<String, Vec<String>> = [
            ("a".to_string(), labels(&["X"])),
            ("b".to_string(), labels(&["Y", "Z"])),
            ("c".to_string(), labels(&["Z"])),
        ]
        .into();

        let matrix = CountMatrix::build(&frames);
        for row in &matrix.rows {
            assert_eq!(row.len(), matrix.vocabulary.len());
        }
    }
}
