// c-tf-idf typicality scoring.
//
// For frame f in category c:
//
//   tf  = count(f, c) / total frame occurrences in c
//   idf = ln(total documents across categories /
//            total occurrences of f across categories)
//
// Note the idf denominator: it is the raw occurrence count of the frame
// across categories, NOT the number of documents containing it.
// Downstream lexicon tooling is calibrated against this variant, so the
// deviation from classical idf must stay. Do not swap in document
// frequency.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use anyhow::Result;
use tracing::debug;

use crate::analysis::frequency::FrequencyTable;
use crate::analysis::matrix::CountMatrix;
use crate::corpus::models::Corpus;
use crate::error::AnalysisError;

/// category → (frame, normalized score), sorted descending by score.
pub type ScoreTable = BTreeMap<String, Vec<(String, f64)>>;

/// The raw c-tf-idf score for one (category, frame) cell.
pub fn c_tf_idf(
    count_in_category: u32,
    category_total: u32,
    total_docs: usize,
    cross_category_count: u32,
) -> f64 {
    let tf = count_in_category as f64 / category_total as f64;
    let idf = (total_docs as f64 / cross_category_count as f64).ln();
    tf * idf
}

/// Score every frame's typicality per category.
///
/// Builds the count matrix over the full vocabulary, computes c-tf-idf per
/// cell, min-max normalizes within each category, rounds to 6 decimals,
/// and ranks descending (ties keep vocabulary order).
pub fn score_typicality(
    sampled: &Corpus,
    frames_by_category: &BTreeMap<String, Vec<String>>,
    frequencies: &FrequencyTable,
) -> Result<ScoreTable> {
    let total_docs: usize = sampled.values().map(Vec::len).sum();
    let matrix = CountMatrix::build(frames_by_category);

    let mut table = ScoreTable::new();

    for (row_idx, category) in matrix.categories.iter().enumerate() {
        let category_total = matrix.row_total(row_idx);
        if category_total == 0 {
            return Err(AnalysisError::EmptyFrameList {
                category: category.clone(),
            }
            .into());
        }

        let mut raw = Vec::with_capacity(matrix.vocabulary.len());
        for (frame, &count) in matrix.vocabulary.iter().zip(&matrix.rows[row_idx]) {
            let cross_category_count: u32 = frequencies
                .values()
                .filter_map(|stats| stats.get(frame))
                .map(|f| f.absolute)
                .sum();
            if cross_category_count == 0 {
                return Err(AnalysisError::UnseenFrame {
                    frame: frame.clone(),
                }
                .into());
            }
            raw.push(c_tf_idf(
                count,
                category_total,
                total_docs,
                cross_category_count,
            ));
        }

        let normalized = normalize_min_max(&raw, category)?;

        let mut ranked: Vec<(String, f64)> = matrix
            .vocabulary
            .iter()
            .cloned()
            .zip(normalized)
            .collect();
        // Stable sort: equal scores keep vocabulary order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        debug!(
            category = %category,
            top = ?&ranked[..ranked.len().min(3)],
            "ranked typicality scores"
        );
        table.insert(category.clone(), ranked);
    }

    Ok(table)
}

/// Min-max normalize one category's raw scores and round to 6 decimals.
///
/// All-equal scores leave min-max without a range. That only happens on
/// pathological input, and it must abort with a named category rather
/// than emit NaNs.
fn normalize_min_max(raw: &[f64], category: &str) -> Result<Vec<f64>> {
    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        return Err(AnalysisError::DegenerateScores {
            category: category.to_string(),
        }
        .into());
    }
    Ok(raw
        .iter()
        .map(|score| round6((score - min) / range))
        .collect())
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
