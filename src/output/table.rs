// Tabular score export.
//
// One row per (category, frame), in rank order, with the frequency columns
// joined in and a blank judgement column for manual validation passes.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::frequency::FrequencyTable;
use crate::analysis::scoring::ScoreTable;

const HEADERS: [&str; 7] = [
    "event type",
    "rank",
    "frame",
    "typicality",
    "absolute freq",
    "relative freq",
    "judgement",
];

/// One export row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub category: String,
    /// 1-based rank within the category.
    pub rank: usize,
    pub frame: String,
    pub score: f64,
    pub absolute_frequency: u32,
    pub relative_frequency: f64,
    /// Always blank; filled in by hand during validation.
    pub judgement: String,
}

/// Flatten the score table into export rows, rank order per category.
///
/// Frames that never occur in a category (count 0 in its row of the
/// matrix) have no frequency entry; they export as 0 / 0.0.
pub fn score_rows(scores: &ScoreTable, frequencies: &FrequencyTable) -> Vec<ScoreRow> {
    let mut rows = Vec::new();
    for (category, ranked) in scores {
        for (rank, (frame, score)) in ranked.iter().enumerate() {
            let frequency = frequencies
                .get(category)
                .and_then(|stats| stats.get(frame));
            rows.push(ScoreRow {
                category: category.clone(),
                rank: rank + 1,
                frame: frame.clone(),
                score: *score,
                absolute_frequency: frequency.map(|f| f.absolute).unwrap_or(0),
                relative_frequency: frequency.map(|f| f.relative).unwrap_or(0.0),
                judgement: String::new(),
            });
        }
    }
    rows
}

/// Write the rows as CSV to `typicality_scores_<ids>.csv` in the output
/// folder. Returns the path written.
pub fn write_csv(rows: &[ScoreRow], categories: &[String], output_dir: &Path) -> Result<PathBuf> {
    let mut csv = String::new();
    let _ = writeln!(csv, "{}", HEADERS.join(","));
    for row in rows {
        let _ = writeln!(
            csv,
            "{},{},{},{:.6},{},{},{}",
            csv_field(&row.category),
            row.rank,
            csv_field(&row.frame),
            row.score,
            row.absolute_frequency,
            row.relative_frequency,
            row.judgement,
        );
    }

    let identifiers = categories.join("_");
    let path = output_dir.join(format!("typicality_scores_{identifiers}.csv"));
    std::fs::write(&path, csv).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = rows.len(), "tabular scores exported");
    Ok(path)
}

/// Quote a CSV field when it contains a delimiter or quote.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn rows_follow_rank_order_one_indexed() {
        let scores: ScoreTable = [(
            "birth".to_string(),
            vec![
                ("Being_born".to_string(), 1.0),
                ("Giving".to_string(), 0.4),
                ("Taking".to_string(), 0.0),
            ],
        )]
        .into();
        let frequencies = BTreeMap::new();

        let rows = score_rows(&scores, &frequencies);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(rows[0].frame, "Being_born");
    }

    #[test]
    fn missing_frequency_exports_as_zero() {
        let scores: ScoreTable = [(
            "birth".to_string(),
            vec![("Taking".to_string(), 0.0)],
        )]
        .into();
        let frequencies = BTreeMap::new();

        let rows = score_rows(&scores, &frequencies);
        assert_eq!(rows[0].absolute_frequency, 0);
        assert_eq!(rows[0].relative_frequency, 0.0);
        assert!(rows[0].judgement.is_empty());
    }

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("Giving"), "Giving");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
