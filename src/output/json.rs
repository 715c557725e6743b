// JSON score exports.
//
// Two shapes: a keyed map per category (frame URI → score) for downstream
// lexicon tooling, and a validation split marking the top-N frames of each
// category as "typical" and the remainder as "other".

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::scoring::ScoreTable;

/// Top-N/rest partition of one category's ranked frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSplit {
    pub typical: Vec<String>,
    pub other: Vec<String>,
}

/// Build the keyed map: category → frame URI → score.
///
/// The URI is the lower-cased frame label behind the configured namespace
/// prefix.
pub fn keyed_scores(
    scores: &ScoreTable,
    namespace: &str,
) -> BTreeMap<String, BTreeMap<String, f64>> {
    scores
        .iter()
        .map(|(category, ranked)| {
            let keyed: BTreeMap<String, f64> = ranked
                .iter()
                .map(|(frame, score)| (format!("{namespace}{}", frame.to_lowercase()), *score))
                .collect();
            (category.clone(), keyed)
        })
        .collect()
}

/// Write one `typicality_scores_<category>.json` per category.
pub fn write_keyed_scores(
    scores: &ScoreTable,
    namespace: &str,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (category, keyed) in keyed_scores(scores, namespace) {
        let path = output_dir.join(format!("typicality_scores_{category}.json"));
        let json = serde_json::to_string_pretty(&keyed)
            .with_context(|| format!("serializing scores for {category}"))?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    info!(files = written.len(), "keyed score maps exported");
    Ok(written)
}

/// Partition each category's ranking into top-N "typical" frames and the
/// rest. The ranking is already sorted, so the split is a simple cut.
pub fn validation_split(scores: &ScoreTable, top_n: usize) -> BTreeMap<String, ValidationSplit> {
    scores
        .iter()
        .map(|(category, ranked)| {
            let cut = top_n.min(ranked.len());
            let typical = ranked[..cut].iter().map(|(f, _)| f.clone()).collect();
            let other = ranked[cut..].iter().map(|(f, _)| f.clone()).collect();
            (category.clone(), ValidationSplit { typical, other })
        })
        .collect()
}

/// Write the validation split to `typical_frames.json`.
pub fn write_validation_split(
    scores: &ScoreTable,
    top_n: usize,
    output_dir: &Path,
) -> Result<PathBuf> {
    let split = validation_split(scores, top_n);
    let path = output_dir.join("typical_frames.json");
    let json = serde_json::to_string_pretty(&split).context("serializing validation split")?;
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), top_n, "validation split exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PREMON_FN17;

    fn sample_scores() -> ScoreTable {
        [(
            "birth".to_string(),
            vec![
                ("Being_born".to_string(), 1.0),
                ("Giving".to_string(), 0.5),
                ("Taking".to_string(), 0.0),
            ],
        )]
        .into()
    }

    #[test]
    fn keyed_map_lowercases_and_prefixes() {
        let keyed = keyed_scores(&sample_scores(), PREMON_FN17);
        let birth = &keyed["birth"];
        assert_eq!(
            birth["http://premon.fbk.eu/resource/fn17-being_born"],
            1.0
        );
        assert_eq!(birth.len(), 3);
    }

    #[test]
    fn split_partitions_the_vocabulary() {
        let split = validation_split(&sample_scores(), 2);
        let birth = &split["birth"];
        assert_eq!(birth.typical, vec!["Being_born", "Giving"]);
        assert_eq!(birth.other, vec!["Taking"]);
    }

    #[test]
    fn split_with_large_top_n_has_empty_other() {
        let split = validation_split(&sample_scores(), 10);
        let birth = &split["birth"];
        assert_eq!(birth.typical.len(), 3);
        assert!(birth.other.is_empty());
    }
}
