// Frame frequency aggregation.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Absolute count of a frame within a category, and its share of the
/// category's total frame occurrences as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameFrequency {
    pub absolute: u32,
    pub relative: f64,
}

/// category → frame label → frequency.
pub type FrequencyTable = BTreeMap<String, BTreeMap<String, FrameFrequency>>;

/// Compute absolute and relative frequency per frame per category.
///
/// A category with zero frames signals malformed input upstream and
/// aborts the run.
pub fn frequency_table(frames_by_category: &BTreeMap<String, Vec<String>>) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    for (category, frames) in frames_by_category {
        if frames.is_empty() {
            return Err(AnalysisError::EmptyFrameList {
                category: category.clone(),
            }
            .into());
        }

        let total = frames.len() as f64;
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for frame in frames {
            *counts.entry(frame.as_str()).or_insert(0) += 1;
        }

        let stats: BTreeMap<String, FrameFrequency> = counts
            .into_iter()
            .map(|(frame, absolute)| {
                (
                    frame.to_string(),
                    FrameFrequency {
                        absolute,
                        relative: (absolute as f64 / total) * 100.0,
                    },
                )
            })
            .collect();
        table.insert(category.clone(), stats);
    }

    Ok(table)
}
