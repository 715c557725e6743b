// Corpus assembly: the minimum-frame filter.

use anyhow::Result;
use tracing::info;

use crate::corpus::models::Corpus;
use crate::error::AnalysisError;

/// Drop every document whose frame count is strictly below `min_frames`.
///
/// Pure transformation: the input corpus is consumed and a filtered one
/// returned. A category left without any document is a configuration
/// error: the threshold is too strict for that category's data.
pub fn filter_short_documents(corpus: Corpus, min_frames: u32) -> Result<Corpus> {
    let mut filtered = Corpus::new();
    let mut removed = 0usize;

    for (category, documents) in corpus {
        let kept: Vec<_> = documents
            .into_iter()
            .filter(|doc| {
                let keep = doc.frame_frequency >= min_frames;
                if !keep {
                    removed += 1;
                }
                keep
            })
            .collect();
        if kept.is_empty() {
            return Err(AnalysisError::EmptyCategory {
                category,
                min_frames,
            }
            .into());
        }
        filtered.insert(category, kept);
    }

    info!(removed, min_frames, "dropped documents below frame threshold");
    Ok(filtered)
}
