// Analysis error taxonomy.
//
// Every variant is fatal: the run aborts, nothing is retried, and no
// partial output is written. The variants travel inside anyhow::Error;
// tests downcast to assert on the exact condition.

use std::fmt;

/// A fatal condition detected somewhere in the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A category lost every document to the minimum-frame filter.
    EmptyCategory { category: String, min_frames: u32 },
    /// A requested category identifier is absent from the corpus.
    UnknownCategory { category: String },
    /// Fewer than two unique category identifiers were requested.
    InsufficientCategories { requested: usize },
    /// A category yielded zero frames after sampling.
    EmptyFrameList { category: String },
    /// A vocabulary frame has zero occurrences across all categories:
    /// the frequency table and the count matrix disagree.
    UnseenFrame { frame: String },
    /// Every frame in a category carries the same raw score, so min-max
    /// normalization has no range to map onto.
    DegenerateScores { category: String },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyCategory {
                category,
                min_frames,
            } => write!(
                f,
                "category '{category}' has no documents with at least {min_frames} frames; \
                 lower min_frames_per_doc or check the corpus"
            ),
            AnalysisError::UnknownCategory { category } => {
                write!(f, "category '{category}' is not in the corpus")
            }
            AnalysisError::InsufficientCategories { requested } => write!(
                f,
                "contrastive analysis needs at least 2 unique categories, got {requested}"
            ),
            AnalysisError::EmptyFrameList { category } => {
                write!(f, "category '{category}' yielded no frames")
            }
            AnalysisError::UnseenFrame { frame } => {
                write!(f, "frame '{frame}' has no occurrences in any category")
            }
            AnalysisError::DegenerateScores { category } => write!(
                f,
                "all frames in category '{category}' share one score; \
                 min-max normalization is undefined"
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}
