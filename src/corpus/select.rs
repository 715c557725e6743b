// Category selection: restrict the corpus to the requested identifiers.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::corpus::models::Corpus;
use crate::error::AnalysisError;

/// Restrict the corpus to the requested category identifiers.
///
/// Duplicates in the request collapse; at least two unique identifiers
/// must remain, and each must exist in the corpus.
pub fn select_categories(corpus: &Corpus, requested: &[String]) -> Result<Corpus> {
    let unique: BTreeSet<&String> = requested.iter().collect();
    if unique.len() < 2 {
        return Err(AnalysisError::InsufficientCategories {
            requested: unique.len(),
        }
        .into());
    }

    for category in &unique {
        if !corpus.contains_key(*category) {
            return Err(AnalysisError::UnknownCategory {
                category: (*category).clone(),
            }
            .into());
        }
    }

    Ok(corpus
        .iter()
        .filter(|(category, _)| unique.contains(category))
        .map(|(category, documents)| (category.clone(), documents.clone()))
        .collect())
}
