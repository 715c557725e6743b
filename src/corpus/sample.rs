// Balanced corpus sampling.
//
// Larger categories would otherwise dominate the frame-frequency totals
// and bias the typicality metric, so every category is reduced to the
// smallest category's size before aggregation. Sampling is uniform,
// without replacement, and independent across categories.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::corpus::models::Corpus;

/// Reduce every category to `min(category sizes)` documents drawn
/// uniformly at random without replacement.
///
/// Generic over the random source: production passes a fresh OS-seeded
/// generator, tests a seeded `StdRng`.
pub fn sample_balanced<R: Rng + ?Sized>(corpus: &Corpus, rng: &mut R) -> Corpus {
    let smallest = corpus.values().map(Vec::len).min().unwrap_or(0);

    let sampled: Corpus = corpus
        .iter()
        .map(|(category, documents)| {
            let drawn = documents
                .choose_multiple(rng, smallest)
                .cloned()
                .collect::<Vec<_>>();
            (category.clone(), drawn)
        })
        .collect();

    for (category, documents) in &sampled {
        debug!(category = %category, sampled = documents.len(), "sampled reference texts");
    }
    sampled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::models::DocumentRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn docs(titles: &[&str]) -> Vec<DocumentRecord> {
        titles
            .iter()
            .map(|t| DocumentRecord {
                title: t.to_string(),
                frame_frequency: 1,
                frame_info: BTreeMap::new(),
            })
            .collect()
    }

    #[test]
    fn every_category_shrinks_to_the_minimum() {
        let corpus: Corpus = [
            ("a".to_string(), docs(&["a1", "a2", "a3", "a4", "a5"])),
            ("b".to_string(), docs(&["b1", "b2"])),
            ("c".to_string(), docs(&["c1", "c2", "c3"])),
        ]
        .into();

        let mut rng = StdRng::seed_from_u64(7);
        let sampled = sample_balanced(&corpus, &mut rng);

        assert_eq!(sampled.len(), 3);
        for documents in sampled.values() {
            assert_eq!(documents.len(), 2);
        }
    }

    #[test]
    fn samples_without_replacement_from_the_own_category() {
        let corpus: Corpus = [
            ("a".to_string(), docs(&["a1", "a2", "a3", "a4"])),
            ("b".to_string(), docs(&["b1", "b2", "b3"])),
        ]
        .into();

        let mut rng = StdRng::seed_from_u64(42);
        let sampled = sample_balanced(&corpus, &mut rng);

        for (category, documents) in &sampled {
            let titles: Vec<&str> = documents.iter().map(|d| d.title.as_str()).collect();
            let mut unique = titles.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), titles.len(), "duplicate draw in {category}");
            assert!(titles.iter().all(|t| t.starts_with(category.as_str())));
        }
    }

    #[test]
    fn equal_sizes_keep_every_document() {
        let corpus: Corpus = [
            ("a".to_string(), docs(&["a1", "a2"])),
            ("b".to_string(), docs(&["b1", "b2"])),
        ]
        .into();

        let mut rng = StdRng::seed_from_u64(1);
        let sampled = sample_balanced(&corpus, &mut rng);
        for (category, documents) in &sampled {
            assert_eq!(documents.len(), 2, "category {category} lost documents");
        }
    }
}
