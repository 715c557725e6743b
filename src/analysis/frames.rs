// Frame flattening: category documents to bags of frame labels.

use std::collections::BTreeMap;

use tracing::debug;

use crate::corpus::models::{Corpus, DocumentRecord};

/// The frame labels of one document, in annotation-id order.
pub fn document_frames(document: &DocumentRecord) -> Vec<String> {
    document
        .frame_info
        .values()
        .map(|annotation| annotation.frame.clone())
        .collect()
}

/// Flatten each category's documents into one ordered list of frame labels.
///
/// The order is document iteration order, then annotation order within
/// each document. It carries no linguistic meaning and is only used for
/// counting.
pub fn flatten_frames(corpus: &Corpus) -> BTreeMap<String, Vec<String>> {
    let flattened: BTreeMap<String, Vec<String>> = corpus
        .iter()
        .map(|(category, documents)| {
            let frames: Vec<String> = documents.iter().flat_map(document_frames).collect();
            (category.clone(), frames)
        })
        .collect();

    for (category, frames) in &flattened {
        debug!(category = %category, frames = frames.len(), "flattened frames");
    }
    flattened
}
