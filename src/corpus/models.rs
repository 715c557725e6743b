// Record types for annotated documents.
//
// These are the in-memory shapes the whole pipeline works with. They are
// built once by the NAF decoder and never mutated afterwards. Keeping them
// separate from the decoding and I/O code lets the analysis modules depend
// on plain data only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Role of a term inside a compound word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundRole {
    Head,
    Modifier,
}

/// Determiner info for a predicate. Only the articles a/an/the are
/// recorded; any other determiner leaves both fields None.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleInfo {
    pub definite: Option<bool>,
    pub lemma: Option<String>,
}

/// Compound-word info for a predicate. `lemma` is the combined
/// "<modifier> <head>" form when both halves resolve to a lemma.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundInfo {
    pub function: Option<CompoundRole>,
    pub lemma: Option<String>,
}

/// One annotated predicate: the frame evoked plus the lexical context of
/// the term that evokes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameAnnotation {
    pub frame: String,
    pub lemma: String,
    pub pos: String,
    /// Sentence identifier from the NAF text layer, when the word form
    /// could be located in a sentence.
    pub sentence: Option<String>,
    pub article: ArticleInfo,
    pub compound: CompoundInfo,
}

/// One decoded document: its title, how many frame predicates it carries,
/// and the per-annotation metadata keyed by term id.
///
/// `frame_frequency` counts every predicate target in the srl layer, also
/// the ones whose term id never joins against the terms layer; those
/// carry no `frame_info` entry, so the count can exceed the map size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    pub frame_frequency: u32,
    pub frame_info: BTreeMap<String, FrameAnnotation>,
}

/// The corpus: category identifier → documents of that category.
///
/// BTreeMap keeps category iteration deterministic and makes the persisted
/// JSON sorted by key.
pub type Corpus = BTreeMap<String, Vec<DocumentRecord>>;

/// Persisted form of a loaded-and-filtered corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusManifest {
    /// RFC 3339 timestamp of the load run.
    pub loaded_at: String,
    /// The minimum-frame threshold the corpus was filtered with.
    pub min_frames_per_doc: u32,
    pub categories: Corpus,
}
