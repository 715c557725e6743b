// NAF decoding.
//
// NAF is a layered standoff format: the text layer holds word forms, the
// terms layer lemma/POS per term, the deps layer dependency arcs, and the
// srl layer frame predicates pointing back at term ids. We deserialize the
// layers we need with quick-xml and join them into one DocumentRecord.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::corpus::models::{
    ArticleInfo, CompoundInfo, CompoundRole, DocumentRecord, FrameAnnotation,
};

/// Determiner lemmas that count as articles.
const ARTICLES: [&str; 3] = ["a", "an", "the"];

#[derive(Debug, Deserialize)]
struct Naf {
    #[serde(rename = "nafHeader")]
    header: Option<NafHeader>,
    text: Option<TextLayer>,
    terms: Option<TermsLayer>,
    deps: Option<DepsLayer>,
    srl: Option<SrlLayer>,
}

#[derive(Debug, Deserialize)]
struct NafHeader {
    #[serde(rename = "fileDesc")]
    file_desc: Option<FileDesc>,
}

#[derive(Debug, Deserialize)]
struct FileDesc {
    #[serde(rename = "@title")]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextLayer {
    #[serde(rename = "wf", default)]
    word_forms: Vec<WordForm>,
}

#[derive(Debug, Deserialize)]
struct WordForm {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@sent")]
    sent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TermsLayer {
    #[serde(rename = "term", default)]
    terms: Vec<Term>,
}

#[derive(Debug, Deserialize)]
struct Term {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@lemma")]
    lemma: Option<String>,
    #[serde(rename = "@pos")]
    pos: Option<String>,
    span: Option<Span>,
}

#[derive(Debug, Deserialize)]
struct Span {
    #[serde(rename = "target", default)]
    targets: Vec<Target>,
}

#[derive(Debug, Deserialize)]
struct Target {
    #[serde(rename = "@id")]
    id: String,
}

#[derive(Debug, Deserialize)]
struct DepsLayer {
    #[serde(rename = "dep", default)]
    deps: Vec<Dep>,
}

#[derive(Debug, Deserialize)]
struct Dep {
    #[serde(rename = "@rfunc")]
    rfunc: Option<String>,
    #[serde(rename = "@from")]
    from: Option<String>,
    #[serde(rename = "@to")]
    to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SrlLayer {
    #[serde(rename = "predicate", default)]
    predicates: Vec<Predicate>,
}

#[derive(Debug, Deserialize)]
struct Predicate {
    #[serde(rename = "externalReferences")]
    external_references: Option<ExternalReferences>,
    span: Option<Span>,
}

#[derive(Debug, Deserialize)]
struct ExternalReferences {
    #[serde(rename = "externalRef", default)]
    refs: Vec<ExternalRef>,
}

#[derive(Debug, Deserialize)]
struct ExternalRef {
    #[serde(rename = "@reference")]
    reference: Option<String>,
}

/// Lexical info joined per term id from the terms layer.
struct TermEntry {
    lemma: String,
    pos: String,
    word_form: Option<String>,
}

/// Which side of a compound a term sits on, and its counterpart term id.
struct CompoundLink {
    role: CompoundRole,
    counterpart: String,
}

/// Decode one NAF document into a DocumentRecord.
///
/// `frame_namespace` is the URI prefix stripped off frame references to
/// obtain the bare frame label (first letter upper-cased).
pub fn decode_naf(xml: &str, frame_namespace: &str) -> Result<DocumentRecord> {
    let naf: Naf = from_str(xml).context("parsing NAF xml")?;

    let title = naf
        .header
        .and_then(|h| h.file_desc)
        .and_then(|d| d.title)
        .unwrap_or_default();

    // srl layer: predicate target term id → frame label. A term evoking
    // several predicates collapses to one entry, so frame_frequency
    // counts annotated terms, not predicate elements.
    let mut frames: BTreeMap<String, String> = BTreeMap::new();
    for predicate in naf.srl.map(|s| s.predicates).unwrap_or_default() {
        let reference = predicate
            .external_references
            .and_then(|e| e.refs.into_iter().next())
            .and_then(|r| r.reference);
        let target = predicate
            .span
            .and_then(|s| s.targets.into_iter().next())
            .map(|t| t.id);
        if let (Some(uri), Some(term_id)) = (reference, target) {
            frames.insert(term_id, frame_label(&uri, frame_namespace));
        }
    }

    // terms layer: term id → lemma/POS/word-form id.
    let mut term_entries: BTreeMap<String, TermEntry> = BTreeMap::new();
    for term in naf.terms.map(|t| t.terms).unwrap_or_default() {
        let word_form = term
            .span
            .and_then(|s| s.targets.into_iter().next())
            .map(|t| t.id);
        term_entries.insert(
            term.id,
            TermEntry {
                lemma: term.lemma.unwrap_or_default(),
                pos: term.pos.unwrap_or_default(),
                word_form,
            },
        );
    }

    // text layer: word-form id → sentence id.
    let mut sentences: BTreeMap<String, String> = BTreeMap::new();
    for wf in naf.text.map(|t| t.word_forms).unwrap_or_default() {
        if let Some(sent) = wf.sent {
            sentences.insert(wf.id, sent);
        }
    }

    // deps layer: determiner arcs and compound arcs.
    let mut determiners: BTreeMap<String, String> = BTreeMap::new();
    let mut compounds: BTreeMap<String, CompoundLink> = BTreeMap::new();
    for dep in naf.deps.map(|d| d.deps).unwrap_or_default() {
        let (Some(rfunc), Some(from), Some(to)) = (dep.rfunc, dep.from, dep.to) else {
            continue;
        };
        match rfunc.as_str() {
            "det" => {
                determiners.insert(from, to);
            }
            "compound" => {
                compounds.insert(
                    from.clone(),
                    CompoundLink {
                        role: CompoundRole::Head,
                        counterpart: to.clone(),
                    },
                );
                compounds.insert(
                    to,
                    CompoundLink {
                        role: CompoundRole::Modifier,
                        counterpart: from,
                    },
                );
            }
            _ => {}
        }
    }

    // Join the layers. Predicates whose term id is missing from the terms
    // layer still count towards frame_frequency but produce no entry.
    let frame_frequency = frames.len() as u32;
    let mut frame_info: BTreeMap<String, FrameAnnotation> = BTreeMap::new();

    for (term_id, frame) in &frames {
        let Some(entry) = term_entries.get(term_id) else {
            continue;
        };

        let sentence = entry
            .word_form
            .as_ref()
            .and_then(|wf| sentences.get(wf))
            .cloned();

        let article = match determiners
            .get(term_id)
            .and_then(|det_id| term_entries.get(det_id))
        {
            Some(det) if ARTICLES.contains(&det.lemma.as_str()) => ArticleInfo {
                definite: Some(det.lemma == "the"),
                lemma: Some(det.lemma.clone()),
            },
            _ => ArticleInfo::default(),
        };

        let compound = match compounds.get(term_id) {
            Some(link) => {
                let counterpart = term_entries.get(&link.counterpart).map(|t| t.lemma.as_str());
                let lemma = counterpart.map(|other| match link.role {
                    CompoundRole::Head => format!("{other} {}", entry.lemma),
                    CompoundRole::Modifier => format!("{} {other}", entry.lemma),
                });
                CompoundInfo {
                    function: Some(link.role),
                    lemma,
                }
            }
            None => CompoundInfo::default(),
        };

        frame_info.insert(
            term_id.clone(),
            FrameAnnotation {
                frame: frame.clone(),
                lemma: entry.lemma.clone(),
                pos: entry.pos.clone(),
                sentence,
                article,
                compound,
            },
        );
    }

    Ok(DocumentRecord {
        title,
        frame_frequency,
        frame_info,
    })
}

/// Strip the namespace prefix off a frame URI and upper-case the first
/// letter: ".../fn17-giving" → "Giving". URIs outside the configured
/// namespace fall back to the final path segment.
fn frame_label(uri: &str, namespace: &str) -> String {
    let raw = uri
        .strip_prefix(namespace)
        .unwrap_or_else(|| uri.rsplit('/').next().unwrap_or(uri));
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
