// Corpus discovery.
//
// Walks a corpus directory laid out as <corpus_dir>/<category>/<doc>.naf,
// decodes every document, and groups the records by category directory.
// Paths are sorted before decoding so document order, and with it the
// frame counting order downstream, is stable across runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::corpus::models::Corpus;
use crate::naf::decode::decode_naf;

/// Decode every NAF document under `corpus_dir` into a category-keyed corpus.
///
/// Fails on the first unreadable or malformed document; a broken corpus
/// file is a data problem to fix, not something to paper over.
pub fn discover_corpus(corpus_dir: &Path, frame_namespace: &str) -> Result<Corpus> {
    let categories = category_dirs(corpus_dir)?;
    if categories.is_empty() {
        anyhow::bail!(
            "no category directories under {}.\n\
             Expected a layout of <corpus_dir>/<category>/<doc>.naf",
            corpus_dir.display()
        );
    }

    let files_per_category: Vec<(String, Vec<PathBuf>)> = categories
        .into_iter()
        .map(|(category, dir)| Ok((category, naf_files(&dir)?)))
        .collect::<Result<_>>()?;

    let total: usize = files_per_category.iter().map(|(_, f)| f.len()).sum();
    let progress = ProgressBar::new(total as u64);

    let mut corpus = Corpus::new();
    for (category, files) in files_per_category {
        progress.set_message(category.clone());
        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            let xml = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let record = decode_naf(&xml, frame_namespace)
                .with_context(|| format!("decoding {}", path.display()))?;
            documents.push(record);
            progress.inc(1);
        }
        debug!(category = %category, documents = documents.len(), "decoded category");
        corpus.insert(category, documents);
    }
    progress.finish_and_clear();

    info!(
        categories = corpus.len(),
        documents = total,
        "corpus decoded"
    );
    Ok(corpus)
}

/// Category subdirectories of the corpus dir, sorted by name.
fn category_dirs(corpus_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    let entries = std::fs::read_dir(corpus_dir)
        .with_context(|| format!("listing corpus dir {}", corpus_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            dirs.push((name, entry.path()));
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// The .naf files directly inside one category directory, sorted by name.
fn naf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "naf") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
