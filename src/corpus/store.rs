// Corpus persistence: the corpus_info.json manifest and output folder.
//
// All file I/O for the corpus lives here; the analysis modules only ever
// see in-memory records.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::corpus::models::CorpusManifest;

const MANIFEST_FILE: &str = "corpus_info.json";

/// Create the output folder, wiping it first when `start_from_scratch`.
pub fn ensure_output_folder(path: &Path, start_from_scratch: bool) -> Result<()> {
    if start_from_scratch && path.is_dir() {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("removing output folder {}", path.display()))?;
        info!(path = %path.display(), "removed existing output folder");
    }
    if !path.is_dir() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("creating output folder {}", path.display()))?;
        info!(path = %path.display(), "created output folder");
    }
    Ok(())
}

/// Write the manifest to `<output_dir>/corpus_info.json`.
pub fn save_manifest(manifest: &CorpusManifest, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest).context("serializing corpus manifest")?;
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "corpus manifest saved");
    Ok(path)
}

/// Load the manifest persisted by a previous `load` run.
pub fn load_manifest(output_dir: &Path) -> Result<CorpusManifest> {
    let path = output_dir.join(MANIFEST_FILE);
    if !path.is_file() {
        anyhow::bail!(
            "no corpus manifest at {}.\n\
             Run `framesift load` first to build one.",
            path.display()
        );
    }
    let raw =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let manifest: CorpusManifest =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(manifest)
}
