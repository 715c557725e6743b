use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default namespace prefix for frame URIs in the keyed-map export.
pub const PREMON_FN17: &str = "http://premon.fbk.eu/resource/fn17-";

/// Run configuration, loaded once from a JSON file in main and passed down
/// explicitly; components never read ambient settings.
///
/// Every field has a default so a config file only needs to override what
/// differs from a standard run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory laid out as `<corpus_dir>/<category>/<doc>.naf`.
    pub corpus_dir: PathBuf,
    /// Where the corpus manifest and analysis exports land.
    pub output_dir: PathBuf,
    /// Documents with fewer annotated frames than this are dropped at load.
    pub min_frames_per_doc: u32,
    /// Category identifiers to compare in `analyze` (at least 2 unique).
    pub event_types: Vec<String>,
    /// Namespace prefix for frame URIs in the keyed-map export.
    pub frame_namespace: String,
    /// How many top-ranked frames count as "typical" in the validation split.
    pub top_n_typical: usize,
    /// Wipe and recreate the output folder before writing.
    pub start_from_scratch: bool,
    /// Diagnostic verbosity, 0-5. Controls logging only, never behavior.
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("corpus"),
            output_dir: PathBuf::from("output"),
            min_frames_per_doc: 10,
            event_types: Vec::new(),
            frame_namespace: PREMON_FN17.to_string(),
            top_n_typical: 10,
            start_from_scratch: false,
            verbose: 1,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Check that the config names categories to compare.
    /// Call this before `analyze` when no `--categories` override is given.
    pub fn require_event_types(&self) -> Result<()> {
        if self.event_types.is_empty() {
            anyhow::bail!(
                "no event_types in the config and no --categories given.\n\
                 Add at least two category identifiers to compare."
            );
        }
        Ok(())
    }

    /// Default tracing filter directive for the configured verbosity.
    /// RUST_LOG still overrides this.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "framesift=error",
            1 => "framesift=warn",
            2 => "framesift=info",
            3 | 4 => "framesift=debug",
            _ => "framesift=trace",
        }
    }
}
