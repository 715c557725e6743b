use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use framesift::analysis::{frames, frequency, scoring};
use framesift::config::Config;
use framesift::corpus::models::CorpusManifest;
use framesift::corpus::{assemble, discover, sample, select, store};
use framesift::naf::decode::decode_naf;
use framesift::{output, status};

/// Framesift: contrastive frame-typicality analysis.
///
/// Decodes a corpus of NAF-annotated documents grouped by event-type
/// category, and ranks which semantic frames are characteristic of each
/// category relative to the others.
#[derive(Parser)]
#[command(name = "framesift", version, about)]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, default_value = "framesift.json")]
    config: PathBuf,

    /// Override the config's verbosity (0-5)
    #[arg(long)]
    verbose: Option<u8>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode the corpus directory, drop short documents, persist the manifest
    Load,

    /// Run the contrastive typicality analysis over the persisted corpus
    Analyze {
        /// Comma-separated category identifiers (overrides the config's event_types)
        #[arg(long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Seed the sampler for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Decode a single NAF file and print its frame annotations
    Inspect {
        /// Path to the .naf document
        file: PathBuf,
    },

    /// Show stats for the persisted corpus
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The default config path may be absent; run on defaults then. An
    // explicitly named config file must exist.
    let default_path = cli.config == PathBuf::from("framesift.json");
    let mut config = if default_path && !cli.config.exists() {
        Config::default()
    } else {
        Config::from_file(&cli.config)?
    };
    if let Some(verbose) = cli.verbose {
        config.verbose = verbose;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .init();

    match cli.command {
        Commands::Load => {
            println!("Decoding corpus from {}...", config.corpus_dir.display());

            let corpus = discover::discover_corpus(&config.corpus_dir, &config.frame_namespace)?;
            let filtered = assemble::filter_short_documents(corpus, config.min_frames_per_doc)?;

            let manifest = CorpusManifest {
                loaded_at: chrono::Utc::now().to_rfc3339(),
                min_frames_per_doc: config.min_frames_per_doc,
                categories: filtered,
            };

            store::ensure_output_folder(&config.output_dir, config.start_from_scratch)?;
            let path = store::save_manifest(&manifest, &config.output_dir)?;

            let documents: usize = manifest.categories.values().map(Vec::len).sum();
            println!("\n{}", "Corpus loaded.".bold());
            println!("  Categories: {}", manifest.categories.len());
            println!("  Documents:  {documents}");
            println!("  Manifest:   {}", path.display());
            println!("\nNext step: framesift analyze");
        }

        Commands::Analyze { categories, seed } => {
            let requested = if categories.is_empty() {
                config.require_event_types()?;
                config.event_types.clone()
            } else {
                categories
            };

            let manifest = store::load_manifest(&config.output_dir)?;
            let selected = select::select_categories(&manifest.categories, &requested)?;

            let mut rng = match seed {
                Some(seed) => {
                    info!(seed, "sampling with a fixed seed");
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_os_rng(),
            };
            let sampled = sample::sample_balanced(&selected, &mut rng);

            let flattened = frames::flatten_frames(&sampled);
            let frequencies = frequency::frequency_table(&flattened)?;
            let scores = scoring::score_typicality(&sampled, &flattened, &frequencies)?;

            store::ensure_output_folder(&config.output_dir, false)?;
            let sorted_ids: Vec<String> = scores.keys().cloned().collect();
            let rows = output::table::score_rows(&scores, &frequencies);
            let csv_path = output::table::write_csv(&rows, &sorted_ids, &config.output_dir)?;
            let json_paths = output::json::write_keyed_scores(
                &scores,
                &config.frame_namespace,
                &config.output_dir,
            )?;
            let split_path = output::json::write_validation_split(
                &scores,
                config.top_n_typical,
                &config.output_dir,
            )?;

            output::terminal::display_ranking(&scores, &frequencies, config.top_n_typical);

            println!("{}", "Analysis complete.".bold());
            println!("  Tabular scores:   {}", csv_path.display());
            println!("  Keyed maps:       {} files", json_paths.len());
            println!("  Validation split: {}", split_path.display());
        }

        Commands::Inspect { file } => {
            let xml = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let record = decode_naf(&xml, &config.frame_namespace)?;
            output::terminal::display_document(&record);
        }

        Commands::Status => {
            let manifest = store::load_manifest(&config.output_dir)?;
            status::show(&manifest);
        }
    }

    Ok(())
}
