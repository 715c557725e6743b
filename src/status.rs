// Corpus status display: what a persisted manifest contains.

use colored::Colorize;

use crate::corpus::models::CorpusManifest;

/// Print per-category document and frame counts for a loaded manifest.
pub fn show(manifest: &CorpusManifest) {
    println!("\n{}", "=== Corpus status ===".bold());
    println!("  Loaded at:        {}", manifest.loaded_at);
    println!("  Frame threshold:  {}", manifest.min_frames_per_doc);
    println!("  Categories:       {}", manifest.categories.len());
    println!();
    println!(
        "  {:<24} {:>10} {:>12}",
        "Category".dimmed(),
        "Documents".dimmed(),
        "Frames".dimmed(),
    );
    println!("  {}", "-".repeat(48).dimmed());

    for (category, documents) in &manifest.categories {
        let frames: u64 = documents.iter().map(|d| u64::from(d.frame_frequency)).sum();
        println!("  {:<24} {:>10} {:>12}", category, documents.len(), frames);
    }

    let smallest = manifest
        .categories
        .values()
        .map(Vec::len)
        .min()
        .unwrap_or(0);
    println!(
        "\n  A balanced sample draws {} documents per category.\n",
        smallest.to_string().bold()
    );
}
