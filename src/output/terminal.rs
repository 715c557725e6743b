// Colored terminal output for typicality rankings and corpus inspection.

use colored::Colorize;

use crate::analysis::frequency::FrequencyTable;
use crate::analysis::scoring::ScoreTable;
use crate::corpus::models::DocumentRecord;

/// Display the top of each category's ranking, with frequency context.
pub fn display_ranking(scores: &ScoreTable, frequencies: &FrequencyTable, top_n: usize) {
    let vocabulary_size = scores.values().next().map(Vec::len).unwrap_or(0);
    println!(
        "\n{}",
        format!(
            "=== Typicality ranking ({} categories, {} frames) ===",
            scores.len(),
            vocabulary_size
        )
        .bold()
    );

    for (category, ranked) in scores {
        println!("\n  {}", category.bold());
        println!(
            "  {:>4}  {:<32} {:>9}  {:>8}  {:>8}",
            "Rank".dimmed(),
            "Frame".dimmed(),
            "Score".dimmed(),
            "Abs".dimmed(),
            "Rel %".dimmed(),
        );
        println!("  {}", "-".repeat(68).dimmed());

        for (i, (frame, score)) in ranked.iter().take(top_n).enumerate() {
            let frequency = frequencies.get(category).and_then(|stats| stats.get(frame));
            println!(
                "  {:>4}. {:<32} {:>9.6}  {:>8}  {:>8.2}",
                i + 1,
                frame,
                score,
                frequency.map(|f| f.absolute).unwrap_or(0),
                frequency.map(|f| f.relative).unwrap_or(0.0),
            );
        }

        if ranked.len() > top_n {
            let tail = &ranked[ranked.len().saturating_sub(3)..];
            println!("  {}", "...".dimmed());
            for (frame, score) in tail {
                println!(
                    "  {:>4}  {:<32} {:>9.6}",
                    "",
                    frame.dimmed(),
                    score,
                );
            }
        }
    }
    println!();
}

/// Display one decoded document's annotations, for `inspect`.
pub fn display_document(record: &DocumentRecord) {
    let title = if record.title.is_empty() {
        "(untitled)"
    } else {
        record.title.as_str()
    };
    println!("\n{}", format!("=== {title} ===").bold());
    println!("  Annotated frames: {}", record.frame_frequency);
    if record.frame_info.len() != record.frame_frequency as usize {
        println!(
            "  {}",
            format!(
                "{} predicate(s) had no terms-layer entry and carry no annotation",
                record.frame_frequency as usize - record.frame_info.len()
            )
            .dimmed()
        );
    }
    println!();

    for (term_id, annotation) in &record.frame_info {
        println!(
            "  {:<8} {:<28} {} ({})",
            term_id.dimmed(),
            annotation.frame.bold(),
            annotation.lemma,
            annotation.pos,
        );
        if let Some(sentence) = &annotation.sentence {
            println!("           sentence {sentence}");
        }
        if let Some(lemma) = &annotation.article.lemma {
            let kind = if annotation.article.definite == Some(true) {
                "definite"
            } else {
                "indefinite"
            };
            println!("           article: {lemma} ({kind})");
        }
        if let Some(role) = &annotation.compound.function {
            let combined = annotation.compound.lemma.as_deref().unwrap_or("?");
            println!("           compound {role:?}: {combined}");
        }
    }
    println!();
}
