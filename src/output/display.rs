//! Display functions for command results

use super::formatters::{format_indices, format_tile, percentile_bar};
use super::summary::{
    expected_losses_text, expected_wins_text, rating_text, score_text, total_score,
    total_score_with_best, upset_losses_text, upset_wins_text,
};
use crate::commands::{DecodeResult, DefineResult, MatchSummary, ScoreResult, SubmitResult, VerifyReport};
use crate::submission::WordScore;
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print a dictionary lookup
pub fn print_definition(result: &DefineResult) {
    let Some(definition) = &result.definition else {
        println!(
            "{}",
            format!("❌ '{}' is not in the dictionary", result.query).red()
        );
        return;
    };

    println!(
        "\n{} {}",
        definition.word.to_uppercase().bright_yellow().bold(),
        format!("({})", definition.part_of_speech).bright_black()
    );
    if let Some(see) = &definition.see_word {
        println!("  see {}", see.to_uppercase().bright_cyan());
    }
    println!("  {}", definition.definition);
}

/// Print a match and its sample summary
pub fn print_match(summary: &MatchSummary) {
    print_header(&format!("MATCH {}", summary.index));

    println!("\n🔤 {}", "Tiles:".bright_cyan().bold());
    for (i, tile) in summary.game.tiles.iter().enumerate() {
        let text = format_tile(tile);
        let text = if tile.bonus.is_some() {
            text.bright_yellow()
        } else {
            text.normal()
        };
        println!("   {i:2}: {text}");
    }

    println!("\n📊 {}", "Opponents:".bright_cyan().bold());
    println!("   Players:      {}", summary.real_samples);
    println!("   Synthetic:    {}", summary.synthetic_samples);
    if let Some(best) = summary.best_score {
        println!("   Best score:   {}", best.to_string().green());
    }
    if let Some(median) = summary.median_score {
        println!("   Median score: {median}");
    }
    if let Some(rating) = summary.average_rating {
        println!("   Avg rating:   {rating:.1}");
    }
}

fn print_word(label: &str, word: &WordScore) {
    let status = if word.valid { "✅".normal() } else { "❌".normal() };
    let text = if word.text.is_empty() {
        "(empty)".bright_black()
    } else if word.valid {
        word.text.to_uppercase().green().bold()
    } else {
        word.text.to_uppercase().red()
    };
    println!("   {label}: {status} {text} ({} pts)", word.points);
}

/// Print two scored words
pub fn print_move_score(result: &ScoreResult) {
    print_header(&format!("MATCH {}", result.index));

    println!();
    print_word("Word 1", &result.scored.word1);
    print_word("Word 2", &result.scored.word2);

    let total = result.scored.total();
    let line = match result.best_sample {
        Some(best) => total_score_with_best(total, u32::try_from(best).unwrap_or(0)),
        None => total_score(total),
    };
    println!("\n{}", line.bright_yellow().bold());

    for definition in &result.definitions {
        println!("   {definition}");
    }
}

/// Print a decoded words encoding
pub fn print_decoded(result: &DecodeResult) {
    println!(
        "{} ({} tiles)",
        format!("{:#x}", result.encoding).bright_yellow(),
        result.tile_count
    );
    println!("   Word 1: {}", format_indices(&result.word1));
    println!("   Word 2: {}", format_indices(&result.word2));
}

/// Print the outcome of a submission and its history record
pub fn print_submission(result: &SubmitResult, history_json: &str) {
    let submission = &result.submission;
    let update = &submission.update;

    print_header("SUBMISSION");

    if let Some(warning) = result.warning {
        println!("\n⚠️  {}", warning.yellow());
    }
    println!();
    print_word("Word 1", &result.scored.word1);
    print_word("Word 2", &result.scored.word2);

    println!(
        "\n{}",
        score_text(submission.entry.score, update.percentile as i32)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Percentile: [{}] {:.1}",
        percentile_bar(update.percentile, 30).green(),
        update.percentile
    );
    println!(
        "{}",
        rating_text(submission.previous_rating, update.new_rating, result.matches_played).bold()
    );

    for (count, text) in [
        (update.upset_wins, upset_wins_text(update.upset_wins)),
        (update.expected_wins, expected_wins_text(update.expected_wins)),
        (update.expected_losses, expected_losses_text(update.expected_losses)),
        (update.upset_losses, upset_losses_text(update.upset_losses)),
    ] {
        if count > 0 {
            println!("   {text}");
        }
    }

    println!("\n📝 {}", "History record:".bright_cyan().bold());
    println!("{history_json}");
}

/// Print archive verification results
pub fn print_verify_report(report: &VerifyReport) {
    print_header("VERIFICATION RESULTS");

    println!("\n📊 {}", "Archive:".bright_cyan().bold());
    println!("   Matches:          {}", report.matches);
    println!("   Samples:          {}", report.samples);
    println!("   Encodings checked: {}", report.encodings_checked);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.is_clean() {
        println!("\n{}", "✅ All stored words match their scores".green().bold());
        return;
    }

    if !report.score_mismatches.is_empty() {
        println!(
            "\n{}",
            format!("❌ {} score mismatches", report.score_mismatches.len())
                .red()
                .bold()
        );
        for mismatch in report.score_mismatches.iter().take(20) {
            println!(
                "   match {} sample {}: recorded {}, computed {}",
                mismatch.match_index, mismatch.sample_index, mismatch.recorded, mismatch.computed
            );
        }
    }

    if !report.failures.is_empty() {
        println!(
            "\n{}",
            format!("❌ {} failures", report.failures.len()).red().bold()
        );
        for failure in report.failures.iter().take(20) {
            match failure.sample_index {
                Some(sample) => println!(
                    "   match {} sample {sample}: {}",
                    failure.match_index, failure.reason
                ),
                None => println!("   match {}: {}", failure.match_index, failure.reason),
            }
        }
    }
}
