//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BuildReport, TestAllStatistics};
use crate::solver::SolvePath;
use crate::solver::entropy::MATCH_BUCKETS;
use colored::Colorize;

/// Print the replies that identify a word
pub fn print_solve_path(path: &SolvePath, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        path.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in path.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} -> {} in common",
            i + 1,
            step.guess.to_uppercase(),
            step.matches.to_string().bright_white().bold()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Info gained: {:.3} bits ({ratio:.1}x reduction)", ratio.log2());
            }
        }
    }

    if path.anagrams.len() > 1 {
        println!(
            "\nAnagrams left: {}",
            path.anagrams
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let guesses = path.guess_count();
    println!();
    println!(
        "{}",
        format!(
            "✅ Found in {guesses} {}",
            if guesses == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!(
        "\n📊 As a first guess against {} words ({} signatures):",
        result.total_candidates, result.signatures
    );
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} words remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} words", result.max_bucket);
    println!("   Rank:        {} of {}", result.rank, result.signatures);

    println!("\n📈 {}", "Replies:".bright_cyan().bold());
    let largest = result.buckets.iter().copied().max().unwrap_or(0);
    for (matches, &count) in result.buckets.iter().enumerate() {
        let bar = create_progress_bar(count as f64, largest as f64, 30);
        println!("   {matches}: {} {count:4}", bar.green());
    }

    if let Some((word, entropy)) = &result.best {
        println!(
            "\n   Best opening: {} ({entropy:.3} bits)",
            word.to_uppercase().bright_green()
        );
    }
}

/// Print the outcome of building a tree
pub fn print_build_report(report: &BuildReport) {
    println!(
        "{} {} words, {} signatures in {} ms",
        "Built tree:".bright_cyan().bold(),
        report.words,
        report.signatures,
        report.duration.as_millis()
    );
    println!(
        "  {} nodes ({} interior, {} leaves), deepest leaf after {} replies",
        report.stats.nodes, report.stats.interior, report.stats.leaves, report.stats.max_depth
    );
}

/// Print test-all statistics with beautiful formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words > 0 {
        println!(
            "  Successfully solved: {} {}",
            stats.solved,
            format!(
                "({:.1}%)",
                stats.solved as f64 / stats.total_words as f64 * 100.0
            )
            .green()
        );
    }
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            stats.failed.join(", ").red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses.to_string().green(),
        stats.max_guesses.to_string().yellow()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {guesses:2} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
        }
    }

    println!("\n🧮 Information Theory Metrics");
    let total_bits = (stats.total_words.max(1) as f64).log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    let max_bits = (MATCH_BUCKETS as f64).log2();
    println!("  Total information:   {total_bits:.2} bits");
    println!("  Bits per guess:      {bits_per_guess:.2} bits");
    println!(
        "  Efficiency:          {:.1}% (vs ceiling of {max_bits:.2} bits/guess)",
        bits_per_guess / max_bits * 100.0
    );

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }
}
