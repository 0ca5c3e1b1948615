//! Test every word - comprehensive tree evaluation
//!
//! Solves each word found in the tree's leaves and collects guess statistics.

use crate::error::{JottoError, Result};
use crate::solver::Engine;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Words whose solve path did not end at a leaf holding them
    pub failed: Vec<String>,
    /// Guesses needed -> number of words
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Words needing the most guesses, worst first
    pub worst_words: Vec<(String, usize)>,
}

/// Solve every word in the loaded tree (or the first `limit` of them)
///
/// # Errors
/// Returns `JottoError::NotInitialized` if the engine has no tree.
pub fn run_test_all(engine: &Engine, limit: Option<usize>) -> Result<TestAllStatistics> {
    let root = engine.tree()?.root();
    let words: Vec<&String> = root
        .leaves()
        .into_iter()
        .flatten()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut results: Vec<(String, usize)> = Vec::with_capacity(words.len());
    let mut failed = Vec::new();
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let total_start = Instant::now();

    for (idx, &word) in words.iter().enumerate() {
        match engine.solve(word) {
            Ok(path) => {
                let guesses = path.guess_count();
                *guess_distribution.entry(guesses).or_insert(0) += 1;
                results.push((word.clone(), guesses));
            }
            Err(JottoError::BadWord(_)) => failed.push(word.clone()),
            Err(e) => return Err(e),
        }

        if idx % 10 == 0 && !results.is_empty() {
            let avg = results.iter().map(|(_, n)| n).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    let total_time = total_start.elapsed();

    let solved = results.len();
    let total_guesses: usize = results.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst_words = results.clone();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    Ok(TestAllStatistics {
        total_words: words.len(),
        solved,
        failed,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: results.iter().map(|(_, n)| *n).max().unwrap_or(0),
        min_guesses: results.iter().map(|(_, n)| *n).min().unwrap_or(0),
        worst_words,
    })
}
