//! Tree build command
//!
//! Builds the decision tree for a dictionary behind a spinner and reports how
//! long it took.

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::solver::{Engine, TreeStats};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};

/// Summary of a finished build
#[derive(Debug, Clone, Copy)]
pub struct BuildReport {
    /// Distinct letter signatures in the dictionary
    pub signatures: usize,
    pub words: usize,
    pub stats: TreeStats,
    pub duration: Duration,
}

/// Build an engine for `dict`, showing a spinner on a terminal
///
/// # Errors
/// Returns `JottoError::EmptyDictionary` if the dictionary is empty.
pub fn build_engine(dict: &Dictionary) -> Result<(Engine, BuildReport)> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Building tree for {} words ({} signatures)",
        dict.word_count(),
        dict.len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let engine = Engine::from_dictionary(dict);
    let duration = start.elapsed();
    spinner.finish_and_clear();

    let engine = engine?;
    let report = BuildReport {
        signatures: dict.len(),
        words: dict.word_count(),
        stats: engine.stats()?,
        duration,
    };
    Ok((engine, report))
}

/// Build the tree for `dict` and write it to `output`
///
/// # Errors
/// Returns `JottoError::EmptyDictionary` if the dictionary is empty or
/// `JottoError::BadFile` if the tree cannot be written.
pub fn build_and_save<P: AsRef<Path>>(dict: &Dictionary, output: P) -> Result<BuildReport> {
    let (engine, report) = build_engine(dict)?;
    engine.save_tree(output)?;
    Ok(report)
}
