//! Jotto Solver - CLI
//!
//! Plays Jotto against you using a decision tree built by maximizing the
//! Shannon entropy of every guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use jotto_solver::{
    commands::{analyze_word, build_and_save, build_engine, run_play, run_test_all},
    dictionary::{Dictionary, loader::load_from_file},
    output::{
        print_analysis_result, print_build_report, print_solve_path, print_test_all_statistics,
    },
    solver::Engine,
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "jotto_solver",
    about = "Jotto solver driven by a precomputed entropy-guided decision tree",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list to build the tree from (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Load a previously saved tree instead of building one
    #[arg(short = 't', long, global = true)]
    tree: Option<PathBuf>,

    /// Seed for guess selection among anagrams
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): think of a word and answer my guesses
    Play,

    /// Build the decision tree and save it to a file
    Build {
        /// Where to write the tree
        output: PathBuf,
    },

    /// Show the replies that identify a specific word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts at every step
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a word as the opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve every word in the tree and report statistics
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut engine = open_engine(&cli)?;
            run_play(&mut engine, io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
        Commands::Build { output } => run_build_command(&cli, &output),
        Commands::Solve { word, verbose } => {
            let engine = open_engine(&cli)?;
            let path = engine
                .solve(&word)
                .with_context(|| format!("cannot solve {word:?}"))?;
            print_solve_path(&path, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let dict = load_dictionary(cli.wordlist.as_deref())?;
            let result = analyze_word(&word, &dict)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => run_test_all_command(&cli, limit),
    }
}

/// Load the word list given with `-w`, or the embedded one
fn load_dictionary(wordlist: Option<&Path>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Dictionary::embedded().context("embedded word list is empty"),
    }
}

/// Open a saved tree if `-t` was given, otherwise build one
fn open_engine(cli: &Cli) -> Result<Engine> {
    let engine = if let Some(path) = &cli.tree {
        Engine::open_from_saved_tree(path)
            .with_context(|| format!("failed to load tree {}", path.display()))?
    } else {
        let dict = load_dictionary(cli.wordlist.as_deref())?;
        let (engine, report) = build_engine(&dict)?;
        print_build_report(&report);
        engine
    };

    Ok(match cli.seed {
        Some(seed) => engine.with_seed(seed),
        None => engine,
    })
}

fn run_build_command(cli: &Cli, output: &Path) -> Result<()> {
    let dict = load_dictionary(cli.wordlist.as_deref())?;
    let report = build_and_save(&dict, output)
        .with_context(|| format!("failed to build tree into {}", output.display()))?;

    print_build_report(&report);
    println!("{} {}", "Saved to".green(), output.display());
    Ok(())
}

fn run_test_all_command(cli: &Cli, limit: Option<usize>) -> Result<()> {
    let engine = open_engine(cli)?;

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Jotto Solver Test ");
    println!("{}", "═".repeat(70));
    let stats = engine.stats()?;
    println!(
        "\nTesting against {} words in {} leaves",
        limit.map_or(stats.words, |n| n.min(stats.words)),
        stats.leaves
    );

    let results = run_test_all(&engine, limit)?;
    print_test_all_statistics(&results);
    Ok(())
}
