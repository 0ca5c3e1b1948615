//! Jotto Solver
//!
//! An automated Jotto opponent. A decision tree is built once from a word list
//! by repeatedly choosing the guess with the highest Shannon entropy over the
//! remaining candidates; games then walk the tree one match count at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use jotto_solver::core::Signature;
//! use jotto_solver::dictionary::Dictionary;
//! use jotto_solver::solver::Engine;
//!
//! let dict = Dictionary::from_words(["apple", "angle", "angel", "crane", "trace"]).unwrap();
//! let mut engine = Engine::from_dictionary(&dict).unwrap();
//!
//! // Play against the secret "crane"
//! let secret = Signature::new("crane").unwrap();
//! while let Some(guess) = engine.current_guess().unwrap() {
//!     let matches = Signature::new(&guess).unwrap().match_count(&secret);
//!     engine.submit_match(i32::from(matches)).unwrap();
//! }
//! assert_eq!(engine.current_anagrams().unwrap().unwrap(), ["crane"]);
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Word lists and anagram classes
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{JottoError, Result};
