//! Word list loading utilities
//!
//! A word list is plain text; any whitespace separates tokens.

use super::Dictionary;
use crate::core::WORD_LEN;
use crate::error::{JottoError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Normalize a raw token into a dictionary word
///
/// Returns `None` for anything that is not five letters `a..z` after trimming
/// and lowercasing.
#[must_use]
pub fn normalize_token(token: &str) -> Option<String> {
    let word = token.trim().to_lowercase();
    (word.len() == WORD_LEN && word.bytes().all(|b| b.is_ascii_lowercase())).then_some(word)
}

/// Build a dictionary from any byte source
///
/// Invalid UTF-8 is replaced rather than rejected; affected tokens are then
/// discarded by the usual filtering.
///
/// # Errors
/// Returns `JottoError::BadFile` if reading fails (attributed to `origin`), or
/// `JottoError::EmptyDictionary` if no five-letter word is found.
pub fn from_reader<R: Read>(mut reader: R, origin: &Path) -> Result<Dictionary> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| JottoError::bad_file(origin, e))?;

    let content = String::from_utf8_lossy(&bytes);
    Dictionary::from_words(content.split_whitespace())
}

/// Load a dictionary from a word list file
///
/// # Errors
///
/// Returns `JottoError::BadFile` if the file cannot be opened or read, or
/// `JottoError::EmptyDictionary` if it holds no five-letter words.
///
/// # Examples
/// ```no_run
/// use jotto_solver::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} anagram classes", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| JottoError::bad_file(path, e))?;
    from_reader(file, path)
}
