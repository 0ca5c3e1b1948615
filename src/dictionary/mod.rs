//! Jotto dictionaries
//!
//! A dictionary groups five-letter words into anagram classes keyed by their
//! [`Signature`]. Classes are kept in ascending signature order, which is the
//! fixed iteration order used by the selector and the tree builder.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Signature;
use crate::error::{JottoError, Result};
use rustc_hash::FxHashMap;

/// All dictionary words sharing one signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramClass {
    signature: Signature,
    words: Vec<String>,
}

impl AnagramClass {
    #[inline]
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Words in first-seen order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the class, used as the entropy weight
    #[inline]
    #[must_use]
    pub fn weight(&self) -> usize {
        self.words.len()
    }

    /// First word of the class, used for display
    #[inline]
    #[must_use]
    pub fn representative(&self) -> &str {
        &self.words[0]
    }
}

/// Immutable signature → anagrams mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    classes: Vec<AnagramClass>,
}

impl Dictionary {
    /// Build a dictionary from raw tokens
    ///
    /// Each token is trimmed and lowercased; anything that is not exactly five
    /// letters `a..z` is skipped. Repeated words are kept once.
    ///
    /// # Errors
    /// Returns `JottoError::EmptyDictionary` if no usable word remains.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["apple", "angle", "ANGEL", "crane", "trace", "xyz"]).unwrap();
    /// assert_eq!(dict.len(), 4);
    /// assert_eq!(dict.word_count(), 5);
    /// ```
    pub fn from_words<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouped: FxHashMap<Signature, Vec<String>> = FxHashMap::default();

        for word in tokens.into_iter().filter_map(|t| loader::normalize_token(t.as_ref())) {
            let Ok(signature) = Signature::new(&word) else {
                continue;
            };
            let words = grouped.entry(signature).or_default();
            if !words.contains(&word) {
                words.push(word);
            }
        }

        if grouped.is_empty() {
            return Err(JottoError::EmptyDictionary);
        }

        let mut classes: Vec<AnagramClass> = grouped
            .into_iter()
            .map(|(signature, words)| AnagramClass { signature, words })
            .collect();
        classes.sort_unstable_by_key(|class| class.signature);

        Ok(Self { classes })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `JottoError::EmptyDictionary` only if the embedded list is empty.
    pub fn embedded() -> Result<Self> {
        Self::from_words(WORDS)
    }

    /// Anagram classes in ascending signature order
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[AnagramClass] {
        &self.classes
    }

    /// Number of distinct signatures
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total number of words across all classes
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.classes.iter().map(AnagramClass::weight).sum()
    }

    /// Look up the class for a signature
    #[must_use]
    pub fn get(&self, signature: &Signature) -> Option<&AnagramClass> {
        self.classes
            .binary_search_by_key(signature, |class| class.signature)
            .ok()
            .map(|idx| &self.classes[idx])
    }

    /// Check whether `word` (any case, surrounding whitespace ignored) is in the dictionary
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        let Some(word) = loader::normalize_token(word) else {
            return false;
        };
        Signature::new(&word)
            .ok()
            .and_then(|sig| self.get(&sig))
            .is_some_and(|class| class.words.contains(&word))
    }
}
