//! Letter signatures
//!
//! A signature is the five letters of a word sorted in ascending byte order.
//! Two words share a signature exactly when they are anagrams.

use crate::error::{JottoError, Result};
use std::fmt::{self, Write};

/// Number of letters in every Jotto word
pub const WORD_LEN: usize = 5;

/// Canonical sorted form of a five-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature([u8; WORD_LEN]);

impl Signature {
    /// Canonicalize a word into its signature
    ///
    /// The input is trimmed and lowercased first.
    ///
    /// # Errors
    /// Returns `JottoError::BadWord` unless the word is exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::Signature;
    ///
    /// let a = Signature::new("ANGEL").unwrap();
    /// let b = Signature::new("angle").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "aegln");
    ///
    /// assert!(Signature::new("angles").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Self> {
        let normalized = word.trim().to_ascii_lowercase();
        let mut letters: [u8; WORD_LEN] = normalized
            .as_bytes()
            .try_into()
            .map_err(|_| JottoError::BadWord(word.to_string()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(JottoError::BadWord(word.to_string()));
        }

        letters.sort_unstable();
        Ok(Self(letters))
    }

    /// The sorted letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Number of letters shared with `other`, counted as a multiset intersection
    ///
    /// Both sides are sorted, so a single two-pointer merge suffices.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::Signature;
    ///
    /// let angle = Signature::new("angle").unwrap();
    /// let trace = Signature::new("trace").unwrap();
    /// assert_eq!(angle.match_count(&trace), 2); // a, e
    /// ```
    #[must_use]
    pub fn match_count(&self, other: &Self) -> u8 {
        let (a, b) = (&self.0, &other.0);
        let (mut i, mut j) = (0, 0);
        let mut matches = 0;

        while i < WORD_LEN && j < WORD_LEN {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    matches += 1;
                    i += 1;
                    j += 1;
                }
            }
        }

        matches
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&b| f.write_char(char::from(b)))
    }
}

impl std::str::FromStr for Signature {
    type Err = JottoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
