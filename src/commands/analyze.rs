//! Word analysis command
//!
//! Scores a word as the opening guess against the whole dictionary.

use crate::core::Signature;
use crate::dictionary::{AnagramClass, Dictionary, loader};
use crate::error::{JottoError, Result};
use crate::solver::entropy::{MATCH_BUCKETS, calculate_entropy, calculate_metrics, select_best_guess};
use rayon::prelude::*;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    /// Entropy of the opening partition in bits
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_bucket: usize,
    /// Words per reply
    pub buckets: [usize; MATCH_BUCKETS],
    pub total_candidates: usize,
    /// 1 for the best opening signature
    pub rank: usize,
    pub signatures: usize,
    /// The opening the tree builder would choose
    pub best: Option<(String, f64)>,
}

/// Analyze `word` as the first guess against every dictionary word
///
/// # Errors
/// Returns `JottoError::BadWord` if the word is malformed or not in the
/// dictionary.
pub fn analyze_word(word: &str, dict: &Dictionary) -> Result<AnalysisResult> {
    let normalized =
        loader::normalize_token(word).ok_or_else(|| JottoError::BadWord(word.to_string()))?;
    if !dict.contains_word(&normalized) {
        return Err(JottoError::BadWord(word.to_string()));
    }
    let signature = Signature::new(&normalized)?;

    let pool: Vec<&AnagramClass> = dict.classes().iter().collect();
    let metrics = calculate_metrics(&signature, &pool);

    let better = dict
        .classes()
        .par_iter()
        .filter(|class| calculate_entropy(class.signature(), &pool) > metrics.entropy)
        .count();

    let best = select_best_guess(dict.classes(), &pool)
        .map(|(class, entropy)| (class.representative().to_string(), entropy));

    Ok(AnalysisResult {
        word: normalized,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_bucket: metrics.max_bucket,
        buckets: metrics.buckets,
        total_candidates: dict.word_count(),
        rank: better + 1,
        signatures: dict.len(),
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Dictionary {
        Dictionary::from_words(["apple", "angle", "angel", "crane", "trace"]).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word("CRANE", &toy()).unwrap();

        assert_eq!(result.word, "crane");
        assert_eq!(result.buckets, [0, 0, 1, 2, 1, 1]);
        assert_eq!(result.max_bucket, 2);
        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.signatures, 4);
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert!((result.expected_remaining - 1.4).abs() < 1e-9);
    }

    #[test]
    fn best_word_ranks_first() {
        let dict = Dictionary::embedded().unwrap();
        let best = analyze_word("crane", &dict).unwrap().best.unwrap();

        let result = analyze_word(&best.0, &dict).unwrap();
        assert_eq!(result.rank, 1);
        assert!((result.entropy - best.1).abs() < 1e-12);
    }

    #[test]
    fn entropy_properties() {
        let dict = Dictionary::embedded().unwrap();
        let result = analyze_word("money", &dict).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (MATCH_BUCKETS as f64).log2());
        assert!(result.rank >= 1 && result.rank <= result.signatures);
        assert_eq!(result.buckets.iter().sum::<usize>(), dict.word_count());
    }

    #[test]
    fn unknown_or_malformed_words_fail() {
        let dict = toy();
        assert!(matches!(analyze_word("zebra", &dict), Err(JottoError::BadWord(_))));
        assert!(matches!(analyze_word("glean", &dict), Err(JottoError::BadWord(_))));
        assert!(matches!(analyze_word("no", &dict), Err(JottoError::BadWord(_))));
    }
}
