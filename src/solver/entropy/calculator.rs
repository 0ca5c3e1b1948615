//! Shannon entropy of match-count partitions
//!
//! Given a guess signature and a candidate pool, every candidate falls into one
//! of six buckets by its match count. Buckets are weighted by the number of
//! words behind each signature.

use crate::core::Signature;
use crate::dictionary::AnagramClass;

/// Number of possible replies (match counts `0..=5`)
pub const MATCH_BUCKETS: usize = 6;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining words after this guess
    pub expected_remaining: f64,
    /// Largest bucket (worst-case remaining words)
    pub max_bucket: usize,
    /// Word weight of each reply
    pub buckets: [usize; MATCH_BUCKETS],
}

/// Sum word weights of the pool per match count against `guess`
#[must_use]
pub fn bucket_weights(guess: &Signature, pool: &[&AnagramClass]) -> [usize; MATCH_BUCKETS] {
    let mut counts = [0; MATCH_BUCKETS];
    for class in pool {
        counts[usize::from(guess.match_count(class.signature()))] += class.weight();
    }
    counts
}

/// Calculate Shannon entropy from bucket counts
///
/// H = -Σ p * log₂(p) over non-empty buckets. Buckets are visited in index
/// order so equal distributions always produce bit-identical results.
///
/// # Examples
/// ```
/// use jotto_solver::solver::entropy::shannon_entropy;
///
/// assert!((shannon_entropy(&[25, 25, 25, 25, 0, 0]) - 2.0).abs() < 1e-9);
/// assert!(shannon_entropy(&[0, 0, 7, 0, 0, 0]).abs() < 1e-9);
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of the partition `guess` induces on `pool`
#[must_use]
pub fn calculate_entropy(guess: &Signature, pool: &[&AnagramClass]) -> f64 {
    shannon_entropy(&bucket_weights(guess, pool))
}

/// Calculate entropy, expected remaining words and worst case for a guess
#[must_use]
pub fn calculate_metrics(guess: &Signature, pool: &[&AnagramClass]) -> GuessMetrics {
    let buckets = bucket_weights(guess, pool);
    let total = buckets.iter().sum::<usize>() as f64;

    let expected_remaining = if total == 0.0 {
        0.0
    } else {
        buckets
            .iter()
            .map(|&count| count as f64 * count as f64 / total)
            .sum()
    };

    GuessMetrics {
        entropy: shannon_entropy(&buckets),
        expected_remaining,
        max_bucket: buckets.iter().copied().max().unwrap_or(0),
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn toy() -> Dictionary {
        Dictionary::from_words(["apple", "angle", "angel", "crane", "trace"]).unwrap()
    }

    fn sig(word: &str) -> Signature {
        Signature::new(word).unwrap()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let entropy = shannon_entropy(&[1, 1, 1, 1, 0, 0]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        assert!(shannon_entropy(&[0, 10, 0, 0, 0, 0]).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let uniform = shannon_entropy(&[25, 25, 25, 25, 0, 0]);
        let skewed = shannon_entropy(&[97, 1, 1, 1, 0, 0]);
        assert!(uniform > skewed);
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!(shannon_entropy(&[0; MATCH_BUCKETS]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn buckets_are_weighted_by_anagrams() {
        let dict = toy();
        let pool: Vec<&AnagramClass> = dict.classes().iter().collect();

        // crane vs acenr=5, acert=4, aegln=3 (two words), aelpp=2
        let counts = bucket_weights(&sig("crane"), &pool);
        assert_eq!(counts, [0, 0, 1, 2, 1, 1]);
    }

    #[test]
    fn entropy_uses_word_weights() {
        let dict = toy();
        let pool: Vec<&AnagramClass> = dict.classes().iter().collect();

        let entropy = calculate_entropy(&sig("crane"), &pool);
        let expected = shannon_entropy(&[1, 2, 1, 1]);
        assert!((entropy - expected).abs() < 1e-12);
    }

    #[test]
    fn single_bucket_has_zero_entropy() {
        let dict = toy();
        let pool: Vec<&AnagramClass> = dict.classes().iter().collect();

        // No shared letters with anything in the pool
        let entropy = calculate_entropy(&sig("zzzzz"), &pool);
        assert!(entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_describe_partition() {
        let dict = toy();
        let pool: Vec<&AnagramClass> = dict.classes().iter().collect();

        let metrics = calculate_metrics(&sig("crane"), &pool);
        assert_eq!(metrics.max_bucket, 2);
        assert_eq!(metrics.buckets.iter().sum::<usize>(), 5);
        // (1 + 4 + 1 + 1) / 5
        assert!((metrics.expected_remaining - 1.4).abs() < 1e-9);
        assert!(metrics.entropy > 0.0);
    }

    #[test]
    fn metrics_on_empty_pool() {
        let metrics = calculate_metrics(&sig("crane"), &[]);
        assert_eq!(metrics.max_bucket, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
    }
}
