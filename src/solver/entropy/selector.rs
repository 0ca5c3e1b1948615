//! Pure entropy-based guess selection
//!
//! The guess universe is every class of the dictionary, not just the
//! remaining pool: a word that cannot be the answer may still split the pool
//! better than any candidate.

use super::calculator::calculate_entropy;
use crate::dictionary::AnagramClass;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Select the guess that maximizes entropy over `pool`
///
/// Ties go to the class that comes first in `universe`. Guesses that leave
/// the whole pool in one bucket are never returned; if every guess does that,
/// the result is `None`.
///
/// # Examples
/// ```
/// use jotto_solver::dictionary::{AnagramClass, Dictionary};
/// use jotto_solver::solver::entropy::select_best_guess;
///
/// let dict = Dictionary::from_words(["apple", "angle", "crane", "trace"]).unwrap();
/// let pool: Vec<&AnagramClass> = dict.classes().iter().collect();
///
/// let (best, entropy) = select_best_guess(dict.classes(), &pool).unwrap();
/// assert!(entropy > 0.0);
/// assert!(dict.get(best.signature()).is_some());
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    universe: &'a [AnagramClass],
    pool: &[&AnagramClass],
) -> Option<(&'a AnagramClass, f64)> {
    universe
        .par_iter()
        .enumerate()
        .map(|(idx, guess)| (idx, guess, calculate_entropy(guess.signature(), pool)))
        .filter(|&(_, _, entropy)| entropy > 0.0)
        .reduce_with(|best, next| match next.2.total_cmp(&best.2) {
            Ordering::Greater => next,
            Ordering::Equal if next.0 < best.0 => next,
            _ => best,
        })
        .map(|(_, guess, entropy)| (guess, entropy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn pool_of(dict: &Dictionary) -> Vec<&AnagramClass> {
        dict.classes().iter().collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let dict = Dictionary::from_words(["apple", "angle", "angel", "crane", "trace"]).unwrap();
        let pool = pool_of(&dict);

        let (best, entropy) = select_best_guess(dict.classes(), &pool).unwrap();

        let best_possible = dict
            .classes()
            .iter()
            .map(|g| calculate_entropy(g.signature(), &pool))
            .fold(0.0_f64, f64::max);
        assert!((entropy - best_possible).abs() < 1e-12);
        assert!((calculate_entropy(best.signature(), &pool) - entropy).abs() < 1e-12);
    }

    #[test]
    fn ties_go_to_first_in_universe() {
        // Two candidates: any guess that separates them gives exactly 1 bit
        let dict = Dictionary::from_words(["abcde", "fghij", "klmno"]).unwrap();
        let pool: Vec<&AnagramClass> = dict.classes()[..2].iter().collect();

        let (best, entropy) = select_best_guess(dict.classes(), &pool).unwrap();
        assert_eq!(best.representative(), "abcde");
        assert!((entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn guess_outside_pool_can_win() {
        // Pool members overlap each other in the same way; only an outside word
        // splits all three apart.
        let dict = Dictionary::from_words(["abxyz", "cdxyz", "efxyz", "abcqr"]).unwrap();
        let pool: Vec<&AnagramClass> = dict
            .classes()
            .iter()
            .filter(|c| c.representative() != "abcqr")
            .collect();

        let (best, _) = select_best_guess(dict.classes(), &pool).unwrap();
        assert_eq!(best.representative(), "abcqr");
    }

    #[test]
    fn deterministic_across_runs() {
        let dict = Dictionary::embedded().unwrap();
        let pool = pool_of(&dict);

        let first = select_best_guess(dict.classes(), &pool).unwrap();
        for _ in 0..3 {
            let again = select_best_guess(dict.classes(), &pool).unwrap();
            assert_eq!(first.0.signature(), again.0.signature());
        }
    }

    #[test]
    fn zero_entropy_everywhere_returns_none() {
        let dict = Dictionary::from_words(["crane", "trace"]).unwrap();
        let single: Vec<&AnagramClass> = dict.classes()[..1].iter().collect();

        assert!(select_best_guess(dict.classes(), &single).is_none());
        assert!(select_best_guess(dict.classes(), &[]).is_none());
    }
}
