//! Offline decision tree construction
//!
//! Starting from the whole dictionary, pick the highest-entropy guess,
//! partition the pool by reply and recurse into each non-empty bucket.

use super::{Children, Node};
use crate::dictionary::{AnagramClass, Dictionary};
use crate::error::{JottoError, Result};
use crate::solver::entropy::{MATCH_BUCKETS, select_best_guess};

/// Build the full decision tree for a dictionary
///
/// The result depends only on the dictionary contents: classes are visited in
/// ascending signature order and selector ties go to the earliest class.
///
/// # Errors
/// Returns `JottoError::EmptyDictionary` if the dictionary has no classes.
///
/// # Examples
/// ```
/// use jotto_solver::dictionary::Dictionary;
/// use jotto_solver::solver::tree::build_tree;
///
/// let dict = Dictionary::from_words(["apple", "angle", "angel", "crane", "trace"]).unwrap();
/// let root = build_tree(&dict).unwrap();
/// assert_eq!(root.stats().words, 5);
/// ```
pub fn build_tree(dict: &Dictionary) -> Result<Node> {
    let pool: Vec<&AnagramClass> = dict.classes().iter().collect();
    build_subtree(&pool, dict.classes()).ok_or(JottoError::EmptyDictionary)
}

fn build_subtree(pool: &[&AnagramClass], universe: &[AnagramClass]) -> Option<Node> {
    match pool {
        [] => None,
        [only] => Some(Node::Leaf {
            anagrams: only.words().to_vec(),
        }),
        [first, ..] => {
            // A pool member always separates itself from the rest, so fall
            // back to it if no guess has positive entropy.
            let guess = select_best_guess(universe, pool).map_or(*first, |(best, _)| best);

            let mut buckets: [Vec<&AnagramClass>; MATCH_BUCKETS] = Default::default();
            for &class in pool {
                let matches = guess.signature().match_count(class.signature());
                buckets[usize::from(matches)].push(class);
            }

            let children: Children =
                buckets.map(|bucket| build_subtree(&bucket, universe).map(Box::new));

            Some(Node::interior(guess.words().to_vec(), children))
        }
    }
}
