//! Main Jotto engine interface
//!
//! The surface a front-end drives: open a dictionary or a saved tree, then
//! alternate between asking for a guess and submitting the match count.

use super::entropy::MATCH_BUCKETS;
use super::runtime::QueryTree;
use super::tree::{Node, TreeStats, build_tree};
use crate::core::Signature;
use crate::dictionary::{Dictionary, loader};
use crate::error::{JottoError, Result};
use std::path::Path;

/// One reply on the way to a target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStep {
    /// Representative of the guess set
    pub guess: String,
    pub matches: u8,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// The replies that lead from the root to a target's leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvePath {
    pub target: String,
    pub steps: Vec<SolveStep>,
    /// Leaf anagram set containing the target
    pub anagrams: Vec<String>,
}

impl SolvePath {
    /// Words played before the target is named
    ///
    /// Each step is one guess. If a guess already was the target the game
    /// ends there; otherwise the leaf's anagrams are offered in order.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        if let Some(turn) = self.steps.iter().position(|step| step.guess == self.target) {
            return turn + 1;
        }
        let offered = self
            .anagrams
            .iter()
            .position(|word| *word == self.target)
            .map_or(self.anagrams.len(), |idx| idx + 1);
        self.steps.len() + offered
    }
}

/// Jotto engine
///
/// Starts out empty; every session operation fails with
/// `JottoError::NotInitialized` until a tree is loaded.
#[derive(Default)]
pub struct Engine {
    tree: Option<QueryTree>,
}

impl Engine {
    /// An engine with no tree loaded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing query tree, cursor at the root
    #[must_use]
    pub fn from_tree(mut tree: QueryTree) -> Self {
        tree.start();
        Self { tree: Some(tree) }
    }

    /// Build the decision tree for a dictionary
    ///
    /// # Errors
    /// Returns `JottoError::EmptyDictionary` if the dictionary is empty.
    pub fn from_dictionary(dict: &Dictionary) -> Result<Self> {
        Ok(Self::from_tree(QueryTree::new(build_tree(dict)?)))
    }

    /// Load a word list and build its tree
    ///
    /// # Errors
    /// Returns `JottoError::BadFile` if the file cannot be read and
    /// `JottoError::EmptyDictionary` if it has no five-letter words.
    pub fn open_from_wordlist<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_dictionary(&loader::load_from_file(path)?)
    }

    /// Load a previously saved tree
    ///
    /// # Errors
    /// Returns `JottoError::BadFile` if the file cannot be read and
    /// `JottoError::BadFormat` if it is not a valid tree.
    pub fn open_from_saved_tree<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_tree(QueryTree::load(path)?))
    }

    /// Use a deterministic random source for guess selection
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        if let Some(tree) = &mut self.tree {
            tree.reseed(seed);
        }
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.tree.is_some()
    }

    /// The loaded query tree
    ///
    /// # Errors
    /// Returns `JottoError::NotInitialized` if no tree is loaded.
    pub fn tree(&self) -> Result<&QueryTree> {
        self.tree.as_ref().ok_or(JottoError::NotInitialized)
    }

    fn tree_mut(&mut self) -> Result<&mut QueryTree> {
        self.tree.as_mut().ok_or(JottoError::NotInitialized)
    }

    /// Persist the tree
    ///
    /// # Errors
    /// Returns `JottoError::BadFile` on write failure or
    /// `JottoError::NotInitialized` if no tree is loaded.
    pub fn save_tree<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.tree()?.save(path)
    }

    /// Start a new game
    ///
    /// # Errors
    /// Returns `JottoError::NotInitialized` if no tree is loaded.
    pub fn restart(&mut self) -> Result<()> {
        self.tree_mut()?.start();
        Ok(())
    }

    /// Submit the number of letters the current guess shares with the secret
    ///
    /// A reply no dictionary word could give leaves the game unchanged;
    /// check [`Engine::active_links`] first.
    ///
    /// # Errors
    /// Returns `JottoError::OutOfRange` unless `0 <= matches <= 5`, or
    /// `JottoError::NotInitialized` if no tree is loaded.
    pub fn submit_match(&mut self, matches: i32) -> Result<()> {
        let tree = self.tree_mut()?;
        let matches = usize::try_from(matches).map_err(|_| JottoError::OutOfRange(matches.into()))?;
        tree.step(matches)
    }

    /// Take back the last reply; false if already at the start
    ///
    /// # Errors
    /// Returns `JottoError::NotInitialized` if no tree is loaded.
    pub fn undo(&mut self) -> Result<bool> {
        Ok(self.tree_mut()?.undo())
    }

    /// A word to play next, or `None` once the secret is narrowed to one anagram set
    ///
    /// # Errors
    /// Returns `JottoError::NotInitialized` if no tree is loaded.
    pub fn current_guess(&mut self) -> Result<Option<String>> {
        Ok(self.tree_mut()?.guess().map(str::to_string))
    }

    /// The remaining anagrams once the game is narrowed down
    ///
    /// # Errors
    /// Returns `JottoError::NotInitialized` if no tree is loaded.
    pub fn current_anagrams(&self) -> Result<Option<&[String]>> {
        Ok(self.tree()?.anagrams())
    }

    /// Which match counts are possible for the current guess
    ///
    /// # Errors
    /// Returns `JottoError::NotInitialized` if no tree is loaded.
    pub fn active_links(&self) -> Result<[bool; MATCH_BUCKETS]> {
        Ok(self.tree()?.active_links())
    }

    /// Replies given so far in this game
    ///
    /// # Errors
    /// Returns `JottoError::NotInitialized` if no tree is loaded.
    pub fn replies(&self) -> Result<usize> {
        Ok(self.tree()?.depth())
    }

    /// Shape of the loaded tree
    ///
    /// # Errors
    /// Returns `JottoError::NotInitialized` if no tree is loaded.
    pub fn stats(&self) -> Result<TreeStats> {
        Ok(self.tree()?.root().stats())
    }

    /// Trace the replies that identify `target`, independent of the current game
    ///
    /// # Errors
    /// Returns `JottoError::BadWord` if `target` is malformed or not in the
    /// tree, or `JottoError::NotInitialized` if no tree is loaded.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::dictionary::Dictionary;
    /// use jotto_solver::solver::Engine;
    ///
    /// let dict = Dictionary::from_words(["apple", "angle", "angel", "crane", "trace"]).unwrap();
    /// let engine = Engine::from_dictionary(&dict).unwrap();
    ///
    /// let path = engine.solve("crane").unwrap();
    /// assert_eq!(path.anagrams, ["crane"]);
    /// assert!(engine.solve("zebra").is_err());
    /// ```
    pub fn solve(&self, target: &str) -> Result<SolvePath> {
        let root = self.tree()?.root();
        let word = loader::normalize_token(target)
            .ok_or_else(|| JottoError::BadWord(target.to_string()))?;
        let signature = Signature::new(&word)?;

        let mut node = root;
        let mut steps = Vec::new();
        let mut candidates_before = node.word_count();

        while let Node::Interior { guesses, .. } = node {
            let guess = guesses
                .first()
                .ok_or_else(|| JottoError::bad_format("interior node without guesses"))?;
            let matches = Signature::new(guess)?.match_count(&signature);

            node = node
                .child(usize::from(matches))
                .ok_or_else(|| JottoError::BadWord(target.to_string()))?;

            let candidates_after = node.word_count();
            steps.push(SolveStep {
                guess: guess.clone(),
                matches,
                candidates_before,
                candidates_after,
            });
            candidates_before = candidates_after;
        }

        match node.anagrams() {
            Some(anagrams) if anagrams.contains(&word) => Ok(SolvePath {
                target: word,
                steps,
                anagrams: anagrams.to_vec(),
            }),
            _ => Err(JottoError::BadWord(target.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY: [&str; 5] = ["apple", "angle", "angel", "crane", "trace"];

    fn toy_engine() -> Engine {
        Engine::from_dictionary(&Dictionary::from_words(TOY).unwrap())
            .unwrap()
            .with_seed(42)
    }

    fn play_truthfully(engine: &mut Engine, target: &str) -> Vec<String> {
        let secret = Signature::new(target).unwrap();
        engine.restart().unwrap();

        let mut rounds = 0;
        while let Some(guess) = engine.current_guess().unwrap() {
            let matches = Signature::new(&guess).unwrap().match_count(&secret);
            assert!(engine.active_links().unwrap()[usize::from(matches)]);
            engine.submit_match(i32::from(matches)).unwrap();
            rounds += 1;
            assert!(rounds <= 5, "too many rounds for {target}");
        }
        engine.current_anagrams().unwrap().unwrap().to_vec()
    }

    #[test]
    fn uninitialized_engine_refuses_everything() {
        let mut engine = Engine::new();
        assert!(!engine.is_initialized());
        assert!(matches!(engine.restart(), Err(JottoError::NotInitialized)));
        assert!(matches!(engine.submit_match(1), Err(JottoError::NotInitialized)));
        assert!(matches!(engine.current_guess(), Err(JottoError::NotInitialized)));
        assert!(matches!(engine.current_anagrams(), Err(JottoError::NotInitialized)));
        assert!(matches!(engine.active_links(), Err(JottoError::NotInitialized)));
        assert!(matches!(engine.undo(), Err(JottoError::NotInitialized)));
        assert!(matches!(engine.solve("crane"), Err(JottoError::NotInitialized)));
        assert!(matches!(
            engine.save_tree("unused.tree"),
            Err(JottoError::NotInitialized)
        ));
    }

    #[test]
    fn end_to_end_crane() {
        let mut engine = toy_engine();
        assert_eq!(play_truthfully(&mut engine, "crane"), ["crane"]);
    }

    #[test]
    fn every_toy_word_is_reachable() {
        let mut engine = toy_engine();
        for word in TOY {
            let anagrams = play_truthfully(&mut engine, word);
            assert!(anagrams.iter().any(|w| w == word));
        }
    }

    #[test]
    fn out_of_range_replies_fail() {
        let mut engine = toy_engine();
        assert!(matches!(engine.submit_match(6), Err(JottoError::OutOfRange(6))));
        assert!(matches!(engine.submit_match(-1), Err(JottoError::OutOfRange(-1))));
        assert_eq!(engine.replies().unwrap(), 0);
    }

    #[test]
    fn single_signature_dictionary() {
        let dict = Dictionary::from_words(["angle", "angel"]).unwrap();
        let mut engine = Engine::from_dictionary(&dict).unwrap();
        engine.restart().unwrap();

        assert_eq!(engine.current_guess().unwrap(), None);
        assert_eq!(engine.current_anagrams().unwrap().unwrap(), ["angle", "angel"]);
        assert_eq!(engine.active_links().unwrap(), [false; MATCH_BUCKETS]);
    }

    #[test]
    fn undo_returns_to_previous_guess() {
        let mut engine = toy_engine();
        let links = engine.active_links().unwrap();
        let first = links.iter().position(|&active| active).unwrap();

        engine.submit_match(i32::try_from(first).unwrap()).unwrap();
        assert_eq!(engine.replies().unwrap(), 1);
        assert!(engine.undo().unwrap());
        assert_eq!(engine.active_links().unwrap(), links);
        assert!(!engine.undo().unwrap());
    }

    #[test]
    fn solve_matches_interactive_play() {
        let mut engine = toy_engine();
        for word in TOY {
            let path = engine.solve(word).unwrap();
            assert_eq!(path.anagrams, play_truthfully(&mut engine, word));
            assert_eq!(path.target, word);
        }
    }

    #[test]
    fn solve_steps_shrink_candidates() {
        let engine = Engine::from_dictionary(&Dictionary::embedded().unwrap()).unwrap();
        let path = engine.solve("Crane").unwrap();

        assert!(!path.steps.is_empty());
        assert_eq!(path.target, "crane");
        for step in &path.steps {
            assert!(step.candidates_after < step.candidates_before);
            let sig = Signature::new(&step.guess).unwrap();
            assert_eq!(sig.match_count(&Signature::new("crane").unwrap()), step.matches);
        }
        assert_eq!(
            path.steps.last().unwrap().candidates_after,
            path.anagrams.len()
        );
    }

    #[test]
    fn guess_count_rules() {
        let step = |guess: &str| SolveStep {
            guess: guess.to_string(),
            matches: 5,
            candidates_before: 3,
            candidates_after: 2,
        };
        let mut path = SolvePath {
            target: "angel".to_string(),
            steps: vec![step("crane")],
            anagrams: vec!["angle".to_string(), "angel".to_string()],
        };
        assert_eq!(path.guess_count(), 3);

        path.steps.push(step("angle"));
        assert_eq!(path.guess_count(), 4);

        path.target = "angle".to_string();
        assert_eq!(path.guess_count(), 2);
    }

    #[test]
    fn solve_rejects_unknown_and_malformed_words() {
        let engine = toy_engine();
        assert!(matches!(engine.solve("zebra"), Err(JottoError::BadWord(_))));
        assert!(matches!(engine.solve("glean"), Err(JottoError::BadWord(_))));
        assert!(matches!(engine.solve("abc"), Err(JottoError::BadWord(_))));
    }

    #[test]
    fn solve_does_not_move_cursor() {
        let mut engine = toy_engine();
        let links = engine.active_links().unwrap();
        let first = links.iter().position(|&active| active).unwrap();
        engine.submit_match(i32::try_from(first).unwrap()).unwrap();

        engine.solve("apple").unwrap();
        assert_eq!(engine.replies().unwrap(), 1);
    }

    #[test]
    fn saved_tree_drives_to_same_leaves() {
        let dict = Dictionary::embedded().unwrap();
        let engine = Engine::from_dictionary(&dict).unwrap();
        let path = std::env::temp_dir().join(format!("jotto-engine-{}.tree", std::process::id()));

        engine.save_tree(&path).unwrap();
        let restored = Engine::open_from_saved_tree(&path);
        std::fs::remove_file(&path).unwrap();
        let restored = restored.unwrap();

        assert_eq!(restored.stats().unwrap(), engine.stats().unwrap());
        for class in dict.classes() {
            let word = class.representative();
            assert_eq!(restored.solve(word).unwrap(), engine.solve(word).unwrap());
        }
    }

    #[test]
    fn open_from_wordlist_errors() {
        let missing = Engine::open_from_wordlist("/definitely/not/here.txt");
        assert!(matches!(missing, Err(JottoError::BadFile { .. })));

        let path = std::env::temp_dir().join(format!("jotto-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "one two four\nsixsix seventy").unwrap();
        let empty = Engine::open_from_wordlist(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(empty, Err(JottoError::EmptyDictionary)));
    }

    #[test]
    fn open_from_wordlist_builds_tree() {
        let path = std::env::temp_dir().join(format!("jotto-toy-{}.txt", std::process::id()));
        std::fs::write(&path, TOY.join("\n")).unwrap();
        let engine = Engine::open_from_wordlist(&path);
        std::fs::remove_file(&path).unwrap();

        let stats = engine.unwrap().stats().unwrap();
        assert_eq!(stats.leaves, 4);
        assert_eq!(stats.words, 5);
    }
}
