//! Decision tree runtime
//!
//! A `QueryTree` owns a built tree, a cursor into it and the random source
//! used to pick among anagram guesses.

use super::entropy::MATCH_BUCKETS;
use super::tree::{Node, codec};
use crate::error::{JottoError, Result};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// A decision tree plus a cursor
///
/// The cursor is stored as the replies taken from the root, which keeps the
/// tree free of back references and makes `undo` trivial.
pub struct QueryTree {
    root: Node,
    path: Vec<usize>,
    rng: StdRng,
}

impl QueryTree {
    /// Wrap a tree with an OS-seeded random source
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self::with_rng(root, StdRng::from_os_rng())
    }

    /// Wrap a tree with a deterministic random source
    #[must_use]
    pub fn with_seed(root: Node, seed: u64) -> Self {
        Self::with_rng(root, StdRng::seed_from_u64(seed))
    }

    fn with_rng(root: Node, rng: StdRng) -> Self {
        Self {
            root,
            path: Vec::new(),
            rng,
        }
    }

    /// Replace the random source with a deterministic one
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Node under the cursor
    #[must_use]
    pub fn current(&self) -> &Node {
        resolve(&self.root, &self.path)
    }

    /// Replies taken since the last `start`
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Move the cursor back to the root
    pub fn start(&mut self) {
        self.path.clear();
    }

    /// Follow the link for a reply of `matches` letters
    ///
    /// An absent link leaves the cursor where it is.
    ///
    /// # Errors
    /// Returns `JottoError::OutOfRange` if `matches > 5`.
    pub fn step(&mut self, matches: usize) -> Result<()> {
        if matches >= MATCH_BUCKETS {
            return Err(JottoError::OutOfRange(
                i64::try_from(matches).unwrap_or(i64::MAX),
            ));
        }
        if self.current().child(matches).is_some() {
            self.path.push(matches);
        }
        Ok(())
    }

    /// Step back to the parent; false at the root
    pub fn undo(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// A random word from the current guess set, or `None` at a leaf
    pub fn guess(&mut self) -> Option<&str> {
        resolve(&self.root, &self.path)
            .guesses()?
            .choose(&mut self.rng)
            .map(String::as_str)
    }

    /// The remaining anagrams, or `None` at an interior node
    #[must_use]
    pub fn anagrams(&self) -> Option<&[String]> {
        self.current().anagrams()
    }

    #[must_use]
    pub fn active_links(&self) -> [bool; MATCH_BUCKETS] {
        self.current().active_links()
    }

    /// Serialize the tree (not the cursor or random state)
    ///
    /// # Errors
    /// Propagates I/O errors from the writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        codec::write_tree(&self.root, writer)
    }

    /// Restore a tree from a byte stream with a fresh random source
    ///
    /// # Errors
    /// Returns `JottoError::BadFile` if reading fails and
    /// `JottoError::BadFormat` if the stream is not a valid tree.
    pub fn read_from<R: Read>(mut reader: R, origin: &Path) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| JottoError::bad_file(origin, e))?;
        Ok(Self::new(codec::decode(&bytes)?))
    }

    /// Write the tree to a file
    ///
    /// # Errors
    /// Returns `JottoError::BadFile` if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| JottoError::bad_file(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| JottoError::bad_file(path, e))
    }

    /// Read a tree from a file
    ///
    /// # Errors
    /// Returns `JottoError::BadFile` if the file cannot be read and
    /// `JottoError::BadFormat` if it does not hold a valid tree.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| JottoError::bad_file(path, e))?;
        Ok(Self::new(codec::decode(&bytes)?))
    }
}

fn resolve<'a>(root: &'a Node, path: &[usize]) -> &'a Node {
    path.iter()
        .fold(root, |node, &matches| node.child(matches).unwrap_or(node))
}
