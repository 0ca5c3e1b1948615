//! Precomputed decision trees
//!
//! Interior nodes carry the anagrams of the guess to play and one link per
//! possible reply. Leaves carry the single anagram class left standing.

mod builder;
pub mod codec;

pub use builder::build_tree;

use super::entropy::MATCH_BUCKETS;

/// Child links of an interior node, indexed by match count
pub type Children = [Option<Box<Node>>; MATCH_BUCKETS];

/// A decision tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Play any of `guesses`, then follow the link for the reply
    Interior {
        guesses: Vec<String>,
        children: Children,
        /// Words across all leaves below, fixed at construction
        word_count: usize,
    },
    /// The secret is one of `anagrams`
    Leaf { anagrams: Vec<String> },
}

/// Shape summary of a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub interior: usize,
    pub leaves: usize,
    /// Words across all leaves
    pub words: usize,
    /// Most replies needed to reach any leaf
    pub max_depth: usize,
}

impl Node {
    /// An interior node, counting the words below it from its children
    #[must_use]
    pub fn interior(guesses: Vec<String>, children: Children) -> Self {
        let word_count = children.iter().flatten().map(|child| child.word_count()).sum();
        Self::Interior {
            guesses,
            children,
            word_count,
        }
    }

    /// Child for a reply of `matches` letters, if any word gives that reply
    #[must_use]
    pub fn child(&self, matches: usize) -> Option<&Self> {
        match self {
            Self::Interior { children, .. } => children.get(matches)?.as_deref(),
            Self::Leaf { .. } => None,
        }
    }

    /// Which replies lead somewhere; all false at a leaf
    #[must_use]
    pub fn active_links(&self) -> [bool; MATCH_BUCKETS] {
        match self {
            Self::Interior { children, .. } => children.each_ref().map(Option::is_some),
            Self::Leaf { .. } => [false; MATCH_BUCKETS],
        }
    }

    #[must_use]
    pub fn guesses(&self) -> Option<&[String]> {
        match self {
            Self::Interior { guesses, .. } => Some(guesses),
            Self::Leaf { .. } => None,
        }
    }

    #[must_use]
    pub fn anagrams(&self) -> Option<&[String]> {
        match self {
            Self::Interior { .. } => None,
            Self::Leaf { anagrams } => Some(anagrams),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Present children in reply order
    pub fn children(&self) -> impl Iterator<Item = (usize, &Self)> {
        let links: &[Option<Box<Self>>] = match self {
            Self::Interior { children, .. } => children,
            Self::Leaf { .. } => &[],
        };
        links
            .iter()
            .enumerate()
            .filter_map(|(k, child)| child.as_deref().map(|node| (k, node)))
    }

    /// Anagram sets of every leaf below this node, in pre-order
    #[must_use]
    pub fn leaves(&self) -> Vec<&[String]> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a [String]>) {
        match self {
            Self::Leaf { anagrams } => out.push(anagrams),
            Self::Interior { .. } => {
                for (_, child) in self.children() {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Number of words still possible at this node
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        match self {
            Self::Interior { word_count, .. } => *word_count,
            Self::Leaf { anagrams } => anagrams.len(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        match self {
            Self::Leaf { anagrams } => TreeStats {
                nodes: 1,
                leaves: 1,
                words: anagrams.len(),
                ..TreeStats::default()
            },
            Self::Interior { .. } => {
                let mut stats = TreeStats {
                    nodes: 1,
                    interior: 1,
                    ..TreeStats::default()
                };
                for (_, child) in self.children() {
                    let sub = child.stats();
                    stats.nodes += sub.nodes;
                    stats.interior += sub.interior;
                    stats.leaves += sub.leaves;
                    stats.words += sub.words;
                    stats.max_depth = stats.max_depth.max(sub.max_depth + 1);
                }
                stats
            }
        }
    }
}
