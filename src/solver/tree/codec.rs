//! Portable binary format for decision trees
//!
//! Layout (version 2):
//!
//! ```text
//! file     := MAGIC "JOTT" · version:u16 little-endian · body
//! body     := bincode (varint) encoding of Vec<Record>, nodes in pre-order
//! Record   := Interior { guesses: [word], links: u8 } | Leaf { anagrams: [word] }
//! ```
//!
//! Bit `i` of `links` says the interior node has a child for a reply of `i`
//! matches; those children follow in ascending reply order. Records are flat
//! so nesting depth is checked while the tree is rebuilt, not while bincode
//! recurses.

use super::{Children, Node};
use crate::core::Signature;
use crate::dictionary::loader::normalize_token;
use crate::error::{JottoError, Result};
use crate::solver::entropy::MATCH_BUCKETS;
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::{self, Write};

pub const MAGIC: &[u8; 4] = b"JOTT";
pub const VERSION: u16 = 2;

const HEADER_LEN: usize = MAGIC.len() + 2;

/// Deeper nesting than this is rejected rather than recursed into
const MAX_DEPTH: usize = 512;

/// One node without its children
#[derive(Debug, Serialize, Deserialize)]
enum Record<'a> {
    Interior {
        guesses: Cow<'a, [String]>,
        links: u8,
    },
    Leaf {
        anagrams: Cow<'a, [String]>,
    },
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
}

/// Serialize a tree into `writer`
///
/// # Errors
/// Propagates any I/O error from the writer.
pub fn write_tree<W: Write>(root: &Node, writer: &mut W) -> io::Result<()> {
    let mut records = Vec::new();
    flatten(root, &mut records);

    writer.write_all(MAGIC)?;
    writer.write_all(&VERSION.to_le_bytes())?;
    options()
        .serialize_into(&mut *writer, &records)
        .map_err(|e| match *e {
            bincode::ErrorKind::Io(err) => err,
            other => io::Error::other(other),
        })
}

/// Serialize a tree into a fresh buffer
///
/// # Errors
/// Only fails if bincode rejects the records, which a well-formed tree never
/// triggers.
pub fn encode(root: &Node) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    write_tree(root, &mut out)?;
    Ok(out)
}

/// Deserialize a tree
///
/// # Errors
/// Returns `JottoError::BadFormat` on a wrong marker or version, a body
/// bincode cannot read, malformed words, interior nodes with fewer than two
/// children, or records left over after the root.
///
/// # Examples
/// ```
/// use jotto_solver::dictionary::Dictionary;
/// use jotto_solver::solver::tree::{build_tree, codec};
///
/// let dict = Dictionary::from_words(["apple", "angle", "crane", "trace"]).unwrap();
/// let root = build_tree(&dict).unwrap();
///
/// let bytes = codec::encode(&root).unwrap();
/// assert_eq!(codec::decode(&bytes).unwrap(), root);
/// assert!(codec::decode(&bytes[..bytes.len() - 1]).is_err());
/// ```
pub fn decode(bytes: &[u8]) -> Result<Node> {
    if bytes.len() < HEADER_LEN {
        return Err(JottoError::bad_format("truncated tree"));
    }
    let (header, body) = bytes.split_at(HEADER_LEN);

    if &header[..MAGIC.len()] != MAGIC {
        return Err(JottoError::bad_format("not a Jotto tree (bad magic)"));
    }
    let version = u16::from_le_bytes([header[4], header[5]]);
    if version != VERSION {
        return Err(JottoError::bad_format(format!(
            "unsupported tree version {version}"
        )));
    }

    let records: Vec<Record<'static>> = options()
        .with_limit(body.len() as u64)
        .reject_trailing_bytes()
        .deserialize(body)
        .map_err(|e| JottoError::bad_format(format!("corrupt tree: {e}")))?;

    let mut records = records.into_iter();
    let root = rebuild(&mut records, 0)?;
    if records.next().is_some() {
        return Err(JottoError::bad_format("trailing records after tree"));
    }
    Ok(root)
}

fn flatten<'a>(node: &'a Node, records: &mut Vec<Record<'a>>) {
    match node {
        Node::Leaf { anagrams } => records.push(Record::Leaf {
            anagrams: Cow::Borrowed(anagrams.as_slice()),
        }),
        Node::Interior {
            guesses, children, ..
        } => {
            let links = children
                .iter()
                .enumerate()
                .filter(|(_, child)| child.is_some())
                .fold(0u8, |mask, (slot, _)| mask | 1 << slot);
            records.push(Record::Interior {
                guesses: Cow::Borrowed(guesses.as_slice()),
                links,
            });
            for child in children.iter().flatten() {
                flatten(child, records);
            }
        }
    }
}

fn rebuild<I: Iterator<Item = Record<'static>>>(records: &mut I, depth: usize) -> Result<Node> {
    if depth > MAX_DEPTH {
        return Err(JottoError::bad_format("tree nested too deeply"));
    }
    let Some(record) = records.next() else {
        return Err(JottoError::bad_format("truncated tree"));
    };

    match record {
        Record::Leaf { anagrams } => Ok(Node::Leaf {
            anagrams: checked_words(anagrams.into_owned())?,
        }),
        Record::Interior { guesses, links } => {
            let guesses = checked_words(guesses.into_owned())?;
            if links >> MATCH_BUCKETS != 0 {
                return Err(JottoError::bad_format(format!(
                    "unknown child slot in links {links:#010b}"
                )));
            }
            let present = links.count_ones();
            if present < 2 {
                return Err(JottoError::bad_format(format!(
                    "interior node with {present} children"
                )));
            }

            let mut children: Children = Default::default();
            for (slot, child) in children.iter_mut().enumerate() {
                if links & (1 << slot) != 0 {
                    *child = Some(Box::new(rebuild(records, depth + 1)?));
                }
            }
            Ok(Node::interior(guesses, children))
        }
    }
}

/// One anagram set: non-empty, canonical words, all sharing a signature
fn checked_words(words: Vec<String>) -> Result<Vec<String>> {
    let Some(first) = words.first() else {
        return Err(JottoError::bad_format("empty word set"));
    };
    if normalize_token(first).as_deref() != Some(first.as_str()) {
        return Err(JottoError::bad_format(format!("invalid word {first:?}")));
    }
    let signature = Signature::new(first)?;

    for word in &words[1..] {
        if normalize_token(word).as_deref() != Some(word.as_str()) {
            return Err(JottoError::bad_format(format!("invalid word {word:?}")));
        }
        if Signature::new(word)? != signature {
            return Err(JottoError::bad_format(format!(
                "{word:?} is not an anagram of its siblings"
            )));
        }
    }
    Ok(words)
}
