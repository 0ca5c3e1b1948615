//! Core domain types for Jotto
//!
//! Letter signatures and the match count between them. Everything here is
//! pure and allocation-free.

mod signature;

pub use signature::{Signature, WORD_LEN};
