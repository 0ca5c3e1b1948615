//! Entropy-guided guess selection
//!
//! Implements Shannon entropy over match-count partitions. This is the
//! criterion the decision tree builder applies at every interior node.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, MATCH_BUCKETS, bucket_weights, calculate_entropy, calculate_metrics,
    shannon_entropy,
};
pub use selector::select_best_guess;
