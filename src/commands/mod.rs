//! Command implementations

pub mod analyze;
pub mod build;
pub mod play;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use build::{BuildReport, build_and_save, build_engine};
pub use play::{GameRecord, run_play};
pub use test_all::{TestAllStatistics, run_test_all};
