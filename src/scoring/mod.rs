// Scoring subsystem: keyword sets, the contribution fold, and the
// final category decision.

pub mod classifier;
pub mod engine;
pub mod profile;
