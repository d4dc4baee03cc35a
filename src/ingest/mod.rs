// Ingestion: fetching and parsing speaker pages into RawProfile records.
//
// This is the only stage that performs I/O or can fail. Failures are
// hard: a non-success status or missing required markup aborts the run
// before scoring begins, so the export never silently undercounts.

pub mod parse;
pub mod source;

pub use source::{LiveSource, ProfileSource};
