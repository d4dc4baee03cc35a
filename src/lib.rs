// Rostrum: keyword-driven classification of conference speaker profiles.
//
// This is the library root. Each module corresponds to a stage of the
// pipeline: ingest fetches and parses speaker pages, scoring turns their
// text into weighted scores, pipeline orchestrates the batch, output
// renders the buckets.

pub mod config;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod scoring;
