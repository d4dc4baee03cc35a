// Configuration: the injected scoring rules and the env-loaded runtime
// settings.
//
// Keyword lists live here rather than as ambient globals — the batch
// processor only ever sees the ScoringConfig handed to it, which keeps
// the scoring core testable with custom sets.

use std::env;

use anyhow::Result;

use crate::scoring::engine::KeywordSet;

/// Default speaker listing URL.
pub const DEFAULT_SPEAKERS_URL: &str = "https://gitex.com/speakers/";

/// Default workbook output path.
pub const DEFAULT_OUTPUT_PATH: &str = "speakers.xlsx";

/// Category names used as keyword-set identifiers and sheet names.
pub const EDUCATION: &str = "Education";
pub const OTHER: &str = "Other";
pub const DROPOUT: &str = "Dropout";

const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "educational",
    "ministry of education",
    "higher education",
    "learning",
    "ph.d.",
    "digital learning",
    "edtech",
    "edutech",
    "exam",
    "teacher",
    "professor",
];

const OTHER_KEYWORDS: &[&str] = &[
    "chief executive officer",
    "ceo",
    "cmo",
    "coo",
    "founder",
    "proctoring",
    "artificial intelligence",
    " ai ",
    "machine learning",
    " ml",
    "start-up",
    "ministries",
    "government",
    "govt",
];

const DROPOUT_KEYWORDS: &[&str] = &[
    "filmmaker",
    "actor",
    "singer",
    "artist",
    "trader",
    "blogger",
    "vlogger",
    "creative",
    "model",
    "ambassador",
    "author",
    "fashion",
];

/// The three keyword sets and the passing threshold, bundled for
/// injection into the batch processor.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub education: KeywordSet,
    pub other: KeywordSet,
    pub dropout: KeywordSet,
    pub passing_threshold: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            education: KeywordSet::new(EDUCATION, EDUCATION_KEYWORDS, 1, true),
            other: KeywordSet::new(OTHER, OTHER_KEYWORDS, 1, true),
            dropout: KeywordSet::new(DROPOUT, DROPOUT_KEYWORDS, -5, false),
            passing_threshold: 2,
        }
    }
}

/// Runtime configuration loaded from environment variables.
///
/// Everything has a code default; the .env file is loaded at startup via
/// dotenvy so nothing needs exporting by hand.
pub struct Config {
    /// Listing page URL (ROSTRUM_SPEAKERS_URL).
    pub speakers_url: String,
    /// Workbook output path (ROSTRUM_OUTPUT).
    pub output_path: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            speakers_url: env::var("ROSTRUM_SPEAKERS_URL")
                .unwrap_or_else(|_| DEFAULT_SPEAKERS_URL.to_string()),
            output_path: env::var("ROSTRUM_OUTPUT")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config_weights() {
        let cfg = ScoringConfig::default();
        assert_eq!(cfg.education.weight, 1);
        assert_eq!(cfg.other.weight, 1);
        assert_eq!(cfg.dropout.weight, -5);
        assert_eq!(cfg.passing_threshold, 2);
        assert!(cfg.education.record_matches);
        assert!(cfg.other.record_matches);
        assert!(!cfg.dropout.record_matches);
    }

    #[test]
    fn test_set_names_match_category_constants() {
        let cfg = ScoringConfig::default();
        assert_eq!(cfg.education.name, EDUCATION);
        assert_eq!(cfg.other.name, OTHER);
        assert_eq!(cfg.dropout.name, DROPOUT);
    }
}
