// Profile models: the raw ingested record and its scored wrapper.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::engine::Contribution;

/// A speaker profile as delivered by ingestion.
///
/// All fields are present by construction — ingestion fails hard on
/// missing markup rather than producing a partial record — though any of
/// them may be empty. Read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProfile {
    pub name: String,
    pub occupation: String,
    pub country: String,
    pub biography: String,
    pub link: String,
    pub social_networks: Vec<String>,
}

/// A RawProfile plus the scoring state accumulated across keyword-set
/// applications.
///
/// Built by folding Contributions through `absorb`: the cumulative score
/// is the sum of all deltas, matched keywords keep first-match order with
/// duplicate literals dropped, and each set's own delta is kept per
/// category so the classifier can compare categories without the penalty
/// contribution leaking into the comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProfile {
    #[serde(flatten)]
    pub profile: RawProfile,
    pub score: i64,
    pub matched_keywords: Vec<String>,
    pub category_scores: BTreeMap<String, i64>,
}

impl ScoredProfile {
    pub fn new(profile: RawProfile) -> Self {
        Self {
            profile,
            score: 0,
            matched_keywords: Vec::new(),
            category_scores: BTreeMap::new(),
        }
    }

    /// Fold one keyword-set application into the running state.
    ///
    /// `category` is the applying set's name; its delta accumulates there
    /// as well as into the cumulative score.
    pub fn absorb(&mut self, category: &str, contribution: &Contribution) {
        self.score += contribution.delta;
        *self.category_scores.entry(category.to_string()).or_insert(0) +=
            contribution.delta;
        for keyword in &contribution.matches {
            if !self.matched_keywords.iter().any(|k| k == keyword) {
                self.matched_keywords.push(keyword.clone());
            }
        }
    }

    /// Delta recorded for one category; zero if the set never applied.
    pub fn category_score(&self, category: &str) -> i64 {
        self.category_scores.get(category).copied().unwrap_or(0)
    }

    /// Matched keywords joined for tabular rendering.
    pub fn keywords_joined(&self) -> String {
        self.matched_keywords.join(", ")
    }

    /// Social network links joined for tabular rendering.
    pub fn social_networks_joined(&self) -> String {
        self.profile.social_networks.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawProfile {
        RawProfile {
            name: "Test Speaker".to_string(),
            occupation: "Dean".to_string(),
            country: "UK".to_string(),
            biography: "A biography.".to_string(),
            link: "https://example.com/speaker".to_string(),
            social_networks: vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
            ],
        }
    }

    #[test]
    fn test_absorb_accumulates_score_and_category() {
        let mut scored = ScoredProfile::new(raw());
        scored.absorb(
            "Education",
            &Contribution {
                delta: 3,
                matches: vec!["education".to_string()],
            },
        );
        scored.absorb(
            "Dropout",
            &Contribution {
                delta: -5,
                matches: vec![],
            },
        );
        assert_eq!(scored.score, -2);
        assert_eq!(scored.category_score("Education"), 3);
        assert_eq!(scored.category_score("Dropout"), -5);
        assert_eq!(scored.category_score("Other"), 0);
    }

    #[test]
    fn test_absorb_deduplicates_matched_keywords() {
        let mut scored = ScoredProfile::new(raw());
        let c = Contribution {
            delta: 1,
            matches: vec!["learning".to_string()],
        };
        scored.absorb("Education", &c);
        scored.absorb("Education", &c);
        assert_eq!(scored.score, 2);
        assert_eq!(scored.matched_keywords, vec!["learning"]);
    }

    #[test]
    fn test_joined_helpers() {
        let mut scored = ScoredProfile::new(raw());
        scored.absorb(
            "Education",
            &Contribution {
                delta: 2,
                matches: vec!["education".to_string(), "learning".to_string()],
            },
        );
        assert_eq!(scored.keywords_joined(), "education, learning");
        assert_eq!(
            scored.social_networks_joined(),
            "https://example.com/a, https://example.com/b"
        );
    }
}
