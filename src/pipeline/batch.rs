// Batch classification pipeline.
//
// Scores every profile in input order against the three configured
// keyword sets, classifies it, and partitions passing profiles into the
// Education and Other buckets. The partition is stable: each bucket keeps
// the input's relative order. Rejected profiles are dropped and surfaced
// nowhere.
//
// This stage is synchronous and does no I/O — ingestion has already
// materialized the profiles, and each profile's scoring is independent
// CPU-bound string scanning, so there is nothing to parallelize.

use tracing::debug;

use crate::config::ScoringConfig;
use crate::scoring::classifier::{self, Classification};
use crate::scoring::engine;
use crate::scoring::profile::{RawProfile, ScoredProfile};

/// The two output buckets of a batch run, each in input-relative order.
#[derive(Debug, Default)]
pub struct Buckets {
    pub education: Vec<ScoredProfile>,
    pub other: Vec<ScoredProfile>,
}

impl Buckets {
    pub fn total(&self) -> usize {
        self.education.len() + self.other.len()
    }
}

/// Score and classify a batch of profiles.
///
/// `on_progress` is called after each profile with the percentage
/// complete, rounded to two decimals. It observes; it never steers.
pub fn run(
    profiles: Vec<RawProfile>,
    config: &ScoringConfig,
    mut on_progress: impl FnMut(f64),
) -> Buckets {
    let total = profiles.len();
    let mut buckets = Buckets::default();

    for (i, profile) in profiles.into_iter().enumerate() {
        let scored = score_profile(profile, config);

        let classification = classifier::classify(
            scored.score,
            scored.category_score(&config.education.name),
            scored.category_score(&config.other.name),
            config.passing_threshold,
        );

        debug!(
            name = scored.profile.name,
            score = scored.score,
            classification = classification.as_str(),
            "Classified profile"
        );

        match classification {
            Classification::Education => buckets.education.push(scored),
            Classification::Other => buckets.other.push(scored),
            Classification::Rejected => {}
        }

        on_progress(percent_done(i + 1, total));
    }

    buckets
}

/// Apply the three keyword sets to one profile, folding each
/// contribution into the scored wrapper.
pub fn score_profile(profile: RawProfile, config: &ScoringConfig) -> ScoredProfile {
    let text = engine::search_text(&profile.biography, &profile.occupation);
    let mut scored = ScoredProfile::new(profile);

    for set in [&config.education, &config.other, &config.dropout] {
        let contribution = engine::apply(&text, set);
        scored.absorb(&set.name, &contribution);
    }

    scored
}

/// Percentage complete after `done` of `total` profiles, rounded to two
/// decimal places.
fn percent_done(done: usize, total: usize) -> f64 {
    let pct = done as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_done_rounds_to_two_decimals() {
        assert_eq!(percent_done(1, 3), 33.33);
        assert_eq!(percent_done(2, 3), 66.67);
        assert_eq!(percent_done(3, 3), 100.0);
    }
}
