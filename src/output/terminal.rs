// Colored terminal output for batch summaries and single-profile detail.

use colored::Colorize;

use crate::pipeline::batch::Buckets;
use crate::scoring::classifier::Classification;
use crate::scoring::profile::ScoredProfile;

/// Summarize a finished batch run: bucket counts and the top-scoring
/// profiles of each bucket.
pub fn display_bucket_summary(buckets: &Buckets, input_count: usize) {
    let rejected = input_count - buckets.total();

    println!(
        "\n{}",
        format!("=== Classification Summary ({input_count} profiles) ===").bold()
    );
    println!(
        "  {} {} education",
        "+".green().bold(),
        buckets.education.len()
    );
    println!("  {} {} other", "+".green(), buckets.other.len());
    println!("  {} {} rejected", "-".dimmed(), rejected);

    for (name, bucket) in [("Education", &buckets.education), ("Other", &buckets.other)] {
        if bucket.is_empty() {
            continue;
        }
        println!("\n  {}", format!("{name} highlights:").bold());
        let mut ranked: Vec<&ScoredProfile> = bucket.iter().collect();
        ranked.sort_by_key(|s| std::cmp::Reverse(s.score));
        for scored in ranked.iter().take(3) {
            println!(
                "    {:>4}  {:<30} {}",
                scored.score,
                scored.profile.name,
                super::truncate_chars(&scored.keywords_joined(), 50).dimmed()
            );
        }
    }
}

/// Display one profile's full scoring breakdown.
pub fn display_profile_detail(scored: &ScoredProfile, classification: Classification) {
    println!(
        "\n{}",
        format!("=== Score for {} ===", scored.profile.name).bold()
    );
    println!("  Classification: {}", colorize(classification));
    println!("  Cumulative score: {}", scored.score);

    println!("  Category contributions:");
    for (category, delta) in &scored.category_scores {
        println!("    {category:<12} {delta:>4}");
    }

    if !scored.matched_keywords.is_empty() {
        println!("  Matched keywords: {}", scored.keywords_joined().dimmed());
    }
}

fn colorize(classification: Classification) -> colored::ColoredString {
    match classification {
        Classification::Education => classification.as_str().green().bold(),
        Classification::Other => classification.as_str().yellow(),
        Classification::Rejected => classification.as_str().red(),
    }
}
