use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use rostrum::config::{Config, ScoringConfig};
use rostrum::ingest::{LiveSource, ProfileSource};
use rostrum::pipeline::batch;
use rostrum::scoring::classifier;
use rostrum::scoring::profile::RawProfile;

/// Rostrum: keyword-driven classification of conference speaker profiles.
///
/// Scores speaker biographies and occupations against weighted keyword
/// sets, sorts passing profiles into Education and Other buckets, and
/// exports them as a two-sheet workbook.
#[derive(Parser)]
#[command(name = "rostrum", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, classify, and export the full speaker listing
    Run {
        /// Listing page URL (overrides ROSTRUM_SPEAKERS_URL)
        #[arg(long)]
        url: Option<String>,

        /// Workbook output path (overrides ROSTRUM_OUTPUT)
        #[arg(long)]
        output: Option<String>,
    },

    /// Score a single ad-hoc biography and show the breakdown
    Score {
        /// Biography text to score
        biography: String,

        /// Occupation text (scored together with the biography)
        #[arg(long, default_value = "")]
        occupation: String,

        /// Print the scored profile as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rostrum=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { url, output } => {
            let config = Config::load()?;
            let url = url.unwrap_or(config.speakers_url);
            let output = output.unwrap_or(config.output_path);

            println!("Fetching speaker listing from {url}...");

            let source = LiveSource::new(&url)?;
            let profiles = source.fetch_profiles().await?;
            let input_count = profiles.len();

            println!("Scoring {input_count} profiles...");

            let pb = ProgressBar::new(input_count as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Scoring [{bar:30}] {pos}/{len} {msg}")
                    .unwrap(),
            );

            let scoring = ScoringConfig::default();
            let buckets = batch::run(profiles, &scoring, |pct| {
                pb.set_message(format!("{pct}% done"));
                pb.inc(1);
            });
            pb.finish_and_clear();

            info!(
                education = buckets.education.len(),
                other = buckets.other.len(),
                rejected = input_count - buckets.total(),
                "Batch classified"
            );

            rostrum::output::terminal::display_bucket_summary(&buckets, input_count);

            rostrum::output::xlsx::export_workbook(&buckets, Path::new(&output))?;
            println!("\n{}", format!("Workbook saved to: {output}").bold());
        }

        Commands::Score {
            biography,
            occupation,
            json,
        } => {
            let scoring = ScoringConfig::default();
            let profile = RawProfile {
                name: "(ad hoc)".to_string(),
                occupation,
                country: String::new(),
                biography,
                link: String::new(),
                social_networks: Vec::new(),
            };

            let scored = batch::score_profile(profile, &scoring);
            let classification = classifier::classify(
                scored.score,
                scored.category_score(&scoring.education.name),
                scored.category_score(&scoring.other.name),
                scoring.passing_threshold,
            );

            if json {
                let out = serde_json::json!({
                    "classification": classification.as_str(),
                    "profile": scored,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                rostrum::output::terminal::display_profile_detail(&scored, classification);
            }
        }
    }

    Ok(())
}
