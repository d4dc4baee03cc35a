// Profile sources.
//
// ProfileSource is the seam between ingestion and the scoring core: the
// batch pipeline only needs an ordered Vec<RawProfile>, however it was
// obtained. LiveSource is the HTTP implementation; tests substitute their
// own.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::ingest::parse;
use crate::scoring::profile::RawProfile;

/// Anything that can deliver an ordered batch of raw profiles.
#[async_trait]
pub trait ProfileSource {
    async fn fetch_profiles(&self) -> Result<Vec<RawProfile>>;
}

/// Live HTTP source: fetches the speaker listing, then one detail page
/// per speaker, sequentially in listing order.
pub struct LiveSource {
    client: reqwest::Client,
    listing_url: String,
}

impl LiveSource {
    pub fn new(listing_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("rostrum/0.1 (speaker-classification)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            listing_url: listing_url.to_string(),
        })
    }

    /// GET a page and return its body, failing on any non-success status.
    async fn fetch_html(&self, url: &str) -> Result<String> {
        debug!(url = url, "GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("GET {url} returned {status}");
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))
    }
}

#[async_trait]
impl ProfileSource for LiveSource {
    async fn fetch_profiles(&self) -> Result<Vec<RawProfile>> {
        let listing_html = self.fetch_html(&self.listing_url).await?;
        let cards = parse::parse_listing(&listing_html)?;
        info!(count = cards.len(), "Speaker listing fetched");

        let mut profiles = Vec::with_capacity(cards.len());
        for card in cards {
            let detail_html = self
                .fetch_html(&card.link)
                .await
                .with_context(|| format!("Failed to fetch detail page for {:?}", card.name))?;
            let detail = parse::parse_detail(&detail_html)
                .with_context(|| format!("Failed to parse detail page for {:?}", card.name))?;

            profiles.push(RawProfile {
                name: card.name,
                occupation: card.occupation,
                country: card.country,
                biography: detail.biography,
                link: card.link,
                social_networks: detail.social_networks,
            });
        }

        Ok(profiles)
    }
}
