// HTML extraction for the speaker listing and per-speaker detail pages.
//
// The listing page carries one card per speaker (name, designation,
// country, link to the detail page). The detail page carries the social
// links and the multi-paragraph biography. Any required element that is
// absent fails the whole profile — a partially-populated record would
// corrupt the scoring downstream.

use anyhow::{anyhow, Context, Result};
use scraper::{ElementRef, Html, Selector};

/// One entry from the speaker listing, before the detail page is fetched.
#[derive(Debug, Clone)]
pub struct SpeakerCard {
    pub name: String,
    pub occupation: String,
    pub country: String,
    pub link: String,
}

/// Biography and social links extracted from a speaker's detail page.
#[derive(Debug, Clone)]
pub struct SpeakerDetail {
    pub biography: String,
    pub social_networks: Vec<String>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector {css:?}: {e}"))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parse the listing page into speaker cards, in page order.
pub fn parse_listing(html: &str) -> Result<Vec<SpeakerCard>> {
    let document = Html::parse_document(html);

    let list_sel = selector("ul#ajax-list-speaker.list-speakers")?;
    let item_sel = selector("li")?;
    let name_sel = selector("h3.speaker-title")?;
    let occupation_sel = selector("div.designation")?;
    let country_sel = selector("div.country")?;
    let link_sel = selector("a.speaker-card-link")?;

    let list = document
        .select(&list_sel)
        .next()
        .context("Speaker list not found on listing page")?;

    let mut cards = Vec::new();
    for item in list.select(&item_sel) {
        let name = item
            .select(&name_sel)
            .next()
            .map(text_of)
            .context("Speaker card missing title")?;
        let occupation = item
            .select(&occupation_sel)
            .next()
            .map(text_of)
            .with_context(|| format!("Speaker card for {name:?} missing designation"))?;
        let country = item
            .select(&country_sel)
            .next()
            .map(text_of)
            .with_context(|| format!("Speaker card for {name:?} missing country"))?;
        let link = item
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
            .with_context(|| format!("Speaker card for {name:?} missing detail link"))?;

        cards.push(SpeakerCard {
            name,
            occupation,
            country,
            link,
        });
    }

    Ok(cards)
}

/// Parse a speaker's detail page into biography text and social links.
///
/// The biography is each `<p>` of the about block, trimmed, with a
/// newline appended — paragraph boundaries matter for padded keyword
/// phrases like `" ai "`.
pub fn parse_detail(html: &str) -> Result<SpeakerDetail> {
    let document = Html::parse_document(html);

    let social_block_sel = selector("div.speaker-personal-info")?;
    let anchor_sel = selector("a")?;
    let about_sel = selector("div.speaker-about")?;
    let paragraph_sel = selector("p")?;

    let social_block = document
        .select(&social_block_sel)
        .next()
        .context("Detail page missing personal-info block")?;
    let social_networks: Vec<String> = social_block
        .select(&anchor_sel)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect();

    let about = document
        .select(&about_sel)
        .next()
        .context("Detail page missing about block")?;
    let mut biography = String::new();
    for paragraph in about.select(&paragraph_sel) {
        biography.push_str(&text_of(paragraph));
        biography.push('\n');
    }

    Ok(SpeakerDetail {
        biography,
        social_networks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
        <ul id="ajax-list-speaker" class="list-speakers">
          <li>
            <h3 class="speaker-title"> Dr. Amina Hale </h3>
            <div class="designation">Dean of Digital Learning</div>
            <div class="country">United Kingdom</div>
            <a class="speaker-card-link" href="https://example.com/speakers/amina-hale"></a>
          </li>
          <li>
            <h3 class="speaker-title">Rob Tern</h3>
            <div class="designation">CEO</div>
            <div class="country">USA</div>
            <a class="speaker-card-link" href="https://example.com/speakers/rob-tern"></a>
          </li>
        </ul>
        </body></html>"#;

    const DETAIL: &str = r#"
        <html><body>
        <div class="speaker-personal-info">
          <a href="https://social.example/amina"></a>
          <a href="https://network.example/in/amina"></a>
        </div>
        <div class="speaker-about">
          <p> She is a professor of higher education. </p>
          <p>Also a digital learning advocate.</p>
        </div>
        </body></html>"#;

    #[test]
    fn test_parse_listing_extracts_cards_in_order() {
        let cards = parse_listing(LISTING).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Dr. Amina Hale");
        assert_eq!(cards[0].occupation, "Dean of Digital Learning");
        assert_eq!(cards[0].country, "United Kingdom");
        assert_eq!(cards[0].link, "https://example.com/speakers/amina-hale");
        assert_eq!(cards[1].name, "Rob Tern");
    }

    #[test]
    fn test_parse_listing_fails_without_list() {
        let err = parse_listing("<html><body></body></html>").unwrap_err();
        assert!(err.to_string().contains("Speaker list not found"));
    }

    #[test]
    fn test_parse_listing_fails_on_incomplete_card() {
        let html = r#"
            <ul id="ajax-list-speaker" class="list-speakers">
              <li><h3 class="speaker-title">No Designation</h3></li>
            </ul>"#;
        let err = parse_listing(html).unwrap_err();
        assert!(err.to_string().contains("missing designation"));
    }

    #[test]
    fn test_parse_detail_joins_paragraphs_with_newlines() {
        let detail = parse_detail(DETAIL).unwrap();
        assert_eq!(
            detail.biography,
            "She is a professor of higher education.\nAlso a digital learning advocate.\n"
        );
        assert_eq!(
            detail.social_networks,
            vec![
                "https://social.example/amina",
                "https://network.example/in/amina"
            ]
        );
    }

    #[test]
    fn test_parse_detail_allows_empty_about_block() {
        let html = r#"
            <div class="speaker-personal-info"></div>
            <div class="speaker-about"></div>"#;
        let detail = parse_detail(html).unwrap();
        assert!(detail.biography.is_empty());
        assert!(detail.social_networks.is_empty());
    }
}
