use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::document::ENTRY_SELECTOR;
use crate::models::PLACEHOLDER;

static NAME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h3.ipc-title__text").unwrap());
static RATING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.ipc-rating-star--rating").unwrap());
static VOTES_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.ipc-rating-star--voteCount").unwrap());
static METADATA_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.cli-title-metadata-item").unwrap());
static TITLE_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.ipc-title-link-wrapper").unwrap());

static VOTE_JUNK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(),]").unwrap());

/// Fields pulled straight from one chart entry. The country is resolved
/// later, from the detail page behind `detail_href`, when enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub name: String,
    pub rating: String,
    pub votes: String,
    pub year: String,
    pub genre: String,
    pub detail_href: Option<String>,
}

/// Map one entry fragment to its fields. Each field falls back to the
/// placeholder independently; only a fragment with no recognizable entry
/// element at all yields `None`.
pub fn extract_entry(fragment: &str) -> Option<ExtractedEntry> {
    let fragment = Html::parse_fragment(fragment);
    let entry = fragment.select(&ENTRY_SELECTOR).next()?;

    let name = entry
        .select(&NAME_SELECTOR)
        .next()
        .map(|el| clean_name(&text_of(&el)))
        .unwrap_or_else(placeholder);

    let rating = entry
        .select(&RATING_SELECTOR)
        .next()
        .map(|el| text_of(&el))
        .unwrap_or_else(placeholder);

    let votes = entry
        .select(&VOTES_SELECTOR)
        .next()
        .map(|el| clean_votes(&text_of(&el)))
        .unwrap_or_else(placeholder);

    // Year, runtime, content rating, genre carry no semantic markup of
    // their own; they are distinguished by position only.
    let metadata: Vec<String> = entry.select(&METADATA_SELECTOR).map(|el| text_of(&el)).collect();
    let year = metadata.first().cloned().unwrap_or_else(placeholder);
    let genre = metadata.get(2).cloned().unwrap_or_else(placeholder);

    let detail_href = entry
        .select(&TITLE_LINK_SELECTOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);

    Some(ExtractedEntry {
        name,
        rating,
        votes,
        year,
        genre,
        detail_href,
    })
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn text_of(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Strip the chart rank prefix: "1. The Title" becomes "The Title".
/// Titles without the separator pass through unchanged.
fn clean_name(raw: &str) -> String {
    match raw.split_once(". ") {
        Some((_, rest)) => rest.to_string(),
        None => raw.to_string(),
    }
}

/// Vote counts render as "(2,911,842)"; drop the parentheses, separators
/// and surrounding whitespace. The placeholder passes through unchanged.
fn clean_votes(raw: &str) -> String {
    if raw == PLACEHOLDER {
        return raw.to_string();
    }
    VOTE_JUNK_RE.replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ENTRY: &str = r#"
        <li class="ipc-metadata-list-summary-item">
          <a class="ipc-title-link-wrapper" href="/title/tt0111161/?ref_=chttp_t_1">
            <h3 class="ipc-title__text">1. The Shawshank Redemption</h3>
          </a>
          <span class="cli-title-metadata-item">1994</span>
          <span class="cli-title-metadata-item">2h 22m</span>
          <span class="cli-title-metadata-item">R</span>
          <span class="ipc-rating-star--rating">9.3</span>
          <span class="ipc-rating-star--voteCount">(2,911,842)</span>
        </li>"#;

    #[test]
    fn extracts_every_field() {
        let entry = extract_entry(FULL_ENTRY).unwrap();
        assert_eq!(entry.name, "The Shawshank Redemption");
        assert_eq!(entry.rating, "9.3");
        assert_eq!(entry.votes, "2911842");
        assert_eq!(entry.year, "1994");
        assert_eq!(entry.genre, "R");
        assert_eq!(
            entry.detail_href.as_deref(),
            Some("/title/tt0111161/?ref_=chttp_t_1")
        );
    }

    #[test]
    fn missing_subnodes_fall_back_to_placeholder() {
        let entry =
            extract_entry(r#"<li class="ipc-metadata-list-summary-item"></li>"#).unwrap();
        assert_eq!(entry.name, PLACEHOLDER);
        assert_eq!(entry.rating, PLACEHOLDER);
        assert_eq!(entry.votes, PLACEHOLDER);
        assert_eq!(entry.year, PLACEHOLDER);
        assert_eq!(entry.genre, PLACEHOLDER);
        assert_eq!(entry.detail_href, None);
    }

    #[test]
    fn short_metadata_leaves_genre_as_placeholder() {
        let entry = extract_entry(
            r#"<li class="ipc-metadata-list-summary-item">
                 <span class="cli-title-metadata-item">2024</span>
                 <span class="cli-title-metadata-item">1h 30m</span>
               </li>"#,
        )
        .unwrap();
        assert_eq!(entry.year, "2024");
        assert_eq!(entry.genre, PLACEHOLDER);
    }

    #[test]
    fn fragment_without_an_entry_is_the_failure_sentinel() {
        assert!(extract_entry(r#"<div class="cli-parent">not an entry</div>"#).is_none());
    }

    #[test]
    fn name_keeps_text_after_first_separator_only() {
        assert_eq!(clean_name("1. The Shawshank Redemption"), "The Shawshank Redemption");
        assert_eq!(clean_name("12. Vol. 2"), "Vol. 2");
        assert_eq!(clean_name("Unranked Title"), "Unranked Title");
    }

    #[test]
    fn votes_cleanup_strips_junk_and_whitespace() {
        assert_eq!(clean_votes("(2,911,842)"), "2911842");
        assert_eq!(clean_votes("  (1,024) "), "1024");
        assert_eq!(clean_votes("512"), "512");
        assert_eq!(clean_votes(PLACEHOLDER), PLACEHOLDER);
    }
}
