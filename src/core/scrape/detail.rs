use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, error};

use crate::config::HttpConfig;
use crate::models::PLACEHOLDER;
use crate::utils::Result;

static ORIGIN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"li[data-testid="title-details-origin"] a"#).unwrap());

/// Resolves the country list for one detail-page link. Infallible by
/// contract: any failure maps to the placeholder, never to an error the
/// caller has to handle.
#[async_trait]
pub trait CountryLookup: Send + Sync {
    async fn country_of(&self, href: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct DetailFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl DetailFetcher {
    pub fn from_config(cfg: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(cfg.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn detail_url(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            format!("{}/{}", self.base_url, href)
        }
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl CountryLookup for DetailFetcher {
    async fn country_of(&self, href: &str) -> String {
        let url = self.detail_url(href);

        let body = match self.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                // Recoverable per entry: the record is still produced.
                error!("Failed to fetch detail page '{url}': {e}");
                return PLACEHOLDER.to_string();
            }
        };

        let countries = parse_countries(&body);
        if countries.is_empty() {
            debug!(target: "cinelist::detail", url = %url, "No origin section on detail page");
            return PLACEHOLDER.to_string();
        }
        countries.join(", ")
    }
}

/// Pull the link texts out of the "Country of origin" details row.
fn parse_countries(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    document
        .select(&ORIGIN_SELECTOR)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
