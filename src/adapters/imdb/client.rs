//! HTTP gateway for trivia pages.
//!
//! Fetches the trivia page for a catalog entry and runs the selector-based
//! extraction over the response body. Implements `TriviaGateway`.

use crate::adapters::imdb::extract;
use crate::domain::{CatalogId, DomainError, IdKind, TriviaPage};
use crate::ports::TriviaGateway;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Browser user-agent; the site serves a reduced page to unknown clients.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/131.0.0.0 Safari/537.36";

/// HTTP adapter that fetches and parses trivia pages.
#[derive(Debug)]
pub struct ImdbGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl ImdbGateway {
    /// Create a new gateway rooted at `base_url`.
    ///
    /// The base is normalized to end with a trailing slash so page paths
    /// join under it instead of replacing its last segment.
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, DomainError> {
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| DomainError::Gateway(format!("invalid base URL {}: {}", base, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::Gateway(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait::async_trait]
impl TriviaGateway for ImdbGateway {
    async fn fetch_page(&self, id: &CatalogId) -> Result<TriviaPage, DomainError> {
        let url = self
            .base_url
            .join(&id.trivia_path())
            .map_err(|e| DomainError::Gateway(format!("invalid page path for {}: {}", id, e)))?;

        debug!(url = %url, "fetching trivia page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DomainError::Gateway(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, url = %url, "page fetch returned error");
            return Err(DomainError::Gateway(format!(
                "page fetch failed {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Gateway(format!("failed to read page body: {}", e)))?;

        let facts = match id.kind {
            IdKind::Person => extract::bio_facts(&body),
            IdKind::Title => extract::title_facts(&body),
        };
        let page = TriviaPage {
            title: extract::page_title(&body),
            facts,
        };

        info!(id = %id, facts = page.facts.len(), "trivia page fetched");

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TITLE_BODY: &str = r#"<html>
<head><title>Heat (1995) - Trivia - IMDb</title></head>
<body>
<a itemprop="url" href="/title/tt0113277/">Heat</a>
<div class="sodatext">The downtown shootout took ten nights to film.</div>
<div class="sodatext">Pacino and De Niro share the screen for the first time.</div>
</body>
</html>"#;

    const BIO_BODY: &str = r#"<html>
<body>
<a itemprop="url" href="/name/nm0000199/">Al Pacino</a>
<div class="sode odd">Turned down the lead in Born on the Fourth of July.</div>
</body>
</html>"#;

    #[tokio::test]
    async fn test_fetch_title_page_extracts_facts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/title/tt0113277/trivia"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TITLE_BODY))
            .mount(&server)
            .await;

        let gateway = ImdbGateway::new(&server.uri(), 5_000).unwrap();
        let id = CatalogId::new(IdKind::Title, "tt0113277");
        let page = gateway.fetch_page(&id).await.unwrap();

        assert_eq!(page.title, Some("Heat".to_string()));
        assert_eq!(page.facts.len(), 2);
        assert_eq!(
            page.facts[0],
            "The downtown shootout took ten nights to film."
        );
    }

    #[tokio::test]
    async fn test_fetch_bio_page_uses_bio_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/name/nm0000199/bio"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BIO_BODY))
            .mount(&server)
            .await;

        let gateway = ImdbGateway::new(&server.uri(), 5_000).unwrap();
        let id = CatalogId::new(IdKind::Person, "nm0000199");
        let page = gateway.fetch_page(&id).await.unwrap();

        assert_eq!(page.title, Some("Al Pacino".to_string()));
        assert_eq!(page.facts.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/title/tt0000404/trivia"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let gateway = ImdbGateway::new(&server.uri(), 5_000).unwrap();
        let id = CatalogId::new(IdKind::Title, "tt0000404");
        let err = gateway.fetch_page(&id).await.unwrap_err();

        assert!(matches!(err, DomainError::Gateway(_)));
        assert!(err.to_string().contains("404"), "got: {}", err);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ImdbGateway::new("not a url", 1_000).unwrap_err();
        assert!(matches!(err, DomainError::Gateway(_)));
    }
}
