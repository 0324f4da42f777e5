//! Twitter API v2 adapter for publishing tweets.
//!
//! Posts to the `POST /2/tweets` endpoint with bearer authentication.
//! Implements `PublisherPort`.

use crate::domain::{DomainError, Tweet};
use crate::ports::PublisherPort;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Twitter publishing adapter.
pub struct TwitterApi {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl TwitterApi {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Tweet creation endpoint (e.g., "https://api.twitter.com/2/tweets")
    /// * `token` - OAuth 2.0 bearer token with write access
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            token,
        }
    }
}

/// Tweet creation request body.
#[derive(Serialize)]
struct TweetRequest<'a> {
    text: &'a str,
}

/// Tweet creation response body.
#[derive(Deserialize)]
struct TweetResponse {
    data: TweetData,
}

#[derive(Deserialize)]
struct TweetData {
    id: String,
}

#[async_trait::async_trait]
impl PublisherPort for TwitterApi {
    async fn publish(&self, tweet: &Tweet) -> Result<(), DomainError> {
        let request = TweetRequest { text: &tweet.text };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Publisher(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "tweet API returned error");
            // v2 errors carry a human-readable `detail` field.
            let detail = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
                .unwrap_or_else(|| text.chars().take(200).collect::<String>());
            return Err(DomainError::Publisher(format!(
                "API error {}: {}",
                status, detail
            )));
        }

        let created: TweetResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Publisher(format!("failed to parse API response: {}", e)))?;

        info!(
            tweet_id = %created.data.id,
            chars = tweet.text.chars().count(),
            "tweet published"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_publish_posts_bearer_and_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({"text": "Heat: ten nights."})))
            .respond_with(ResponseTemplate::new(201).set_body_json(
                serde_json::json!({"data": {"id": "1449000000000000000", "text": "Heat: ten nights."}}),
            ))
            .mount(&server)
            .await;

        let api = TwitterApi::new(
            format!("{}/2/tweets", server.uri()),
            "test-token".to_string(),
        );
        let tweet = Tweet {
            text: "Heat: ten nights.".to_string(),
        };

        api.publish(&tweet).await.unwrap();
    }

    #[tokio::test]
    async fn test_publish_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(serde_json::json!({"detail": "Forbidden"})),
            )
            .mount(&server)
            .await;

        let api = TwitterApi::new(
            format!("{}/2/tweets", server.uri()),
            "bad-token".to_string(),
        );
        let tweet = Tweet {
            text: "never lands".to_string(),
        };

        let err = api.publish(&tweet).await.unwrap_err();
        assert!(matches!(err, DomainError::Publisher(_)));
        assert!(err.to_string().contains("403"), "got: {}", err);
        assert!(err.to_string().contains("Forbidden"), "got: {}", err);
    }
}
