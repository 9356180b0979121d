use async_trait::async_trait;

use crate::{
    errors::AppResult,
    nlp::{Analysis, NlpEngine},
};

/// HTTP client for the spaCy sidecar service. The sidecar wraps the
/// pretrained English model and exposes `POST /analyze` and `GET /health`.
pub struct SpacyClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpacyClient {
    pub fn new(base_url: &str) -> Self {
        SpacyClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl NlpEngine for SpacyClient {
    async fn analyze(&self, text: &str) -> AppResult<Analysis> {
        let response = self
            .http
            .post(self.endpoint("analyze"))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Analysis>().await?)
    }

    async fn is_available(&self) -> bool {
        match self.http.get(self.endpoint("health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::warn!("NLP engine health check failed: {}", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let client = SpacyClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint("analyze"), "http://localhost:8000/analyze");

        let client = SpacyClient::new("http://nlp:9000");
        assert_eq!(client.endpoint("health"), "http://nlp:9000/health");
    }
}
