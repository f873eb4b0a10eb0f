//! Collins dictionary client.
//!
//! `GET {base}/api/v1/dictionaries/{dictionary}/search/first/?q={term}` with
//! the API key in the `accessKey` header. The body is returned untouched.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;

use crate::services::{Dictionary, ServiceError};

pub struct CollinsDictionary {
    base_url: String,
    dictionary: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl CollinsDictionary {
    pub fn new(base_url: String, dictionary: String, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            dictionary,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn search_url(&self) -> String {
        format!(
            "{}/api/v1/dictionaries/{}/search/first/",
            self.base_url, self.dictionary
        )
    }
}

#[async_trait]
impl Dictionary for CollinsDictionary {
    fn name(&self) -> &str {
        "collins"
    }

    async fn lookup(&self, term: &str) -> Result<String, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ServiceError::Config("dictionary API key is not set (DICTIONARY_API_KEY)".to_string())
        })?;

        info!("Collins lookup: term={:?}, dictionary={}", term, self.dictionary);

        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", term)])
            .header(ACCEPT, "application/json")
            .header("accessKey", api_key)
            .send()
            .await?;

        let status = response.status();
        debug!("Collins response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Collins API error: {} - {}", status, message);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        debug!("Collins body: {} bytes", body.len());
        Ok(body)
    }
}
