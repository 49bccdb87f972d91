//! HTTP implementation of the vocabulary backend.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Url;
use std::time::Duration;

use super::{decode_validation, decode_word, BackendResult, VocabularyBackend};
use crate::config::Config;
use crate::error::BackendError;
use crate::types::{AppVariant, ValidationResult, Word};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("vocab/", env!("CARGO_PKG_VERSION"));

/// Backend reached over HTTP.
///
/// Endpoints, relative to the base URL:
/// - `GET vocabularies?id=<id>&lang=<lang>` (or `vocabularies/<id>` for the
///   plain variant)
/// - `GET validation?lang=<lang>&input=<text>&word-id=<id>`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: Url,
    lang: String,
    variant: AppVariant,
}

impl HttpBackend {
    /// Creates a client for `base` with the given per-request timeout.
    pub fn new(
        base: Url,
        lang: impl Into<String>,
        variant: AppVariant,
        timeout: Duration,
    ) -> BackendResult<Self> {
        if base.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(base.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base,
            lang: lang.into(),
            variant,
        })
    }

    /// Creates a client from the `[backend]` and `[app]` configuration.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let base = config.base_url()?;
        Ok(Self::new(
            base,
            config.backend.lang.clone(),
            config.app.variant,
            config.timeout(),
        )?)
    }

    /// URL of the word lookup for `id`
    pub fn word_url(&self, id: i64) -> BackendResult<Url> {
        if self.variant.uses_path_lookup() {
            return self.endpoint(&["vocabularies", &id.to_string()]);
        }

        let mut url = self.endpoint(&["vocabularies"])?;
        url.query_pairs_mut()
            .append_pair("id", &id.to_string())
            .append_pair("lang", &self.lang);
        Ok(url)
    }

    /// URL of the validation call; `input` is percent-encoded
    pub fn validation_url(&self, word_id: i64, input: &str) -> BackendResult<Url> {
        let mut url = self.endpoint(&["validation"])?;
        url.query_pairs_mut()
            .append_pair("lang", &self.lang)
            .append_pair("input", input)
            .append_pair("word-id", &word_id.to_string());
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Body of a successful GET; any non-2xx status is an error
    async fn get_body(&self, url: Url) -> BackendResult<Vec<u8>> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!("GET {} returned {}", url, status);
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl VocabularyBackend for HttpBackend {
    async fn fetch_word(&self, id: i64) -> BackendResult<Word> {
        let url = self.word_url(id)?;
        let result = self.get_body(url).await.and_then(|body| decode_word(&body));
        if let Err(ref e) = result {
            tracing::warn!("Word lookup for id {} failed: {}", id, e);
        }
        result
    }

    async fn validate_translation(
        &self,
        word_id: i64,
        input: &str,
    ) -> BackendResult<ValidationResult> {
        let url = self.validation_url(word_id, input)?;
        let result = self
            .get_body(url)
            .await
            .and_then(|body| decode_validation(&body));
        if let Err(ref e) = result {
            tracing::warn!("Validation for word {} failed: {}", word_id, e);
        }
        result
    }

    fn name(&self) -> &str {
        "http"
    }
}
