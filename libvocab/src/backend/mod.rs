//! Vocabulary backend abstraction
//!
//! The quiz talks to a remote service with exactly two read-only calls:
//! look up a word by id, and validate a translation of it. Both are
//! expressed by [`VocabularyBackend`] so the terminal front end can run
//! against the real HTTP service or an in-memory mock.
//!
//! # Examples
//!
//! ```no_run
//! use libvocab::backend::{VocabularyBackend, http::HttpBackend};
//! use libvocab::Config;
//!
//! # async fn example() -> libvocab::Result<()> {
//! let backend = HttpBackend::from_config(&Config::default_config())?;
//!
//! let word = backend.fetch_word(1).await?;
//! let verdict = backend.validate_translation(word.id, "casa").await?;
//! println!("{} -> correct: {}", word.text, verdict.is_correct);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::BackendError;
use crate::types::{ValidationResult, Word};

pub mod http;

// Available for all builds so the TUI can run without a server (`--mock`)
pub mod mock;

/// Result type for backend calls
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Remote source of words and translation verdicts
///
/// Both operations are idempotent reads. Implementations never retry;
/// a failure is reported once and the caller decides what to show.
#[async_trait]
pub trait VocabularyBackend: Send + Sync {
    /// Look up a word by id
    ///
    /// # Errors
    ///
    /// `BackendError::Decode` if the payload lacks `word`/`id` or has them
    /// mistyped; any transport or status problem as the matching variant.
    async fn fetch_word(&self, id: i64) -> BackendResult<Word>;

    /// Ask whether `input` is a correct translation of word `word_id`
    async fn validate_translation(&self, word_id: i64, input: &str)
        -> BackendResult<ValidationResult>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Decode a word payload: `{ "word": string, "id": integer }`
pub fn decode_word(body: &[u8]) -> BackendResult<Word> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a validation payload: `{ "text": string, "correct": bool }`
pub fn decode_validation(body: &[u8]) -> BackendResult<ValidationResult> {
    Ok(serde_json::from_slice(body)?)
}
