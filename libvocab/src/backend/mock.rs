//! Mock backend implementation for testing
//!
//! An in-memory vocabulary with configurable failures and latency. Used by
//! integration tests and by the TUI's `--mock` mode to exercise the whole
//! quiz flow without a running server.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use super::{BackendResult, VocabularyBackend};
use crate::error::BackendError;
use crate::types::{ValidationResult, Word};

/// Configuration for mock backend behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Source-language text per word id
    pub words: HashMap<i64, String>,

    /// Expected translation per word id
    pub translations: HashMap<i64, String>,

    /// Error returned by every word lookup, if set
    pub fetch_error: Option<BackendError>,

    /// Error returned by every validation, if set
    pub validate_error: Option<BackendError>,

    /// Delay before completing operations (simulates network latency)
    pub delay: Duration,

    /// Number of times fetch_word has been called
    pub fetch_call_count: Arc<Mutex<usize>>,

    /// Inputs submitted for validation, in order
    pub submitted: Arc<Mutex<Vec<(i64, String)>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        let pairs = [
            (1, "house", "casa"),
            (2, "dog", "perro"),
            (3, "cat", "gato"),
            (4, "tree", "árbol"),
            (5, "water", "agua"),
        ];

        Self {
            words: pairs
                .iter()
                .map(|(id, word, _)| (*id, word.to_string()))
                .collect(),
            translations: pairs
                .iter()
                .map(|(id, _, translation)| (*id, translation.to_string()))
                .collect(),
            fetch_error: None,
            validate_error: None,
            delay: Duration::from_millis(0),
            fetch_call_count: Arc::new(Mutex::new(0)),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock backend for testing
pub struct MockBackend {
    config: MockConfig,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl MockBackend {
    /// Create a new mock backend with the given configuration
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Create a mock backend holding a single word
    pub fn with_word(id: i64, text: &str, translation: &str) -> Self {
        Self::new(MockConfig {
            words: HashMap::from([(id, text.to_string())]),
            translations: HashMap::from([(id, translation.to_string())]),
            ..Default::default()
        })
    }

    /// Create a mock backend whose lookups always fail
    pub fn fetch_failure(error: BackendError) -> Self {
        Self::new(MockConfig {
            fetch_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock backend whose validations always fail
    pub fn validate_failure(error: BackendError) -> Self {
        Self::new(MockConfig {
            validate_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock backend with a delay
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(MockConfig {
            delay,
            ..Default::default()
        })
    }

    /// Get the number of times fetch_word was called
    pub fn fetch_call_count(&self) -> usize {
        *self.config.fetch_call_count.lock().unwrap()
    }

    /// Get the submitted (word id, input) pairs
    pub fn submitted(&self) -> Vec<(i64, String)> {
        self.config.submitted.lock().unwrap().clone()
    }

    async fn simulate_latency(&self) {
        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }
    }
}

#[async_trait]
impl VocabularyBackend for MockBackend {
    async fn fetch_word(&self, id: i64) -> BackendResult<Word> {
        *self.config.fetch_call_count.lock().unwrap() += 1;
        self.simulate_latency().await;

        if let Some(ref error) = self.config.fetch_error {
            return Err(error.clone());
        }

        self.config
            .words
            .get(&id)
            .map(|text| Word::new(id, text.clone()))
            .ok_or(BackendError::Status { status: 404 })
    }

    async fn validate_translation(
        &self,
        word_id: i64,
        input: &str,
    ) -> BackendResult<ValidationResult> {
        self.config
            .submitted
            .lock()
            .unwrap()
            .push((word_id, input.to_string()));
        self.simulate_latency().await;

        if let Some(ref error) = self.config.validate_error {
            return Err(error.clone());
        }

        let expected = self
            .config
            .translations
            .get(&word_id)
            .ok_or(BackendError::Status { status: 404 })?;

        let is_correct = expected.to_lowercase() == input.trim().to_lowercase();
        Ok(ValidationResult::new(expected.clone(), is_correct))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
