//! Service layer adapter for the TUI
//!
//! Bridges the async [`VocabularyBackend`] to the synchronous event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle` owns a tokio runtime and the backend
//! - Each effect is spawned as a task that sends its outcome back as an
//!   [`Action`] over a crossbeam channel
//! - The event loop drains the channel with `try_recv` once per iteration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use libvocab::backend::mock::MockBackend;
//! use vocab_tui::app::{EffectRunner, RequestId};
//! use vocab_tui::services::ServiceHandle;
//!
//! # fn example() -> vocab_tui::error::Result<()> {
//! let mut services = ServiceHandle::new(Arc::new(MockBackend::default()))?;
//! services.fetch_word(RequestId(1), 1);
//!
//! // In the event loop
//! for action in services.drain() {
//!     // reduce(state, action) ...
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use libvocab::backend::http::HttpBackend;
use libvocab::backend::mock::MockBackend;
use libvocab::{Config, VocabularyBackend};
use reqwest::Url;

use crate::app::{Action, EffectRunner, RequestId};
use crate::error::{Result, TuiError};

/// Service handle for TUI operations
pub struct ServiceHandle {
    backend: Arc<dyn VocabularyBackend>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<Action>,
    rx: Receiver<Action>,
}

impl ServiceHandle {
    /// Create a handle around `backend`
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(backend: Arc<dyn VocabularyBackend>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| TuiError::Application(format!("Failed to start runtime: {}", e)))?;
        let (tx, rx) = unbounded();

        tracing::info!("Using {} backend", backend.name());

        Ok(Self {
            backend,
            runtime,
            tx,
            rx,
        })
    }

    /// Create a handle for the configured backend, or the in-memory one when
    /// `mock` is set
    pub fn from_config(config: &Config, mock: bool) -> Result<Self> {
        let backend: Arc<dyn VocabularyBackend> = if mock {
            Arc::new(MockBackend::default())
        } else {
            Arc::new(HttpBackend::from_config(config)?)
        };
        Self::new(backend)
    }

    /// Results that have arrived since the last call, oldest first
    pub fn drain(&self) -> Vec<Action> {
        self.rx.try_iter().collect()
    }

    /// Receiver for results, for callers that want to block on them
    pub fn receiver(&self) -> &Receiver<Action> {
        &self.rx
    }
}

impl EffectRunner for ServiceHandle {
    fn fetch_word(&mut self, request: RequestId, id: i64) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = backend.fetch_word(id).await;
            if let Err(ref e) = result {
                tracing::warn!("Word lookup {} failed: {}", id, e);
            }
            // Receiver gone means the app is shutting down
            let _ = tx.send(Action::WordFetched { request, result });
        });
    }

    fn validate_translation(&mut self, request: RequestId, word_id: i64, input: String) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = backend.validate_translation(word_id, &input).await;
            if let Err(ref e) = result {
                tracing::warn!("Validation of word {} failed: {}", word_id, e);
            }
            let _ = tx.send(Action::ValidationReceived { request, result });
        });
    }

    fn open_external(&mut self, url: &Url) -> Option<String> {
        Some(format!("External link (open it in a browser): {}", url))
    }
}
