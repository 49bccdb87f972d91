//! vocab - a vocabulary translation quiz
//!
//! This library provides the pieces of the quiz that do not depend on a
//! particular front end: the data model, URL routing, client-side
//! navigation history, the remote backend client, configuration and
//! logging setup.

pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod route;
pub mod types;

// Re-export commonly used types
pub use backend::VocabularyBackend;
pub use config::Config;
pub use error::{BackendError, ConfigError, Result, VocabError};
pub use navigation::{History, Link};
pub use route::{resolve, resolve_path, Page};
pub use types::{AppVariant, ValidationResult, Word};
