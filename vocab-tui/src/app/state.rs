//! Application state
//!
//! A single `AppState` is owned by the event loop and moved through the
//! reducer (see `reducer.rs`). Page data is a tagged variant so that a
//! validation result can never exist without the word it belongs to.

use libvocab::config::{Config, DEFAULT_ORIGIN};
use libvocab::route::word_path;
use libvocab::{AppVariant, History, ValidationResult, Word};
use reqwest::Url;

use super::actions::RequestId;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// What the current URL shows
    pub page: PageState,

    /// Visited URLs
    pub history: History,

    /// Most recent completed validation, shown by `/result`
    pub last_result: Option<ResultPageState>,

    /// Outstanding backend requests
    pub requests: RequestTracker,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Address bar text while it is being edited
    pub address_bar: Option<String>,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// Per-page state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Nothing resolved yet
    Idle,
    NotFound,
    Word(WordPageState),
    /// `None` when `/result` is reached without a completed validation
    Result(Option<ResultPageState>),
}

/// Progress of a remote value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    Loading,
    Loaded(T),
    Failed,
}

impl<T> Remote<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPageState {
    /// Id taken from the URL
    pub id: i64,
    pub word: Remote<Word>,
    /// Translation typed so far
    pub input: String,
    /// Validation in flight
    pub submitting: bool,
}

impl WordPageState {
    pub fn loading(id: i64) -> Self {
        Self {
            id,
            word: Remote::Loading,
            input: String::new(),
            submitting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPageState {
    pub word: Word,
    /// The translation that was submitted
    pub input: String,
    pub validation: ValidationResult,
}

impl ResultPageState {
    /// Path of the previous word, if the id does not overflow
    pub fn previous_href(&self) -> Option<String> {
        self.word.id.checked_sub(1).map(word_path)
    }

    /// Path of the next word, if the id does not overflow
    pub fn next_href(&self) -> Option<String> {
        self.word.id.checked_add(1).map(word_path)
    }
}

/// Validation waiting for its response, with what is needed to show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingValidation {
    pub request: RequestId,
    pub word: Word,
    pub input: String,
}

/// Issues request ids and remembers the latest one per operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    next: u64,
    /// Latest word lookup
    pub fetch: Option<RequestId>,
    /// Latest validation
    pub validation: Option<PendingValidation>,
}

impl RequestTracker {
    fn issue(&mut self) -> RequestId {
        self.next += 1;
        RequestId(self.next)
    }

    /// Start a word lookup, superseding any earlier one
    pub fn start_fetch(&mut self) -> RequestId {
        let request = self.issue();
        self.fetch = Some(request);
        request
    }

    /// Take the lookup slot if `request` is the latest lookup
    pub fn finish_fetch(&mut self, request: RequestId) -> bool {
        if self.fetch == Some(request) {
            self.fetch = None;
            true
        } else {
            false
        }
    }

    /// Start a validation, superseding any earlier one
    pub fn start_validation(&mut self, word: Word, input: String) -> RequestId {
        let request = self.issue();
        self.validation = Some(PendingValidation {
            request,
            word,
            input,
        });
        request
    }

    /// Take the pending validation if `request` is the latest one
    pub fn finish_validation(&mut self, request: RequestId) -> Option<PendingValidation> {
        if self
            .validation
            .as_ref()
            .is_some_and(|pending| pending.request == request)
        {
            self.validation.take()
        } else {
            None
        }
    }
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Which flavour of the quiz is running
    pub variant: AppVariant,
}

impl Default for AppState {
    fn default() -> Self {
        let origin = Url::parse(DEFAULT_ORIGIN).expect("default origin is a valid URL");
        Self::with_config(UiConfig::default(), origin)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        // Detect environment for sensible defaults
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("VOCAB_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("VOCAB_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
            variant: AppVariant::default(),
        }
    }
}

impl UiConfig {
    /// UI settings from the loaded configuration; environment still wins
    /// for colours and tick rate
    pub fn from_config(config: &Config) -> Self {
        let env = Self::default();
        let tick_overridden = std::env::var("VOCAB_TUI_TICK_MS").is_ok();

        Self {
            colors_enabled: env.colors_enabled && config.ui.colors,
            tick_rate_ms: if tick_overridden {
                env.tick_rate_ms
            } else {
                config.ui.tick_rate_ms
            },
            variant: config.app.variant,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state for a given UI configuration and app origin
    pub fn with_config(config: UiConfig, origin: Url) -> Self {
        Self {
            should_quit: false,
            page: PageState::Idle,
            history: History::new(origin),
            last_result: None,
            requests: RequestTracker::default(),
            help_visible: false,
            address_bar: None,
            status: StatusBarState::default(),
            config,
        }
    }

    /// Create state from the loaded configuration
    pub fn from_config(config: &Config) -> libvocab::Result<Self> {
        Ok(Self::with_config(
            UiConfig::from_config(config),
            config.origin_url()?,
        ))
    }

    /// Path of the current URL, `/` before the first navigation
    pub fn current_path(&self) -> String {
        self.history
            .current()
            .map(|url| url.path().to_string())
            .unwrap_or_else(|| "/".to_string())
    }

    /// Word page state, if that is what is showing
    pub fn word_page(&self) -> Option<&WordPageState> {
        match self.page {
            PageState::Word(ref page) => Some(page),
            _ => None,
        }
    }

    /// Whether a submit would issue a validation request
    pub fn can_submit(&self) -> bool {
        self.word_page()
            .is_some_and(|page| page.word.loaded().is_some() && !page.submitting)
    }

    /// Whether typing should go to the translation input
    pub fn accepts_text_input(&self) -> bool {
        self.can_submit() && !self.help_visible && self.address_bar.is_none()
    }
}
