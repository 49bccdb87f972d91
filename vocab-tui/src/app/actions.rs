//! Actions and effects for the reducer pattern
//!
//! Every state transition is triggered by an [`Action`]. A transition may
//! additionally ask the driver to do one thing in the outside world, described
//! by an [`Effect`].

use crossterm::event::KeyEvent;
use libvocab::{BackendError, ValidationResult, Word};
use reqwest::Url;

/// Correlation token for an outgoing backend request.
///
/// Issued in strictly increasing order; a response is only applied when its
/// token is the latest one issued for that operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Go to a URL (absolute, or a path relative to the app origin)
    Navigate(String),

    /// Activate a link; in-app links become client-side navigations
    FollowLink(String),

    /// Step back in session history
    Back,

    /// Step forward in session history
    Forward,

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Address bar ===
    OpenAddressBar,
    AddressInputChanged(String),
    AddressSubmitted,
    CloseAddressBar,

    // === Quiz ===
    /// Translation text edited
    InputChanged(String),

    /// User asked to check the translation
    SubmitRequested,

    /// Word lookup finished
    WordFetched {
        request: RequestId,
        result: Result<Word, BackendError>,
    },

    /// Validation finished
    ValidationReceived {
        request: RequestId,
        result: Result<ValidationResult, BackendError>,
    },

    // === Status Bar ===
    SetStatus(String),
    ClearStatus,
}

/// Side effects requested by the reducer, executed by the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Look up a word; answer with [`Action::WordFetched`]
    FetchWord { request: RequestId, id: i64 },

    /// Validate a translation; answer with [`Action::ValidationReceived`]
    ValidateTranslation {
        request: RequestId,
        word_id: i64,
        input: String,
    },

    /// Client-side navigation; answer with [`Action::Navigate`]
    Navigate(String),

    /// A link leaving the app
    OpenExternal(Url),
}
