//! Reducer: the quiz's state machine
//!
//! `(State, Action) -> (State, Option<Effect>)`
//!
//! The reducer does no I/O. Anything that has to reach the outside world
//! (backend calls, navigation, external links) is returned as an [`Effect`]
//! for the driver to carry out; the outcome comes back as another action.
//! Actions that do not apply to the current state are no-ops.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libvocab::route::{self, Page, RESULT_PATH};
use libvocab::{BackendError, Link, ValidationResult, Word};
use reqwest::Url;

use super::actions::{Action, Effect, RequestId};
use super::state::{AppState, PageState, Remote, ResultPageState, WordPageState};

/// Status line shown when a validation request fails
pub const VALIDATION_FAILED: &str = "Could not check the translation. Please try again.";

/// Apply `action` to `state`.
///
/// Produces exactly one new state and at most one effect. Never panics on
/// unexpected input.
pub fn reduce(mut state: AppState, action: Action) -> (AppState, Option<Effect>) {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick | Action::Resize(_, _) => (state, None),

        // === Navigation ===
        Action::Navigate(href) => navigate(state, &href),
        Action::FollowLink(href) => follow_link(state, &href),
        Action::Back => match state.history.back().cloned() {
            Some(url) => enter(state, url),
            None => (state, None),
        },
        Action::Forward => match state.history.forward().cloned() {
            Some(url) => enter(state, url),
            None => (state, None),
        },

        Action::Quit => {
            state.should_quit = true;
            (state, None)
        }

        Action::ShowHelp => {
            state.help_visible = true;
            (state, None)
        }

        Action::HideHelp => {
            state.help_visible = false;
            (state, None)
        }

        // === Address bar ===
        Action::OpenAddressBar => {
            state.address_bar = Some(state.current_path());
            (state, None)
        }

        Action::AddressInputChanged(text) => {
            if state.address_bar.is_some() {
                state.address_bar = Some(text);
            }
            (state, None)
        }

        Action::AddressSubmitted => match state.address_bar.take() {
            Some(text) if !text.trim().is_empty() => navigate(state, text.trim()),
            _ => (state, None),
        },

        Action::CloseAddressBar => {
            state.address_bar = None;
            (state, None)
        }

        // === Quiz ===
        Action::InputChanged(text) => {
            if let PageState::Word(ref mut page) = state.page {
                page.input = text;
            }
            (state, None)
        }

        Action::SubmitRequested => submit(state),

        Action::WordFetched { request, result } => word_fetched(state, request, result),

        Action::ValidationReceived { request, result } => {
            validation_received(state, request, result)
        }

        // === Status Bar ===
        Action::SetStatus(message) => {
            state.status.message = Some(message);
            (state, None)
        }

        Action::ClearStatus => {
            state.status.message = None;
            (state, None)
        }
    }
}

/// Go to `href`, recording it in history when it stays inside the app
fn navigate(mut state: AppState, href: &str) -> (AppState, Option<Effect>) {
    match state.history.classify(href) {
        Some(Link::Internal(url)) => {
            if state.history.current() != Some(&url) {
                state.history.push(url.clone());
            }
            enter(state, url)
        }
        Some(Link::External(url)) => (state, Some(Effect::OpenExternal(url))),
        None => {
            state.status.message = Some(format!("Invalid address: {}", href));
            (state, None)
        }
    }
}

/// Links inside the app navigate client-side; others leave it
fn follow_link(mut state: AppState, href: &str) -> (AppState, Option<Effect>) {
    match state.history.classify(href) {
        Some(Link::Internal(url)) => (state, Some(Effect::Navigate(path_and_query(&url)))),
        Some(Link::External(url)) => (state, Some(Effect::OpenExternal(url))),
        None => {
            state.status.message = Some(format!("Invalid link: {}", href));
            (state, None)
        }
    }
}

fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// Show the page for `url` (already in history)
fn enter(mut state: AppState, url: Url) -> (AppState, Option<Effect>) {
    let page = route::resolve(&url);
    tracing::debug!("Entering {} as {:?}", url.path(), page);

    let (page, effect) = match page {
        Page::NotFound => (PageState::NotFound, None),
        Page::Word(id) => {
            let request = state.requests.start_fetch();
            (
                PageState::Word(WordPageState::loading(id)),
                Some(Effect::FetchWord { request, id }),
            )
        }
        Page::Result => (PageState::Result(state.last_result.clone()), None),
    };

    state.page = page;
    (state, effect)
}

fn submit(mut state: AppState) -> (AppState, Option<Effect>) {
    let PageState::Word(ref mut page) = state.page else {
        return (state, None);
    };
    if page.submitting {
        return (state, None);
    }
    let Some(word) = page.word.loaded().cloned() else {
        tracing::debug!("Submit ignored: no word loaded");
        return (state, None);
    };

    page.submitting = true;
    let input = page.input.clone();
    let word_id = word.id;
    let request = state.requests.start_validation(word, input.clone());

    (
        state,
        Some(Effect::ValidateTranslation {
            request,
            word_id,
            input,
        }),
    )
}

fn word_fetched(
    mut state: AppState,
    request: RequestId,
    result: Result<Word, BackendError>,
) -> (AppState, Option<Effect>) {
    if !state.requests.finish_fetch(request) {
        tracing::debug!("Discarding stale word lookup {:?}", request);
        return (state, None);
    }

    match state.page {
        PageState::Word(ref mut page) => {
            page.word = match result {
                Ok(word) => Remote::Loaded(word),
                Err(e) => {
                    tracing::warn!("Could not load word {}: {}", page.id, e);
                    Remote::Failed
                }
            };
        }
        _ => tracing::debug!("Word lookup {:?} finished after leaving the page", request),
    }

    (state, None)
}

fn validation_received(
    mut state: AppState,
    request: RequestId,
    result: Result<ValidationResult, BackendError>,
) -> (AppState, Option<Effect>) {
    let Some(pending) = state.requests.finish_validation(request) else {
        tracing::debug!("Discarding stale validation {:?}", request);
        return (state, None);
    };

    if let PageState::Word(ref mut page) = state.page {
        page.submitting = false;
    }

    match result {
        Ok(validation) => {
            tracing::info!(
                "Translation of word {} checked: correct={}",
                pending.word.id,
                validation.is_correct
            );
            state.last_result = Some(ResultPageState {
                word: pending.word,
                input: pending.input,
                validation,
            });
            (state, Some(Effect::Navigate(RESULT_PATH.to_string())))
        }
        Err(e) => {
            tracing::warn!("Could not validate word {}: {}", pending.word.id, e);
            state.last_result = None;
            state.status.message = Some(VALIDATION_FAILED.to_string());
            (state, None)
        }
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
/// Plain text typed into the translation input never reaches here; the
/// driver turns it into `InputChanged`.
fn handle_key(state: AppState, key: KeyEvent) -> (AppState, Option<Effect>) {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::OpenAddressBar);
        }

        (KeyCode::Left, KeyModifiers::ALT) => return reduce(state, Action::Back),
        (KeyCode::Right, KeyModifiers::ALT) => return reduce(state, Action::Forward),

        (KeyCode::Esc, _) if state.address_bar.is_some() => {
            return reduce(state, Action::CloseAddressBar);
        }
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }
        (KeyCode::Esc, _) if state.status.message.is_some() => {
            return reduce(state, Action::ClearStatus);
        }

        _ => {}
    }

    if let Some(text) = state.address_bar.clone() {
        return handle_address_key(text, state, key);
    }

    if state.help_visible {
        return (state, None);
    }

    // The word page owns letter keys even while its input is disabled
    if key.code == KeyCode::Char('q')
        && key.modifiers == KeyModifiers::NONE
        && !matches!(state.page, PageState::Word(_))
    {
        return reduce(state, Action::Quit);
    }

    // Page-specific keybindings
    match state.page {
        PageState::Word(_) => handle_word_key(state, key),
        PageState::Result(Some(_)) if state.config.variant.has_word_links() => {
            handle_result_key(state, key)
        }
        _ => (state, None),
    }
}

/// Single-line editing of the address bar
fn handle_address_key(
    mut text: String,
    state: AppState,
    key: KeyEvent,
) -> (AppState, Option<Effect>) {
    match key.code {
        KeyCode::Enter => reduce(state, Action::AddressSubmitted),
        KeyCode::Backspace => {
            text.pop();
            reduce(state, Action::AddressInputChanged(text))
        }
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            text.push(c);
            reduce(state, Action::AddressInputChanged(text))
        }
        _ => (state, None),
    }
}

fn handle_word_key(state: AppState, key: KeyEvent) -> (AppState, Option<Effect>) {
    match key.code {
        KeyCode::Enter => reduce(state, Action::SubmitRequested),
        _ => (state, None),
    }
}

/// Previous/next word links on the result page
fn handle_result_key(state: AppState, key: KeyEvent) -> (AppState, Option<Effect>) {
    let PageState::Result(Some(ref result)) = state.page else {
        return (state, None);
    };

    let target = match (key.code, key.modifiers) {
        (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('p'), KeyModifiers::NONE) => {
            result.previous_href()
        }
        (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('n'), KeyModifiers::NONE) => {
            result.next_href()
        }
        _ => None,
    };

    match target {
        Some(href) => reduce(state, Action::FollowLink(href)),
        None => (state, None),
    }
}
