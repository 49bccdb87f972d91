//! Driving the reducer and carrying out its effects
//!
//! Client-side navigation is handled here directly by feeding the target
//! back into the reducer. Backend calls are handed to an [`EffectRunner`],
//! whose results return later as separate actions.

use std::collections::VecDeque;

use reqwest::Url;

use super::actions::{Action, Effect, RequestId};
use super::reducer::reduce;
use super::state::AppState;

/// Executes effects that leave the state machine
pub trait EffectRunner {
    /// Start a word lookup; the result must come back as `Action::WordFetched`
    fn fetch_word(&mut self, request: RequestId, id: i64);

    /// Start a validation; the result must come back as `Action::ValidationReceived`
    fn validate_translation(&mut self, request: RequestId, word_id: i64, input: String);

    /// Follow a link outside the app. Returns a status line for the user.
    fn open_external(&mut self, url: &Url) -> Option<String>;
}

/// Apply `action` and every follow-up it causes synchronously.
///
/// Returns the final state once no synchronous follow-up remains.
pub fn dispatch<R: EffectRunner>(state: AppState, action: Action, runner: &mut R) -> AppState {
    let mut state = state;
    let mut queue = VecDeque::from([action]);

    while let Some(action) = queue.pop_front() {
        let (next, effect) = reduce(state, action);
        state = next;

        match effect {
            Some(Effect::Navigate(href)) => queue.push_back(Action::Navigate(href)),
            Some(Effect::FetchWord { request, id }) => runner.fetch_word(request, id),
            Some(Effect::ValidateTranslation {
                request,
                word_id,
                input,
            }) => runner.validate_translation(request, word_id, input),
            Some(Effect::OpenExternal(url)) => {
                tracing::info!("External link: {}", url);
                if let Some(message) = runner.open_external(&url) {
                    queue.push_back(Action::SetStatus(message));
                }
            }
            None => {}
        }
    }

    state
}
