//! Quiz flow through the reducer and the view
//!
//! Drives the state machine with the actions the event loop would feed it
//! and checks both the state and what the user would see.

use libvocab::{BackendError, ValidationResult, Word};
use vocab_tui::app::reducer::VALIDATION_FAILED;
use vocab_tui::app::{reduce, Action, AppState, Effect, PageState, Remote, RequestId};
use vocab_tui::view::{self, Node, CORRECT_MESSAGE, FETCH_FAILED_MESSAGE, NOT_FOUND_MESSAGE};

fn navigate(state: AppState, href: &str) -> (AppState, Option<Effect>) {
    reduce(state, Action::Navigate(href.to_string()))
}

fn fetch_request(effect: Option<Effect>) -> RequestId {
    match effect {
        Some(Effect::FetchWord { request, .. }) => request,
        other => panic!("expected a word lookup, got {:?}", other),
    }
}

fn validation_request(effect: Option<Effect>) -> RequestId {
    match effect {
        Some(Effect::ValidateTranslation { request, .. }) => request,
        other => panic!("expected a validation, got {:?}", other),
    }
}

fn loaded(state: AppState, request: RequestId, word: Word) -> AppState {
    reduce(
        state,
        Action::WordFetched {
            request,
            result: Ok(word),
        },
    )
    .0
}

#[test]
fn test_translate_house_end_to_end() {
    // Navigate to /word/1
    let (state, effect) = navigate(AppState::new(), "/word/1");
    let request = fetch_request(effect);
    assert!(view::render(&state).contains_text("Loading word #1"));

    // Lookup returns {word: "house", id: 1}
    let state = loaded(state, request, Word::new(1, "house"));
    let screen = view::render(&state);
    assert!(screen.contains_text("house"));
    assert!(matches!(
        screen.input(),
        Some(Node::Input { value, enabled: true, .. }) if value.is_empty()
    ));

    // Type "casa" and submit
    let (state, _) = reduce(state, Action::InputChanged("casa".to_string()));
    let (state, effect) = reduce(state, Action::SubmitRequested);
    assert_eq!(
        effect,
        Some(Effect::ValidateTranslation {
            request: state.requests.validation.as_ref().unwrap().request,
            word_id: 1,
            input: "casa".to_string(),
        })
    );
    let request = validation_request(effect);

    // Validation returns {text: "casa", correct: true}
    let (state, effect) = reduce(
        state,
        Action::ValidationReceived {
            request,
            result: Ok(ValidationResult::new("casa", true)),
        },
    );
    assert_eq!(effect, Some(Effect::Navigate("/result".to_string())));

    let (state, effect) = navigate(state, "/result");
    assert!(effect.is_none());
    assert_eq!(state.current_path(), "/result");

    let screen = view::render(&state);
    assert!(screen.contains_text("house"));
    assert!(screen.contains_text("casa"));
    assert!(screen.contains_text(CORRECT_MESSAGE));
}

#[test]
fn test_fetched_word_is_stored() {
    let (state, effect) = navigate(AppState::new(), "/word/5");
    let state = loaded(state, fetch_request(effect), Word::new(5, "perro"));

    let page = state.word_page().unwrap();
    assert_eq!(page.word, Remote::Loaded(Word::new(5, "perro")));
    assert_eq!(page.word.loaded().map(|w| w.text.as_str()), Some("perro"));
}

#[test]
fn test_submit_without_word_changes_nothing() {
    let (state, _) = navigate(AppState::new(), "/word/5");
    let (state, _) = reduce(state, Action::InputChanged("perro".to_string()));
    let before_page = state.page.clone();
    let before_requests = state.requests.clone();

    let (state, effect) = reduce(state, Action::SubmitRequested);

    assert!(effect.is_none());
    assert_eq!(state.page, before_page);
    assert_eq!(state.requests, before_requests);
}

#[test]
fn test_submit_outside_word_page_is_ignored() {
    let (state, _) = navigate(AppState::new(), "/nope");
    let (state, effect) = reduce(state, Action::SubmitRequested);

    assert!(effect.is_none());
    assert_eq!(state.page, PageState::NotFound);
}

#[test]
fn test_incorrect_translation_goes_to_result() {
    let (state, effect) = navigate(AppState::new(), "/word/3");
    let state = loaded(state, fetch_request(effect), Word::new(3, "cat"));
    let (state, _) = reduce(state, Action::InputChanged("perro".to_string()));
    let (state, effect) = reduce(state, Action::SubmitRequested);

    let (state, effect) = reduce(
        state,
        Action::ValidationReceived {
            request: validation_request(effect),
            result: Ok(ValidationResult::new("gato", false)),
        },
    );

    assert_eq!(effect, Some(Effect::Navigate("/result".to_string())));
    let result = state.last_result.as_ref().unwrap();
    assert!(!result.validation.is_correct);
    assert_eq!(result.validation.corrected_text, "gato");

    let (state, _) = navigate(state, "/result");
    let screen = view::render(&state);
    assert!(screen.contains_text(&view::incorrect_message("gato")));
    assert!(!screen.contains_text(CORRECT_MESSAGE));
}

#[test]
fn test_double_submit_sends_one_request() {
    let (state, effect) = navigate(AppState::new(), "/word/1");
    let state = loaded(state, fetch_request(effect), Word::new(1, "house"));
    let (state, _) = reduce(state, Action::InputChanged("casa".to_string()));

    let (state, first) = reduce(state, Action::SubmitRequested);
    let (_, second) = reduce(state, Action::SubmitRequested);

    assert!(first.is_some());
    assert!(second.is_none());
}

#[test]
fn test_stale_word_lookup_is_discarded() {
    let (state, first) = navigate(AppState::new(), "/word/1");
    let (state, second) = navigate(state, "/word/2");
    let (first, second) = (fetch_request(first), fetch_request(second));

    // The slower first lookup lands after the user moved on
    let state = loaded(state, first, Word::new(1, "house"));
    assert_eq!(state.word_page().unwrap().word, Remote::Loading);

    let state = loaded(state, second, Word::new(2, "dog"));
    assert_eq!(
        state.word_page().unwrap().word,
        Remote::Loaded(Word::new(2, "dog"))
    );
}

#[test]
fn test_stale_validation_is_discarded() {
    let (state, effect) = navigate(AppState::new(), "/word/1");
    let state = loaded(state, fetch_request(effect), Word::new(1, "house"));
    let (state, _) = reduce(state, Action::InputChanged("casa".to_string()));
    let (state, effect) = reduce(state, Action::SubmitRequested);
    let request = validation_request(effect);

    let (state, effect) = reduce(
        state,
        Action::ValidationReceived {
            request: RequestId(request.0 + 100),
            result: Ok(ValidationResult::new("casa", true)),
        },
    );

    assert!(effect.is_none());
    assert!(state.last_result.is_none());
    assert!(state.word_page().unwrap().submitting);
}

#[test]
fn test_lookup_failure_shows_message() {
    let (state, effect) = navigate(AppState::new(), "/word/9");
    let (state, _) = reduce(
        state,
        Action::WordFetched {
            request: fetch_request(effect),
            result: Err(BackendError::Status { status: 404 }),
        },
    );

    assert_eq!(state.word_page().unwrap().word, Remote::Failed);
    let screen = view::render(&state);
    assert!(screen.contains_text(FETCH_FAILED_MESSAGE));
    assert!(screen.input().is_none());
}

#[test]
fn test_validation_failure_stays_on_word_page() {
    let (state, effect) = navigate(AppState::new(), "/word/1");
    let state = loaded(state, fetch_request(effect), Word::new(1, "house"));
    let (state, _) = reduce(state, Action::InputChanged("casa".to_string()));
    let (state, effect) = reduce(state, Action::SubmitRequested);

    let (state, effect) = reduce(
        state,
        Action::ValidationReceived {
            request: validation_request(effect),
            result: Err(BackendError::Network("connection reset".to_string())),
        },
    );

    assert!(effect.is_none());
    assert_eq!(state.current_path(), "/word/1");
    assert!(state.last_result.is_none());
    assert_eq!(state.status.message.as_deref(), Some(VALIDATION_FAILED));

    // The user can try again
    let page = state.word_page().unwrap();
    assert!(!page.submitting);
    assert_eq!(page.input, "casa");
    assert!(state.can_submit());
}

#[test]
fn test_result_without_validation_shows_generic_failure() {
    let (state, _) = navigate(AppState::new(), "/result");

    assert_eq!(state.page, PageState::Result(None));
    assert!(view::render(&state).contains_text("Something went wrong"));
}

#[test]
fn test_unknown_path_renders_not_found() {
    for path in ["/", "/word/abc", "/results"] {
        let (state, _) = navigate(AppState::new(), path);
        assert_eq!(state.page, PageState::NotFound);
        assert!(view::render(&state).contains_text(NOT_FOUND_MESSAGE));
    }
}

#[test]
fn test_new_word_page_starts_with_empty_input() {
    let (state, effect) = navigate(AppState::new(), "/word/1");
    let state = loaded(state, fetch_request(effect), Word::new(1, "house"));
    let (state, _) = reduce(state, Action::InputChanged("casa".to_string()));

    let (state, _) = navigate(state, "/word/2");

    assert_eq!(state.word_page().unwrap().input, "");
}

#[test]
fn test_result_survives_back_and_forward() {
    let (state, effect) = navigate(AppState::new(), "/word/1");
    let state = loaded(state, fetch_request(effect), Word::new(1, "house"));
    let (state, _) = reduce(state, Action::InputChanged("casa".to_string()));
    let (state, effect) = reduce(state, Action::SubmitRequested);
    let (state, _) = reduce(
        state,
        Action::ValidationReceived {
            request: validation_request(effect),
            result: Ok(ValidationResult::new("casa", true)),
        },
    );
    let (state, _) = navigate(state, "/result");

    let (state, _) = reduce(state, Action::Back);
    assert_eq!(state.current_path(), "/word/1");

    let (state, _) = reduce(state, Action::Forward);
    assert_eq!(state.current_path(), "/result");
    assert!(view::render(&state).contains_text(CORRECT_MESSAGE));
}
