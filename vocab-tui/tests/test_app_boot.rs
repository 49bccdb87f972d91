//! Test application initialization and boot sequence
//!
//! Verifies that the app initializes with correct defaults
//! based on configuration and environment variables.

use libvocab::config::Config;
use libvocab::AppVariant;
use serial_test::serial;
use vocab_tui::app::{dispatch, Action, AppState, Effect, EffectRunner, PageState, RequestId};
use reqwest::Url;

#[derive(Default)]
struct Recorder {
    fetches: Vec<i64>,
}

impl EffectRunner for Recorder {
    fn fetch_word(&mut self, _request: RequestId, id: i64) {
        self.fetches.push(id);
    }

    fn validate_translation(&mut self, _request: RequestId, _word_id: i64, _input: String) {}

    fn open_external(&mut self, _url: &Url) -> Option<String> {
        None
    }
}

#[test]
fn test_app_starts_idle() {
    let state = AppState::new();

    assert_eq!(state.page, PageState::Idle);
    assert!(!state.should_quit);
    assert!(state.history.is_empty());
    assert!(state.last_result.is_none());
}

#[test]
fn test_help_and_address_bar_hidden_by_default() {
    let state = AppState::new();

    assert!(!state.help_visible);
    assert!(state.address_bar.is_none());
    assert!(state.status.message.is_none());
}

#[test]
fn test_default_variant_is_workflow() {
    let state = AppState::new();
    assert_eq!(state.config.variant, AppVariant::Workflow);
}

#[test]
fn test_state_from_config() {
    let mut config = Config::default_config();
    config.app.variant = AppVariant::Plain;
    config.app.origin = "http://quiz.local:9000".to_string();

    let state = AppState::from_config(&config).unwrap();

    assert_eq!(state.config.variant, AppVariant::Plain);
    assert_eq!(state.history.origin().as_str(), "http://quiz.local:9000/");
}

#[test]
fn test_start_path_fetches_first_word() {
    let config = Config::default_config();
    let mut runner = Recorder::default();

    let state = dispatch(
        AppState::from_config(&config).unwrap(),
        Action::Navigate(config.app.start.clone()),
        &mut runner,
    );

    assert_eq!(runner.fetches, vec![1]);
    assert_eq!(state.current_path(), "/word/1");
    assert!(state.requests.fetch.is_some());
}

#[test]
fn test_root_start_shows_not_found() {
    let (state, effect) = vocab_tui::reduce(AppState::new(), Action::Navigate("/".to_string()));

    assert_eq!(state.page, PageState::NotFound);
    assert!(effect.is_none());
}

#[test]
fn test_start_elsewhere_is_external() {
    let (_, effect) = vocab_tui::reduce(
        AppState::new(),
        Action::Navigate("https://example.org/word/1".to_string()),
    );
    assert!(matches!(effect, Some(Effect::OpenExternal(_))));
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("VOCAB_TUI_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("VOCAB_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_config_colors_off_wins() {
    std::env::remove_var("NO_COLOR");
    std::env::remove_var("VOCAB_TUI_NO_COLOR");
    let mut config = Config::default_config();
    config.ui.colors = false;
    config.ui.tick_rate_ms = 40;

    let state = AppState::from_config(&config).unwrap();

    assert!(!state.config.colors_enabled);
    assert_eq!(state.config.tick_rate_ms, 40);
}
