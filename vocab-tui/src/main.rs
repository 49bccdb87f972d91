//! vocab-tui - vocabulary translation quiz in the terminal
//!
//! Fetches a word from the vocabulary service, lets the user type a
//! translation and shows whether it was right.

use clap::Parser;
use vocab_tui::{
    app::{
        dispatch,
        event::{EventSource, TuiEvent},
        Action, AppState,
    },
    cli::Cli,
    error::Result,
    services::ServiceHandle,
    terminal::{TerminalSession, Tui},
    ui::{self, TranslationInput},
};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    // The terminal belongs to the UI, so logs go to a file
    cli.logging()?.init()?;

    let config = cli.load_config()?;
    tracing::info!(
        "Starting vocab-tui ({} variant, backend {})",
        config.app.variant,
        if cli.mock { "mock" } else { config.backend.base_url.as_str() }
    );

    let services = ServiceHandle::from_config(&config, cli.mock)?;
    let state = AppState::from_config(&config)?;

    let mut session = TerminalSession::enter()?;
    let result = run_app(session.terminal(), state, services, &config.app.start);
    session.leave()?;

    result
}

fn run_app(
    terminal: &mut Tui,
    state: AppState,
    mut services: ServiceHandle,
    start: &str,
) -> Result<()> {
    let mut input = TranslationInput::new();
    let events = EventSource::new(state.config.tick_rate_ms);

    let mut state = dispatch(state, Action::Navigate(start.to_string()), &mut services);

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state, &mut input);
        })?;

        // Typing goes to the text box while the word page accepts input
        let action = match events.next()? {
            TuiEvent::Key(key) if state.accepts_text_input() => match input.handle_key(key) {
                Some(text) => Action::InputChanged(text),
                None => Action::Key(key),
            },
            other => other.into(),
        };

        state = dispatch(state, action, &mut services);

        // Backend results that arrived meanwhile
        for action in services.drain() {
            state = dispatch(state, action, &mut services);
        }

        // Keep the text box in line with the page (a new word starts empty)
        let text = state.word_page().map(|page| page.input.as_str()).unwrap_or("");
        input.sync(text);

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
