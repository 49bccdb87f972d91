//! Translation input with tui-textarea integration
//!
//! Wraps a single-line `TextArea`. The reducer owns the text; the widget
//! owns the cursor. Every edit is reported back so it can be fed in as
//! `Action::InputChanged`, and `sync` pulls the widget back in line when
//! the reducer changes the text (e.g. a new word page starts empty).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Type your translation (Enter to check)";

/// Single-line text box for the translation
pub struct TranslationInput {
    textarea: TextArea<'static>,
}

impl Default for TranslationInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationInput {
    pub fn new() -> Self {
        Self::with_value("")
    }

    fn with_value(value: &str) -> Self {
        let mut textarea = TextArea::new(vec![value.to_string()]);
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Current text
    pub fn value(&self) -> String {
        self.textarea.lines().join("")
    }

    /// Whether `key` belongs to the app rather than the text box
    ///
    /// Enter submits and must never insert a line break.
    pub fn is_reserved(key: &KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) | (KeyCode::Esc, _) | (KeyCode::Tab, _) | (KeyCode::F(_), _) => {
                true
            }
            (KeyCode::Char(c), m) if m.contains(KeyModifiers::CONTROL) => {
                matches!(c, 'c' | 'q' | 'l' | 'm' | 'j')
            }
            (KeyCode::Left, m) | (KeyCode::Right, m) => m.contains(KeyModifiers::ALT),
            _ => false,
        }
    }

    /// Feed a key to the text box
    ///
    /// Returns the new text if the key was consumed, `None` if it should go
    /// to the reducer instead.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        if Self::is_reserved(&key) {
            return None;
        }
        self.textarea.input(key);
        Some(self.value())
    }

    /// Replace the text if it differs from `value`
    pub fn sync(&mut self, value: &str) {
        if self.value() != value {
            *self = Self::with_value(value);
        }
    }

    /// Draw the text box
    pub fn render(&mut self, frame: &mut Frame, area: Rect, enabled: bool, styled: bool) {
        let mut block = Block::default().title(" Translation ");
        if styled {
            let color = if enabled { Color::Cyan } else { Color::Yellow };
            block = block
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            self.textarea
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            block = block.borders(Borders::TOP);
        }
        if !enabled {
            // Hide the cursor while a check is in flight
            self.textarea.set_cursor_style(Style::default());
        }
        self.textarea.set_block(block);
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_reports_value() {
        let mut input = TranslationInput::new();
        assert_eq!(input.handle_key(key(KeyCode::Char('c'))), Some("c".to_string()));
        assert_eq!(input.handle_key(key(KeyCode::Char('q'))), Some("cq".to_string()));
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), Some("c".to_string()));
    }

    #[test]
    fn test_enter_is_not_consumed() {
        let mut input = TranslationInput::new();
        input.handle_key(key(KeyCode::Char('a')));
        assert_eq!(input.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_sync_replaces_text() {
        let mut input = TranslationInput::new();
        input.handle_key(key(KeyCode::Char('x')));
        input.sync("");
        assert_eq!(input.value(), "");

        input.sync("casa");
        assert_eq!(input.handle_key(key(KeyCode::Char('s'))), Some("casas".to_string()));
    }
}
