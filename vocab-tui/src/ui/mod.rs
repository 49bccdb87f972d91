//! UI rendering
//!
//! Draws the tree produced by [`view::render`](crate::view::render) into a
//! terminal frame. Layout top to bottom: address bar, page body, status
//! bar. Overlays (help) are drawn last.

pub mod input;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::view::{self, Node, Tone};
pub use input::TranslationInput;

/// Colours and borders are used only for styled variants with colours on
fn is_styled(state: &AppState) -> bool {
    state.config.variant.is_styled() && state.config.colors_enabled
}

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, input: &mut TranslationInput) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Address bar
            Constraint::Min(3),    // Page
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_address_bar(frame, chunks[0], state);
    render_page(frame, chunks[1], state, input);
    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

fn render_address_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let styled = is_styled(state);
    let (text, editing) = match state.address_bar {
        Some(ref text) => (format!("{}_", text), true),
        None => (state.current_path(), false),
    };

    let mut block = Block::default().title(" Address ").borders(Borders::ALL);
    if styled && editing {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_page(frame: &mut Frame, area: Rect, state: &AppState, input: &mut TranslationInput) {
    let styled = is_styled(state);
    let tree = view::render(state);
    let children = match tree {
        Node::Column(children) => children,
        other => vec![other],
    };

    let block = if styled {
        Block::default()
            .title(" Vocabulary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
    } else {
        Block::default()
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = children
        .iter()
        .map(|node| node_height(node, inner.width, styled))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (node, row) in children.iter().zip(rows.iter()) {
        match node {
            Node::Input { enabled, .. } => input.render(frame, *row, *enabled, styled),
            other => {
                let paragraph = Paragraph::new(node_lines(other, styled)).wrap(Wrap { trim: true });
                frame.render_widget(paragraph, *row);
            }
        }
    }
}

/// Rows a node needs once its text is wrapped to `width`
fn node_height(node: &Node, width: u16, styled: bool) -> Constraint {
    let wrapped: u16 = node_lines(node, styled)
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrapped_rows(&text, width)
        })
        .sum();

    match node {
        Node::Input { .. } => Constraint::Length(3),
        // Blank row under the heading
        Node::Heading(_) => Constraint::Length(wrapped + 1),
        _ => Constraint::Length(wrapped.max(1)),
    }
}

/// Row count of `text` under greedy word wrapping; words wider than the
/// row are broken across rows.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows: usize = 1;
    let mut used = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        rows += (len - 1) / width;
        used = (len - 1) % width + 1;
    }

    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn node_lines(node: &Node, styled: bool) -> Vec<Line<'static>> {
    let style = |s: Style| if styled { s } else { Style::default() };

    match node {
        Node::Column(children) => children
            .iter()
            .flat_map(|child| node_lines(child, styled))
            .collect(),
        Node::Heading(text) => vec![Line::from(Span::styled(
            text.clone(),
            style(Style::default().add_modifier(Modifier::BOLD).fg(Color::White)),
        ))],
        Node::Text(text) => vec![Line::from(text.clone())],
        Node::Field { label, value } => vec![Line::from(vec![
            Span::styled(format!("{}: ", label), style(Style::default().fg(Color::Gray))),
            Span::styled(value.clone(), style(Style::default().add_modifier(Modifier::BOLD))),
        ])],
        Node::Notice { tone, text } => {
            let color = match tone {
                Tone::Info => Color::Yellow,
                Tone::Success => Color::Green,
                Tone::Failure => Color::Red,
            };
            vec![Line::from(Span::styled(
                text.clone(),
                style(Style::default().fg(color)),
            ))]
        }
        Node::Input { value, .. } => vec![Line::from(value.clone())],
        Node::Button { label, enabled } => {
            let s = if *enabled {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![Line::from(Span::styled(format!("[ {} ]", label), style(s)))]
        }
        Node::Links(links) => {
            let mut spans = Vec::new();
            for (i, link) in links.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.push(Span::styled(
                    link.label.clone(),
                    style(Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)),
                ));
            }
            vec![Line::from(spans)]
        }
    }
}

/// Status message, or key hints when there is none
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let styled = is_styled(state);

    let paragraph = match state.status.message {
        Some(ref message) => {
            let p = Paragraph::new(message.as_str())
                .block(Block::default().borders(Borders::ALL).title(" Status "));
            if styled {
                p.style(Style::default().fg(Color::Yellow))
            } else {
                p
            }
        }
        None => {
            let hints = if state.address_bar.is_some() {
                "Enter: Go | Esc: Cancel"
            } else if state.can_submit() {
                "Enter: Check | Ctrl+L: Address | F1: Help | Ctrl+Q: Quit"
            } else if state.word_page().is_some() {
                "Ctrl+L: Address | Alt+Left/Right: Back/Forward | F1: Help | Ctrl+Q: Quit"
            } else {
                "Ctrl+L: Address | Alt+Left/Right: Back/Forward | F1: Help | q: Quit"
            };
            let p = Paragraph::new(hints).block(Block::default().borders(Borders::ALL));
            if styled {
                p.style(Style::default().fg(Color::Gray))
            } else {
                p
            }
        }
    };

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+Q / Ctrl+C  - Quit"),
        Line::from("  q                - Quit (outside word pages)"),
        Line::from("  F1               - Toggle help"),
        Line::from("  Ctrl+L           - Edit address"),
        Line::from("  Alt+Left/Right   - Back / forward"),
        Line::from("  Esc              - Dismiss overlays"),
        Line::from(""),
        Line::from("Word page:"),
        Line::from("  Enter            - Check translation"),
    ];
    if state.config.variant.has_word_links() {
        help_text.push(Line::from(""));
        help_text.push(Line::from("Result page:"));
        help_text.push(Line::from("  p / Left         - Previous word"));
        help_text.push(Line::from("  n / Right        - Next word"));
    }
    help_text.push(Line::from(""));
    help_text.push(Line::from("Press Esc or F1 to close"));

    let mut block = Block::default().title(" Help ").borders(Borders::ALL);
    if is_styled(state) {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
