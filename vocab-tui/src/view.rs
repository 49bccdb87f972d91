//! View: state -> UI tree
//!
//! `render` is a pure function of [`AppState`]. It decides *what* is on the
//! screen; `ui` decides how a tree is drawn in the terminal.

use crate::app::{AppState, PageState, Remote, ResultPageState, WordPageState};

pub const NOT_FOUND_MESSAGE: &str = "Page not found.";
pub const FETCH_FAILED_MESSAGE: &str = "Could not load the word. Please try again later.";
pub const RESULT_UNAVAILABLE_MESSAGE: &str =
    "Something went wrong: there is no result to show. Translate a word first.";
pub const CORRECT_MESSAGE: &str = "Correct translation!";

/// Message for a wrong answer, naming the expected translation
pub fn incorrect_message(corrected: &str) -> String {
    format!("Wrong translation. The correct answer is \"{}\".", corrected)
}

/// Colour intent of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Failure,
}

/// A navigation link with the key that activates it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    pub label: String,
    pub href: String,
    pub key: char,
}

/// UI tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Column(Vec<Node>),
    Heading(String),
    Text(String),
    /// Label/value pair, e.g. "Your translation: casa"
    Field { label: String, value: String },
    Notice { tone: Tone, text: String },
    /// The translation text box
    Input {
        value: String,
        placeholder: String,
        enabled: bool,
    },
    Button { label: String, enabled: bool },
    Links(Vec<LinkNode>),
}

impl Node {
    /// All text carried by this node and its children, depth first
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<String>) {
        match self {
            Node::Column(children) => children.iter().for_each(|c| c.collect_texts(out)),
            Node::Heading(text) | Node::Text(text) => out.push(text.clone()),
            Node::Field { label, value } => out.push(format!("{}: {}", label, value)),
            Node::Notice { text, .. } => out.push(text.clone()),
            Node::Input { value, .. } => out.push(value.clone()),
            Node::Button { label, .. } => out.push(label.clone()),
            Node::Links(links) => out.extend(links.iter().map(|l| l.label.clone())),
        }
    }

    /// Whether any text in the tree contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// The input node, if the tree has one
    pub fn input(&self) -> Option<&Node> {
        match self {
            Node::Input { .. } => Some(self),
            Node::Column(children) => children.iter().find_map(Node::input),
            _ => None,
        }
    }

    /// Links in the tree
    pub fn links(&self) -> Vec<&LinkNode> {
        match self {
            Node::Links(links) => links.iter().collect(),
            Node::Column(children) => children.iter().flat_map(Node::links).collect(),
            _ => Vec::new(),
        }
    }
}

/// Render the current state
pub fn render(state: &AppState) -> Node {
    match state.page {
        PageState::Idle => Node::Column(Vec::new()),
        PageState::NotFound => Node::Column(vec![Node::Notice {
            tone: Tone::Failure,
            text: NOT_FOUND_MESSAGE.to_string(),
        }]),
        PageState::Word(ref page) => render_word(page),
        PageState::Result(Some(ref result)) => {
            render_result(result, state.config.variant.has_word_links())
        }
        PageState::Result(None) => Node::Column(vec![Node::Notice {
            tone: Tone::Failure,
            text: RESULT_UNAVAILABLE_MESSAGE.to_string(),
        }]),
    }
}

fn render_word(page: &WordPageState) -> Node {
    match page.word {
        Remote::Loading => Node::Column(vec![Node::Notice {
            tone: Tone::Info,
            text: format!("Loading word #{}...", page.id),
        }]),
        Remote::Failed => Node::Column(vec![Node::Notice {
            tone: Tone::Failure,
            text: FETCH_FAILED_MESSAGE.to_string(),
        }]),
        Remote::Loaded(ref word) => Node::Column(vec![
            Node::Text("Translate this word:".to_string()),
            Node::Heading(word.text.clone()),
            Node::Input {
                value: page.input.clone(),
                placeholder: "Type your translation".to_string(),
                enabled: !page.submitting,
            },
            Node::Button {
                label: if page.submitting {
                    "Checking...".to_string()
                } else {
                    "Check (Enter)".to_string()
                },
                enabled: !page.submitting,
            },
        ]),
    }
}

fn render_result(result: &ResultPageState, with_links: bool) -> Node {
    let verdict = if result.validation.is_correct {
        Node::Notice {
            tone: Tone::Success,
            text: CORRECT_MESSAGE.to_string(),
        }
    } else {
        Node::Notice {
            tone: Tone::Failure,
            text: incorrect_message(&result.validation.corrected_text),
        }
    };

    let mut children = vec![
        Node::Field {
            label: "Word".to_string(),
            value: result.word.text.clone(),
        },
        Node::Field {
            label: "Your translation".to_string(),
            value: result.input.clone(),
        },
        verdict,
    ];

    if with_links {
        let mut links = Vec::new();
        if let Some(href) = result.previous_href() {
            links.push(LinkNode {
                label: "< Previous word (p)".to_string(),
                href,
                key: 'p',
            });
        }
        if let Some(href) = result.next_href() {
            links.push(LinkNode {
                label: "Next word (n) >".to_string(),
                href,
                key: 'n',
            });
        }
        children.push(Node::Links(links));
    }

    Node::Column(children)
}
