//! Core types for vocab

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A vocabulary item as served by the backend.
///
/// On the wire the text lives under `word`: `{ "word": "perro", "id": 5 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    #[serde(rename = "word")]
    pub text: String,
}

impl Word {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Backend verdict on a submitted translation.
///
/// Wire form: `{ "text": "gato", "correct": false }`, where `text` is the
/// expected translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(rename = "text")]
    pub corrected_text: String,
    #[serde(rename = "correct")]
    pub is_correct: bool,
}

impl ValidationResult {
    pub fn new(corrected_text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            corrected_text: corrected_text.into(),
            is_correct,
        }
    }
}

// ============================================================================
// Application variants
// ============================================================================

/// The three incremental flavours of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppVariant {
    /// Unstyled, path-based word lookup
    Plain,
    /// Styled widgets, query-based word lookup
    Styled,
    /// Styled, plus previous/next links on the result page
    #[default]
    Workflow,
}

impl AppVariant {
    /// Whether word lookups use `/vocabularies/<id>` instead of the query form
    pub fn uses_path_lookup(&self) -> bool {
        matches!(self, AppVariant::Plain)
    }

    /// Whether the result page offers previous/next navigation
    pub fn has_word_links(&self) -> bool {
        matches!(self, AppVariant::Workflow)
    }

    /// Whether widgets are drawn with borders and colours
    pub fn is_styled(&self) -> bool {
        !matches!(self, AppVariant::Plain)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppVariant::Plain => "plain",
            AppVariant::Styled => "styled",
            AppVariant::Workflow => "workflow",
        }
    }
}

impl FromStr for AppVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(AppVariant::Plain),
            "styled" => Ok(AppVariant::Styled),
            "workflow" => Ok(AppVariant::Workflow),
            _ => Err(format!(
                "Invalid variant: '{}'. Valid options: plain, styled, workflow",
                s
            )),
        }
    }
}

impl std::fmt::Display for AppVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
