//! Catalog data types (serde shapes match the authored JSON).

use serde::{Deserialize, Serialize};

/// Grammatical category of a word replacement.
///
/// Wire names are French, matching the authored catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarCategory {
    Verbe,
    Determinant,
    Pronom,
    Conjonction,
    Adverbe,
    Preposition,
}

impl GrammarCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verbe => "verbe",
            Self::Determinant => "determinant",
            Self::Pronom => "pronom",
            Self::Conjonction => "conjonction",
            Self::Adverbe => "adverbe",
            Self::Preposition => "preposition",
        }
    }

    /// Display label shown in the hint popover.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Verbe => "C'est un verbe",
            Self::Determinant => "C'est un déterminant",
            Self::Pronom => "C'est un pronom",
            Self::Conjonction => "C'est une conjonction",
            Self::Adverbe => "C'est un adverbe",
            Self::Preposition => "C'est une préposition",
        }
    }
}

/// An alternative word or phrase substitutable for a sentence fragment,
/// with a grammatical-correctness hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordReplacement {
    pub original: String,
    pub replacement: String,
    pub hint: String,
    pub grammar_type: GrammarCategory,
}

/// An example sentence in a flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub id: String,
    pub sentence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub replacements: Vec<WordReplacement>,
}

/// Kind of practice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "mcq")]
    Mcq,
    #[serde(rename = "fill-blank")]
    FillBlank,
    #[serde(rename = "drag-drop")]
    DragDrop,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::FillBlank => "fill-blank",
            Self::DragDrop => "drag-drop",
        }
    }
}

/// Canonical answer: a single string for mcq/fill-blank, an ordered
/// sequence for drag-drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalAnswer {
    Single(String),
    Sequence(Vec<String>),
}

/// A practice question attached to a flashcard. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(rename = "correctAnswer")]
    pub canonical_answer: CanonicalAnswer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// One grammar topic unit: a rule, examples and practice questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub title: String,
    pub rule: String,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub practice: Vec<PracticeQuestion>,
}

/// A topic category containing flashcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub flashcards: Vec<Flashcard>,
}
