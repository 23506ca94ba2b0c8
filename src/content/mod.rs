//! Content catalog for grammar topics.
//!
//! The catalog is externally authored data: categories of flashcards, each
//! with a rule, example sentences (optionally carrying word replacements)
//! and practice questions. The app consumes this data read-only; structural
//! conformance is checked once at load time, never defended against at
//! runtime.

pub mod catalog;
pub mod schema;

pub use catalog::{Catalog, CatalogError, load_catalog, load_category_file};
pub use schema::{
    CanonicalAnswer, Category, Example, Flashcard, GrammarCategory, PracticeQuestion,
    QuestionKind, WordReplacement,
};
