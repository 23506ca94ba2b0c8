//! Test utilities for database setup and sample content.
//!
//! Provides helpers that reuse authoritative schema initialization,
//! eliminating schema duplication in test code.

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use crate::content::{
    CanonicalAnswer, Catalog, Category, Example, Flashcard, GrammarCategory, PracticeQuestion,
    QuestionKind, WordReplacement,
};
use crate::db::DbPool;

/// Test environment with a progress database using the authoritative schema.
///
/// The temporary directory is kept alive for the lifetime of the
/// environment, ensuring automatic cleanup when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Database connection with full schema (all migrations)
    pub conn: Connection,
}

impl TestEnv {
    /// Create a test environment with the database initialized via
    /// `crate::db::schema::run_migrations()`.
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("progress.db");
        let conn = Connection::open(&db_path)?;
        crate::db::schema::run_migrations(&conn)?;

        Ok(Self { temp, conn })
    }

    /// Get the temporary directory path for creating test files.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Open a pooled handle to the same database file. SQLite allows
    /// multiple connections, so this can coexist with `self.conn`.
    pub fn pool(&self) -> DbPool {
        let conn = Connection::open(self.temp.path().join("progress.db"))
            .unwrap_or_else(|e| panic!("reopening test database: {}", e));
        Arc::new(Mutex::new(conn))
    }
}

fn replacement(
    original: &str,
    replacement: &str,
    hint: &str,
    grammar_type: GrammarCategory,
) -> WordReplacement {
    WordReplacement {
        original: original.to_string(),
        replacement: replacement.to_string(),
        hint: hint.to_string(),
        grammar_type,
    }
}

/// A small two-category catalog used across unit and integration tests.
pub fn sample_catalog() -> Catalog {
    let conjugaison = Category {
        id: "conjugaison".to_string(),
        name: "Conjugaison".to_string(),
        color: "#4caf50".to_string(),
        flashcards: vec![Flashcard {
            id: "conjugaison-present".to_string(),
            title: "Le présent de l'indicatif".to_string(),
            rule: "Au présent, les verbes en -er prennent -e, -es, -e, -ons, -ez, -ent."
                .to_string(),
            examples: vec![Example {
                id: "present-ex1".to_string(),
                sentence: "Je mange une pomme tous les jours.".to_string(),
                image_url: None,
                image_alt: None,
                replacements: vec![replacement(
                    "mange",
                    "mangeais",
                    "✅ On peut remplacer par l'imparfait!",
                    GrammarCategory::Verbe,
                )],
            }],
            practice: vec![
                PracticeQuestion {
                    id: "present-q1".to_string(),
                    kind: QuestionKind::Mcq,
                    prompt: "Quelle est la bonne conjugaison: tu (manger) ?".to_string(),
                    options: Some(vec![
                        "mange".to_string(),
                        "manges".to_string(),
                        "mangent".to_string(),
                    ]),
                    canonical_answer: CanonicalAnswer::Single("manges".to_string()),
                    explanation: Some("Avec « tu », les verbes en -er prennent un s.".to_string()),
                },
                PracticeQuestion {
                    id: "present-q2".to_string(),
                    kind: QuestionKind::FillBlank,
                    prompt: "Nous ___ (aller) à l'école.".to_string(),
                    options: None,
                    canonical_answer: CanonicalAnswer::Single("allons".to_string()),
                    explanation: Some("« Aller » est irrégulier: nous allons.".to_string()),
                },
            ],
        }],
    };

    let homophones = Category {
        id: "homophones".to_string(),
        name: "Homophones".to_string(),
        color: "#2196f3".to_string(),
        flashcards: vec![Flashcard {
            id: "ces-ses".to_string(),
            title: "Ces, ses et c'est".to_string(),
            rule: "« Ces » montre, « ses » indique la possession, « c'est » présente."
                .to_string(),
            examples: vec![Example {
                id: "ces-ses-ex1".to_string(),
                sentence: "Elle range ses cahiers.".to_string(),
                image_url: None,
                image_alt: None,
                replacements: vec![replacement(
                    "ses",
                    "les siens",
                    "✅ On peut remplacer par « les siens »!",
                    GrammarCategory::Determinant,
                )],
            }],
            practice: vec![PracticeQuestion {
                id: "ces-ses-q1".to_string(),
                kind: QuestionKind::DragDrop,
                prompt: "Place les mots dans l'ordre: ... livres, ... amis, ... super!"
                    .to_string(),
                options: Some(vec![
                    "ses".to_string(),
                    "c'est".to_string(),
                    "ces".to_string(),
                ]),
                canonical_answer: CanonicalAnswer::Sequence(vec![
                    "ces".to_string(),
                    "ses".to_string(),
                    "c'est".to_string(),
                ]),
                explanation: Some(
                    "« Ces livres » (montrer), « ses amis » (possession), « c'est super » (présenter)."
                        .to_string(),
                ),
            }],
        }],
    };

    Catalog::new(vec![conjugaison, homophones])
        .unwrap_or_else(|e| panic!("sample catalog must validate: {}", e))
}
