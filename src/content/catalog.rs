//! Catalog loading and shape validation.
//!
//! Categories are authored as JSON files, one category per file, in a
//! catalog directory. Shape invariants (mcq answer is one of the options,
//! drag-drop answer is a permutation of the options) are a content-authoring
//! contract checked here once; the practice engine assumes them afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::schema::{CanonicalAnswer, Category, Flashcard, PracticeQuestion, QuestionKind};

/// Error loading or validating catalog content.
#[derive(Debug)]
pub enum CatalogError {
    IoError(String),
    ParseError(String),
    InvalidContent(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::IoError(e) => write!(f, "IO error: {}", e),
            CatalogError::ParseError(e) => write!(f, "Parse error: {}", e),
            CatalogError::InvalidContent(e) => write!(f, "Invalid content: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Loaded, validated catalog with id lookups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        for category in &categories {
            for flashcard in &category.flashcards {
                validate_flashcard(&category.id, flashcard)?;
            }
        }
        Ok(Self { categories })
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn flashcard(&self, category_id: &str, flashcard_id: &str) -> Option<&Flashcard> {
        self.category(category_id)?
            .flashcards
            .iter()
            .find(|f| f.id == flashcard_id)
    }

    pub fn question(
        &self,
        category_id: &str,
        flashcard_id: &str,
        question_id: &str,
    ) -> Option<&PracticeQuestion> {
        self.flashcard(category_id, flashcard_id)?
            .practice
            .iter()
            .find(|q| q.id == question_id)
    }
}

/// Load all category files (`*.json`) from a catalog directory.
///
/// A missing directory yields an empty catalog rather than an error; a file
/// that fails to parse or validate is a hard error, since the catalog is a
/// build-time contract.
pub fn load_catalog(dir: &Path) -> Result<Catalog, CatalogError> {
    if !dir.exists() || !dir.is_dir() {
        return Ok(Catalog::default());
    }

    let entries = fs::read_dir(dir).map_err(|e| CatalogError::IoError(e.to_string()))?;

    let mut categories = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        categories.push(load_category_file(&path)?);
    }

    // Stable ordering regardless of directory iteration order
    categories.sort_by(|a, b| a.id.cmp(&b.id));

    Catalog::new(categories)
}

/// Load a single category from a JSON file.
pub fn load_category_file(path: &Path) -> Result<Category, CatalogError> {
    let content = fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;
    serde_json::from_str(&content)
        .map_err(|e| CatalogError::ParseError(format!("{}: {}", path.display(), e)))
}

/// Validate one flashcard's structural invariants.
fn validate_flashcard(category_id: &str, flashcard: &Flashcard) -> Result<(), CatalogError> {
    if flashcard.id.is_empty() {
        return Err(CatalogError::InvalidContent(format!(
            "{}: flashcard missing id",
            category_id
        )));
    }
    for question in &flashcard.practice {
        validate_question(&flashcard.id, question)?;
    }
    Ok(())
}

fn validate_question(flashcard_id: &str, question: &PracticeQuestion) -> Result<(), CatalogError> {
    let options = question.options.as_deref();

    match question.kind {
        QuestionKind::Mcq => {
            let options = options.ok_or_else(|| {
                CatalogError::InvalidContent(format!(
                    "{}/{}: mcq question has no options",
                    flashcard_id, question.id
                ))
            })?;
            match &question.canonical_answer {
                CanonicalAnswer::Single(answer) if options.contains(answer) => Ok(()),
                CanonicalAnswer::Single(answer) => Err(CatalogError::InvalidContent(format!(
                    "{}/{}: mcq answer {:?} is not one of the options",
                    flashcard_id, question.id, answer
                ))),
                CanonicalAnswer::Sequence(_) => Err(CatalogError::InvalidContent(format!(
                    "{}/{}: mcq answer must be a single string",
                    flashcard_id, question.id
                ))),
            }
        }
        QuestionKind::FillBlank => match &question.canonical_answer {
            CanonicalAnswer::Single(_) => Ok(()),
            CanonicalAnswer::Sequence(_) => Err(CatalogError::InvalidContent(format!(
                "{}/{}: fill-blank answer must be a single string",
                flashcard_id, question.id
            ))),
        },
        QuestionKind::DragDrop => {
            let options = options.ok_or_else(|| {
                CatalogError::InvalidContent(format!(
                    "{}/{}: drag-drop question has no options",
                    flashcard_id, question.id
                ))
            })?;
            match &question.canonical_answer {
                CanonicalAnswer::Sequence(seq) if is_permutation(seq, options) => Ok(()),
                CanonicalAnswer::Sequence(_) => Err(CatalogError::InvalidContent(format!(
                    "{}/{}: drag-drop answer is not a permutation of the options",
                    flashcard_id, question.id
                ))),
                CanonicalAnswer::Single(_) => Err(CatalogError::InvalidContent(format!(
                    "{}/{}: drag-drop answer must be a sequence",
                    flashcard_id, question.id
                ))),
            }
        }
    }
}

/// Multiset equality between answer sequence and options.
fn is_permutation(answer: &[String], options: &[String]) -> bool {
    if answer.len() != options.len() {
        return false;
    }
    let mut counts: HashMap<&str, i32> = HashMap::new();
    for item in answer {
        *counts.entry(item.as_str()).or_insert(0) += 1;
    }
    for item in options {
        match counts.get_mut(item.as_str()) {
            Some(n) => *n -= 1,
            None => return false,
        }
    }
    counts.values().all(|&n| n == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::schema::QuestionKind;

    fn question(kind: QuestionKind, options: Option<Vec<&str>>, answer: CanonicalAnswer) -> PracticeQuestion {
        PracticeQuestion {
            id: "q1".to_string(),
            kind,
            prompt: "Complète la phrase.".to_string(),
            options: options.map(|o| o.into_iter().map(String::from).collect()),
            canonical_answer: answer,
            explanation: None,
        }
    }

    #[test]
    fn test_mcq_answer_must_be_an_option() {
        let ok = question(
            QuestionKind::Mcq,
            Some(vec!["e", "es"]),
            CanonicalAnswer::Single("es".to_string()),
        );
        assert!(validate_question("f1", &ok).is_ok());

        let bad = question(
            QuestionKind::Mcq,
            Some(vec!["e", "es"]),
            CanonicalAnswer::Single("ent".to_string()),
        );
        assert!(validate_question("f1", &bad).is_err());
    }

    #[test]
    fn test_drag_drop_answer_must_be_permutation() {
        let ok = question(
            QuestionKind::DragDrop,
            Some(vec!["ces", "ses", "c'est"]),
            CanonicalAnswer::Sequence(vec![
                "c'est".to_string(),
                "ces".to_string(),
                "ses".to_string(),
            ]),
        );
        assert!(validate_question("f1", &ok).is_ok());

        let missing = question(
            QuestionKind::DragDrop,
            Some(vec!["ces", "ses", "c'est"]),
            CanonicalAnswer::Sequence(vec!["ces".to_string(), "ses".to_string()]),
        );
        assert!(validate_question("f1", &missing).is_err());

        let duplicated = question(
            QuestionKind::DragDrop,
            Some(vec!["ces", "ses", "c'est"]),
            CanonicalAnswer::Sequence(vec![
                "ces".to_string(),
                "ces".to_string(),
                "ses".to_string(),
            ]),
        );
        assert!(validate_question("f1", &duplicated).is_err());
    }

    #[test]
    fn test_fill_blank_answer_must_be_single() {
        let ok = question(
            QuestionKind::FillBlank,
            None,
            CanonicalAnswer::Single("chat".to_string()),
        );
        assert!(validate_question("f1", &ok).is_ok());

        let bad = question(
            QuestionKind::FillBlank,
            None,
            CanonicalAnswer::Sequence(vec!["chat".to_string()]),
        );
        assert!(validate_question("f1", &bad).is_err());
    }

    #[test]
    fn test_load_catalog_missing_dir_is_empty() {
        let catalog = load_catalog(Path::new("does/not/exist")).unwrap();
        assert!(catalog.categories.is_empty());
    }

    #[test]
    fn test_catalog_lookups() {
        let catalog = crate::testing::sample_catalog();
        assert!(catalog.category("conjugaison").is_some());
        assert!(catalog.flashcard("conjugaison", "conjugaison-present").is_some());
        assert!(
            catalog
                .question("conjugaison", "conjugaison-present", "present-q1")
                .is_some()
        );
        assert!(catalog.category("orthographe").is_none());
    }

    #[test]
    fn test_load_category_file() {
        let env = crate::testing::TestEnv::new().unwrap();
        let path = env.path().join("conjugaison.json");
        std::fs::write(
            &path,
            serde_json::to_string(&crate::testing::sample_catalog().categories[0]).unwrap(),
        )
        .unwrap();

        let category = load_category_file(&path).unwrap();
        assert_eq!(category.id, "conjugaison");
        assert!(!category.flashcards.is_empty());
    }
}
