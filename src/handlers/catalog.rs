//! Catalog browsing endpoints: categories, flashcards and their
//! interactive example sentences.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::content::{Category, Example, Flashcard, PracticeQuestion};
use crate::interactive::{segment_sentence, Segment};
use crate::state::AppState;

use super::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub color: String,
    pub flashcard_count: usize,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            color: category.color.clone(),
            flashcard_count: category.flashcards.len(),
        }
    }
}

/// An example sentence rendered into display segments.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleView<'a> {
    pub id: &'a str,
    pub sentence: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<&'a str>,
    pub segments: Vec<Segment<'a>>,
}

impl<'a> ExampleView<'a> {
    pub fn render(example: &'a Example) -> Self {
        Self {
            id: &example.id,
            sentence: &example.sentence,
            image_url: example.image_url.as_deref(),
            image_alt: example.image_alt.as_deref(),
            segments: segment_sentence(&example.sentence, &example.replacements).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardView<'a> {
    pub id: &'a str,
    pub category_id: &'a str,
    pub title: &'a str,
    pub rule: &'a str,
    pub examples: Vec<ExampleView<'a>>,
    pub practice: &'a [PracticeQuestion],
}

impl<'a> FlashcardView<'a> {
    pub fn render(category_id: &'a str, flashcard: &'a Flashcard) -> Self {
        Self {
            id: &flashcard.id,
            category_id,
            title: &flashcard.title,
            rule: &flashcard.rule,
            examples: flashcard.examples.iter().map(ExampleView::render).collect(),
            practice: &flashcard.practice,
        }
    }
}

/// GET /api/categories - category list with card counts
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    let summaries = state
        .catalog
        .categories
        .iter()
        .map(CategorySummary::from)
        .collect();
    Json(summaries)
}

/// GET /api/categories/{category_id} - one category with its flashcards
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .catalog
        .category(&category_id)
        .ok_or_else(|| ApiError::NotFound(format!("Category '{}'", category_id)))?;
    Ok(Json(category.clone()))
}

/// GET /api/flashcards/{category_id}/{flashcard_id} - one flashcard with
/// its example sentences pre-segmented for interactive rendering
pub async fn get_flashcard(
    State(state): State<AppState>,
    Path((category_id, flashcard_id)): Path<(String, String)>,
) -> Result<axum::response::Response, ApiError> {
    let flashcard = state
        .catalog
        .flashcard(&category_id, &flashcard_id)
        .ok_or_else(|| ApiError::NotFound(format!("Flashcard '{}'", flashcard_id)))?;

    let view = FlashcardView::render(&category_id, flashcard);
    Ok(axum::response::IntoResponse::into_response(Json(&view)))
}
