use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db,
    error::ApiError,
    generator::wordsearch,
    models::{Difficulty, WordSearchDocument, WordSearchPlacement},
    routes::crosswords::default_tema,
    websocket::messages::ResourceEvent,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateWordSearchRequest {
    #[serde(default)]
    pub tema: String,
    pub creator_id: String,
    pub creator_name: String,
    pub difficulty: Difficulty,
    pub words: Vec<String>,
    /// Optional seed for a reproducible puzzle.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CreateWordSearchResponse {
    pub puzzle: WordSearchDocument,
    /// Where each word was hidden, for the solution view.
    pub placements: Vec<WordSearchPlacement>,
    /// Words that did not fit within the attempt budget.
    pub dropped: Vec<String>,
}

/// Generate a word search, persist it and notify feed subscribers.
pub async fn create_word_search(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateWordSearchRequest>,
) -> Result<Json<CreateWordSearchResponse>, ApiError> {
    let max_words = state.config.generator.max_words;
    if payload.words.len() > max_words {
        return Err(ApiError::TooManyWords(max_words));
    }

    let layout = match payload.seed {
        Some(seed) => wordsearch::generate(
            &payload.words,
            payload.difficulty,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => wordsearch::generate(&payload.words, payload.difficulty, &mut rand::rng())?,
    };
    let tema = default_tema(&payload.tema);

    let puzzle = db::queries::insert_word_search(
        &state.db,
        &tema,
        &payload.creator_id,
        &payload.creator_name,
        payload.difficulty,
        &layout,
    )
    .await?;

    tracing::info!(
        id = %puzzle.id,
        placed = layout.placements.len(),
        dropped = layout.dropped.len(),
        "word search saved"
    );

    let _ = state.events.send(ResourceEvent::WordSearchSaved {
        id: puzzle.id,
        tema: puzzle.tema.clone(),
    });

    Ok(Json(CreateWordSearchResponse {
        puzzle,
        placements: layout.placements,
        dropped: layout.dropped,
    }))
}

pub async fn list_word_searches(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WordSearchDocument>>, ApiError> {
    let puzzles = db::queries::list_word_searches(&state.db).await?;
    Ok(Json(puzzles))
}

pub async fn delete_word_search(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !db::queries::delete_word_search(&state.db, id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(%id, "word search deleted");
    let _ = state.events.send(ResourceEvent::WordSearchDeleted { id });

    Ok(Json(serde_json::json!({ "deleted": id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_parses_spanish_difficulty() {
        let payload: CreateWordSearchRequest = serde_json::from_str(
            r#"{
                "tema": "Animales",
                "creator_id": "u7",
                "creator_name": "Prof. Soto",
                "difficulty": "Difícil",
                "words": ["GATO", "PERRO"],
                "seed": 42
            }"#,
        )
        .unwrap();
        assert_eq!(payload.difficulty, Difficulty::Dificil);
        assert_eq!(payload.seed, Some(42));
    }
}
