use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db,
    error::ApiError,
    generator::crossword,
    models::{CrosswordDocument, WordEntry},
    websocket::messages::ResourceEvent,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateCrosswordRequest {
    #[serde(default)]
    pub tema: String,
    pub creator_id: String,
    pub creator_name: String,
    pub entries: Vec<WordEntry>,
}

#[derive(Debug, Serialize)]
pub struct CreateCrosswordResponse {
    pub puzzle: CrosswordDocument,
    /// Words that could not be connected to the puzzle.
    pub dropped: Vec<String>,
}

/// Generate a crossword from the submitted entries, persist it and notify
/// feed subscribers. The document is only written once generation has
/// fully succeeded.
pub async fn create_crossword(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCrosswordRequest>,
) -> Result<Json<CreateCrosswordResponse>, ApiError> {
    let max_words = state.config.generator.max_words;
    if payload.entries.len() > max_words {
        return Err(ApiError::TooManyWords(max_words));
    }

    let layout = crossword::generate(&payload.entries)?;
    let tema = default_tema(&payload.tema);

    let puzzle = db::queries::insert_crossword(
        &state.db,
        &tema,
        &payload.creator_id,
        &payload.creator_name,
        &layout,
    )
    .await?;

    tracing::info!(
        id = %puzzle.id,
        placed = puzzle.across.len() + puzzle.down.len(),
        dropped = layout.dropped.len(),
        "crossword saved"
    );

    let _ = state.events.send(ResourceEvent::CrosswordSaved {
        id: puzzle.id,
        tema: puzzle.tema.clone(),
    });

    Ok(Json(CreateCrosswordResponse {
        puzzle,
        dropped: layout.dropped,
    }))
}

pub async fn list_crosswords(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CrosswordDocument>>, ApiError> {
    let puzzles = db::queries::list_crosswords(&state.db).await?;
    Ok(Json(puzzles))
}

pub async fn delete_crossword(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !db::queries::delete_crossword(&state.db, id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(%id, "crossword deleted");
    let _ = state.events.send(ResourceEvent::CrosswordDeleted { id });

    Ok(Json(serde_json::json!({ "deleted": id })))
}

/// Untitled puzzles get the generic "Personalizado" label.
pub(crate) fn default_tema(tema: &str) -> String {
    let trimmed = tema.trim();
    if trimmed.is_empty() {
        "Personalizado".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tema_falls_back() {
        assert_eq!(default_tema(""), "Personalizado");
        assert_eq!(default_tema("   "), "Personalizado");
        assert_eq!(default_tema(" Astronomía "), "Astronomía");
    }

    #[test]
    fn test_create_request_accepts_missing_tema() {
        let payload: CreateCrosswordRequest = serde_json::from_str(
            r#"{
                "creator_id": "u1",
                "creator_name": "Prof. Rivas",
                "entries": [{"word": "SOL", "clue": "estrella"}]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.tema, "");
        assert_eq!(payload.entries.len(), 1);
    }
}
