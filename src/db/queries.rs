use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Result};
use uuid::Uuid;

use crate::models::{
    CrosswordClue, CrosswordDocument, CrosswordLayout, Difficulty, GridCell, WordSearchDocument,
    WordSearchLayout,
};

/// Row shape of a stored crossword. The document store does not take nested
/// arrays, so the 2-D cell grid travels as a flat JSON array plus its width
/// and is rebuilt on read. The generator core never sees this shape.
#[derive(Debug, sqlx::FromRow)]
struct CrosswordRow {
    id: Uuid,
    tema: String,
    creator_id: String,
    creator_name: String,
    grid: serde_json::Value,
    grid_width: i32,
    clues: serde_json::Value,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredClues {
    across: Vec<CrosswordClue>,
    down: Vec<CrosswordClue>,
}

fn flatten_grid(grid: &[Vec<GridCell>]) -> Result<(serde_json::Value, i32)> {
    let width = grid.first().map(|row| row.len()).unwrap_or(0);
    let flat: Vec<&GridCell> = grid.iter().flatten().collect();
    let value = serde_json::to_value(flat)
        .map_err(|e| sqlx::Error::Protocol(format!("failed to encode grid: {e}")))?;
    Ok((value, width as i32))
}

fn unflatten_grid(value: serde_json::Value, width: i32) -> Result<Vec<Vec<GridCell>>> {
    let flat: Vec<GridCell> = serde_json::from_value(value)
        .map_err(|e| sqlx::Error::Decode(format!("failed to decode grid: {e}").into()))?;
    if width <= 0 {
        return Ok(Vec::new());
    }
    let width = width as usize;
    if flat.len() % width != 0 {
        return Err(sqlx::Error::Decode(
            "stored grid length is not a multiple of its width".into(),
        ));
    }
    Ok(flat.chunks(width).map(<[GridCell]>::to_vec).collect())
}

fn crossword_from_row(row: CrosswordRow) -> Result<CrosswordDocument> {
    let grid = unflatten_grid(row.grid, row.grid_width)?;
    let clues: StoredClues = serde_json::from_value(row.clues)
        .map_err(|e| sqlx::Error::Decode(format!("failed to decode clues: {e}").into()))?;

    Ok(CrosswordDocument {
        id: row.id,
        tema: row.tema,
        creator_id: row.creator_id,
        creator_name: row.creator_name,
        grid,
        across: clues.across,
        down: clues.down,
        created_at: row.created_at,
    })
}

// Crossword queries

pub async fn insert_crossword(
    pool: &PgPool,
    tema: &str,
    creator_id: &str,
    creator_name: &str,
    layout: &CrosswordLayout,
) -> Result<CrosswordDocument> {
    let (grid, grid_width) = flatten_grid(&layout.grid)?;
    let clues = serde_json::to_value(StoredClues {
        across: layout.across.clone(),
        down: layout.down.clone(),
    })
    .map_err(|e| sqlx::Error::Protocol(format!("failed to encode clues: {e}")))?;

    let row = sqlx::query_as::<_, CrosswordRow>(
        r#"
        INSERT INTO crosswords (id, tema, creator_id, creator_name, grid, grid_width, clues)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(tema)
    .bind(creator_id)
    .bind(creator_name)
    .bind(grid)
    .bind(grid_width)
    .bind(clues)
    .fetch_one(pool)
    .await?;

    crossword_from_row(row)
}

/// Stored crosswords, newest first.
pub async fn list_crosswords(pool: &PgPool) -> Result<Vec<CrosswordDocument>> {
    let rows = sqlx::query_as::<_, CrosswordRow>(
        "SELECT * FROM crosswords ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(crossword_from_row).collect()
}

/// Returns false when no document with that id existed.
pub async fn delete_crossword(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM crosswords WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Word-search queries

pub async fn insert_word_search(
    pool: &PgPool,
    tema: &str,
    creator_id: &str,
    creator_name: &str,
    difficulty: Difficulty,
    layout: &WordSearchLayout,
) -> Result<WordSearchDocument> {
    sqlx::query_as::<_, WordSearchDocument>(
        r#"
        INSERT INTO word_searches (id, tema, creator_id, creator_name, difficulty, grid, words)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(tema)
    .bind(creator_id)
    .bind(creator_name)
    .bind(difficulty)
    .bind(&layout.grid)
    .bind(&layout.words)
    .fetch_one(pool)
    .await
}

/// Stored word searches, newest first.
pub async fn list_word_searches(pool: &PgPool) -> Result<Vec<WordSearchDocument>> {
    sqlx::query_as::<_, WordSearchDocument>(
        "SELECT * FROM word_searches ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Returns false when no document with that id existed.
pub async fn delete_word_search(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM word_searches WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
