pub mod crosswords;
pub mod health;
pub mod wordsearches;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/crosswords",
            post(crosswords::create_crossword).get(crosswords::list_crosswords),
        )
        .route("/crosswords/{id}", delete(crosswords::delete_crossword))
        .route(
            "/wordsearches",
            post(wordsearches::create_word_search).get(wordsearches::list_word_searches),
        )
        .route("/wordsearches/{id}", delete(wordsearches::delete_word_search))
}
