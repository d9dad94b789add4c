use axum::{
    Router,
    routing::{get, post},
    extract::{State, Query},
    Json,
    http::StatusCode,
};
use serde::Deserialize;

use crate::models::{Mood, MoodEntry};
use crate::routes::store_error_response;
use crate::store::SharedStore;

#[derive(Deserialize)]
pub struct NewMoodEntry {
    pub mood: Mood,
    pub intensity: u8,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
struct RecentQuery {
    limit: Option<usize>,
}

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/mood", post(log_mood))
        .route("/moods", get(get_moods))
        .route("/moods/recent", get(get_recent_moods))
        .with_state(store)
}

async fn log_mood(
    State(store): State<SharedStore>,
    Json(body): Json<NewMoodEntry>,
) -> Result<(StatusCode, Json<MoodEntry>), (StatusCode, String)> {
    let mut store = store.lock().await;
    let entry = store
        .add_mood(body.mood, body.intensity, body.notes)
        .map_err(store_error_response)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn get_moods(State(store): State<SharedStore>) -> Json<Vec<MoodEntry>> {
    let store = store.lock().await;
    Json(store.list_moods().to_vec())
}

// The dashboard timeline only needs a small window of history.
async fn get_recent_moods(
    State(store): State<SharedStore>,
    Query(query): Query<RecentQuery>,
) -> Json<Vec<MoodEntry>> {
    let store = store.lock().await;
    Json(store.recent_moods(query.limit.unwrap_or(10)).to_vec())
}
