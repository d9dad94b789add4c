use axum::{
    Router,
    routing::{get, post},
    extract::State,
    Json,
    http::StatusCode,
};
use serde::Deserialize;

use crate::models::{SymptomCategory, SymptomEntry};
use crate::routes::store_error_response;
use crate::store::SharedStore;

#[derive(Deserialize)]
pub struct NewSymptomEntry {
    pub category: SymptomCategory,
    pub intensity: u8,
    pub notes: Option<String>,
}

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/symptom", post(log_symptom))
        .route("/symptoms", get(get_symptoms))
        .with_state(store)
}

async fn log_symptom(
    State(store): State<SharedStore>,
    Json(body): Json<NewSymptomEntry>,
) -> Result<(StatusCode, Json<SymptomEntry>), (StatusCode, String)> {
    let mut store = store.lock().await;
    let entry = store
        .add_symptom(body.category, body.intensity, body.notes)
        .map_err(store_error_response)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn get_symptoms(State(store): State<SharedStore>) -> Json<Vec<SymptomEntry>> {
    let store = store.lock().await;
    Json(store.list_symptoms().to_vec())
}
