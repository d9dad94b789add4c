use axum::{
    Router,
    routing::delete,
    extract::{State, Query},
    http::StatusCode,
};
use serde::Deserialize;

use crate::routes::store_error_response;
use crate::store::SharedStore;

#[derive(Deserialize)]
struct ClearQuery {
    #[serde(default)]
    confirm: bool,
}

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/data", delete(clear_data))
        .with_state(store)
}

// Erasing all history is irreversible, so the caller has to say so
// explicitly. The confirmation dialog itself is the client's job.
async fn clear_data(
    State(store): State<SharedStore>,
    Query(query): Query<ClearQuery>,
) -> Result<StatusCode, (StatusCode, String)> {
    if !query.confirm {
        return Err((
            StatusCode::BAD_REQUEST,
            "pass confirm=true to erase all tracked data".to_string(),
        ));
    }
    let mut store = store.lock().await;
    store.clear_all().map_err(store_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
