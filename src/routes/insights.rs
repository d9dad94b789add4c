use axum::{
    Router,
    routing::get,
    extract::State,
    Json,
};

use crate::insights::{self, InsightSummary};
use crate::store::SharedStore;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/insights", get(get_insights))
        .with_state(store)
}

// Derived values live here, never in the client: it renders what it gets.
async fn get_insights(State(store): State<SharedStore>) -> Json<InsightSummary> {
    let store = store.lock().await;
    Json(insights::aggregate(store.list_moods(), store.list_symptoms()))
}
