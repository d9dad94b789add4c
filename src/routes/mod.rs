use axum::http::StatusCode;

use crate::store::StoreError;

pub mod data;
pub mod insights;
pub mod moods;
pub mod suggestions;
pub mod symptoms;

pub(crate) fn store_error_response(err: StoreError) -> (StatusCode, String) {
    match err {
        StoreError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        err @ StoreError::Persistence { .. } => {
            tracing::error!("❌ snapshot write failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "storage error".to_string())
        }
    }
}
