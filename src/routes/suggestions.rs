use axum::{
    Router,
    routing::get,
    extract::Query,
    Json,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::models::{Mood, Suggestion, SymptomCategory};
use crate::suggestions::{self, DEFAULT_LIMIT};

#[derive(Deserialize)]
struct SuggestionQuery {
    mood: Option<Mood>,
    /// Comma-separated symptom categories, e.g. `symptoms=cramps,backPain`.
    symptoms: Option<String>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct MessageQuery {
    mood: Option<Mood>,
}

#[derive(Serialize)]
struct SupportiveMessage {
    message: String,
}

pub fn routes() -> Router {
    Router::new()
        .route("/suggestions", get(get_suggestions))
        .route("/supportive-message", get(get_supportive_message))
}

async fn get_suggestions(
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<Vec<Suggestion>>, (StatusCode, String)> {
    let symptoms = parse_symptom_list(query.symptoms.as_deref())?;
    Ok(Json(suggestions::get_suggestions(
        query.mood,
        &symptoms,
        query.limit.unwrap_or(DEFAULT_LIMIT),
    )))
}

async fn get_supportive_message(Query(query): Query<MessageQuery>) -> Json<SupportiveMessage> {
    Json(SupportiveMessage {
        message: suggestions::supportive_message(query.mood),
    })
}

fn parse_symptom_list(raw: Option<&str>) -> Result<Vec<SymptomCategory>, (StatusCode, String)> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            SymptomCategory::parse(token).ok_or_else(|| {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("unknown symptom category: {token}"),
                )
            })
        })
        .collect()
}
