use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use super::domain::AnswerSet;
use super::engine::{RecommendationEngine, RecommendationResult};

/// Routes for the consultation workflow, backed by a shared engine.
pub fn consultation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route(
            "/api/v1/consultations/recommendation",
            post(create_recommendation),
        )
        .with_state(engine)
}

/// Scores the submitted answers and returns the recommendation payload.
///
/// Unknown answer values are rejected by deserialization before this handler
/// runs; an answer set that parses always yields a recommendation.
async fn create_recommendation(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(answers): Json<AnswerSet>,
) -> Json<RecommendationResult> {
    Json(engine.recommend(&answers))
}
