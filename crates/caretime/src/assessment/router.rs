use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::catalog::AnswerCatalog;
use super::domain::AnswerMap;
use super::engine::{AssessmentEngine, AssessmentError};

/// Router builder exposing the evaluation endpoint.
pub fn assessment_router<C>(engine: Arc<AssessmentEngine<C>>) -> Router
where
    C: AnswerCatalog + 'static,
{
    Router::new()
        .route("/api/v1/assessments/evaluate", post(evaluate_handler::<C>))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler<C>(
    State(engine): State<Arc<AssessmentEngine<C>>>,
    axum::Json(answers): axum::Json<AnswerMap>,
) -> Response
where
    C: AnswerCatalog + 'static,
{
    match engine.evaluate(&answers) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error @ AssessmentError::InvalidInput { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
