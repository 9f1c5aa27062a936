use super::common::*;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::assessment::router::assessment_router;

#[tokio::test]
async fn evaluate_route_returns_the_assessment_outcome() {
    let router = assessment_router(Arc::new(engine()));
    let payload = json!({
        "2-4": "自立（介助なし）",
        "2-2": "自立（介助なし）",
        "3-4": "できる",
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/assessments/evaluate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("total_minutes").and_then(serde_json::Value::as_u64),
        Some(14)
    );
    assert_eq!(
        body.get("care_level").and_then(serde_json::Value::as_str),
        Some("not_applicable")
    );
    assert!(body
        .get("category_times")
        .and_then(|times| times.get("meal"))
        .is_some());
}

#[tokio::test]
async fn evaluate_route_rejects_malformed_answer_shapes() {
    let router = assessment_router(Arc::new(engine()));
    let payload = json!({
        "2-4": ["自立（介助なし）", "全介助"],
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/assessments/evaluate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(|message| message.contains("2-4"))
        .unwrap_or(false));
}

#[tokio::test]
async fn evaluate_route_handles_an_empty_survey() {
    let router = assessment_router(Arc::new(engine()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/assessments/evaluate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{}"))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("total_minutes").and_then(serde_json::Value::as_u64),
        Some(11)
    );
}
