use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::{AnswerCatalog, QuestionType};
use crate::assessment::domain::{AnswerMap, AnswerValue, QuestionId};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::options::*;

/// Intermediate-score weights used by the fixture catalog. Weights are
/// arbitrary but chosen so the tests can dial each group score precisely.
const SCORE_TABLE: &[(&str, &str, f64)] = &[
    ("1-1", PARALYSIS_ONE_LIMB, 5.0),
    ("1-4", WATCHED, 13.0),
    ("1-4", FULL_ASSIST, 70.0),
    ("2-2", INDEPENDENT, 22.0),
    ("2-2", FULL_ASSIST, 22.0),
    ("2-4", INDEPENDENT, 24.0),
    ("2-4", FULL_ASSIST, 24.0),
    ("2-8", PARTIAL_ASSIST, 12.0),
    ("2-9", PARTIAL_ASSIST, 7.2),
    ("2-9", FULL_ASSIST, 30.0),
    ("3-3", CAN, 41.0),
    ("3-3", "できない", 20.0),
    ("4-3", "ときどきある", 45.0),
    ("4-3", "ある", 89.0),
    ("5-5", PARTIAL_ASSIST, 4.0),
    ("5-5", FULL_ASSIST, 28.0),
];

fn option_score(question: &str, option: &str) -> Option<f64> {
    SCORE_TABLE
        .iter()
        .find(|(q, o, _)| *q == question && *o == option)
        .map(|(_, _, score)| *score)
}

/// In-memory catalog mirroring the survey form: items 1-1 and 1-2 (and the
/// procedure lists 6-1 and 6-2) are multi-choice, every other well-formed
/// item is single-choice.
pub(super) struct FixtureCatalog;

impl AnswerCatalog for FixtureCatalog {
    fn intermediate_score(&self, question: &QuestionId, answer: &AnswerValue) -> Option<f64> {
        match answer {
            AnswerValue::Single(option) => option_score(&question.0, option),
            AnswerValue::Multi(options) => {
                let scores: Vec<f64> = options
                    .iter()
                    .filter_map(|option| option_score(&question.0, option))
                    .collect();
                if scores.is_empty() {
                    None
                } else {
                    Some(scores.iter().sum())
                }
            }
        }
    }

    fn question_type(&self, question: &QuestionId) -> Option<QuestionType> {
        question.group_index()?;
        match question.0.as_str() {
            "1-1" | "1-2" | "6-1" | "6-2" => Some(QuestionType::Multi),
            _ => Some(QuestionType::Single),
        }
    }
}

pub(super) fn engine() -> AssessmentEngine<FixtureCatalog> {
    AssessmentEngine::new(Arc::new(FixtureCatalog))
}

pub(super) fn answers(entries: &[(&str, &str)]) -> AnswerMap {
    entries
        .iter()
        .map(|(question, option)| (QuestionId::from(*question), AnswerValue::single(*option)))
        .collect()
}

pub(super) fn with_multi(mut map: AnswerMap, question: &str, options: &[&str]) -> AnswerMap {
    map.insert(
        QuestionId::from(question),
        AnswerValue::multi(options.iter().copied()),
    );
    map
}

pub(super) fn assert_minutes(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected} minutes, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
