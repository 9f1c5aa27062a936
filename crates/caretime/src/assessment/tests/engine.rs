use super::common::*;

use crate::assessment::catalog::QuestionType;
use crate::assessment::domain::{AnswerValue, CareLevel, CategoryTimes, QuestionId};
use crate::assessment::engine::AssessmentError;

#[test]
fn empty_survey_evaluates_to_the_category_floors() {
    let outcome = engine().evaluate(&answers(&[])).expect("evaluates");

    assert_eq!(outcome.category_times, CategoryTimes::floors());
    assert_eq!(outcome.total_minutes, 11);
    assert_eq!(outcome.care_level, CareLevel::NotApplicable);
    assert_minutes(outcome.group_scores.life_function, 0.0);
}

#[test]
fn mostly_independent_survey_stays_below_the_support_band() {
    let map = answers(&[
        ("2-4", "自立（介助なし）"),
        ("2-2", "自立（介助なし）"),
        ("3-4", "できる"),
    ]);
    let outcome = engine().evaluate(&map).expect("evaluates");

    assert_minutes(outcome.category_times.meal, 3.4);
    assert_minutes(outcome.group_scores.life_function, 46.0);
    // category minutes sum to 14.1 and the total truncates, not rounds
    assert_minutes(outcome.category_times.sum(), 14.1);
    assert_eq!(outcome.total_minutes, 14);
    assert_eq!(outcome.care_level, CareLevel::NotApplicable);
}

#[test]
fn evaluation_is_deterministic() {
    let map = with_multi(
        answers(&[("2-4", "全介助"), ("2-3", "できる"), ("3-9", "ある")]),
        "1-1",
        &["いずれか一肢のみ"],
    );
    let engine = engine();

    let first = engine.evaluate(&map).expect("evaluates");
    let second = engine.evaluate(&map).expect("evaluates");
    assert_eq!(first, second);
}

#[test]
fn list_answer_on_a_single_choice_item_is_rejected() {
    let mut map = answers(&[("2-2", "自立（介助なし）")]);
    map.insert(
        QuestionId::from("2-4"),
        AnswerValue::multi(["自立（介助なし）", "全介助"]),
    );

    let error = engine().evaluate(&map).expect_err("shape mismatch");
    assert_eq!(
        error,
        AssessmentError::InvalidInput {
            question: QuestionId::from("2-4"),
            expected: QuestionType::Single,
        }
    );
}

#[test]
fn non_empty_string_on_a_multi_choice_item_is_rejected() {
    let mut map = answers(&[]);
    map.insert(
        QuestionId::from("1-1"),
        AnswerValue::single("いずれか一肢のみ"),
    );

    let error = engine().evaluate(&map).expect_err("shape mismatch");
    assert_eq!(
        error,
        AssessmentError::InvalidInput {
            question: QuestionId::from("1-1"),
            expected: QuestionType::Multi,
        }
    );
}

#[test]
fn legacy_empty_string_passes_multi_choice_validation() {
    let mut map = answers(&[("3-5", "できる")]);
    map.insert(QuestionId::from("1-1"), AnswerValue::single(""));

    let outcome = engine().evaluate(&map).expect("evaluates");
    assert_minutes(outcome.category_times.hygiene, 2.2);
}

#[test]
fn items_outside_the_catalog_pass_unvalidated() {
    let mut map = answers(&[]);
    map.insert(
        QuestionId::from("free-form"),
        AnswerValue::multi(["anything"]),
    );

    let outcome = engine().evaluate(&map).expect("evaluates");
    assert_eq!(outcome.care_level, CareLevel::NotApplicable);
}
