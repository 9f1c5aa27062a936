//! End-to-end evaluations over hand-checked survey fixtures.

use std::sync::Arc;

use caretime::assessment::{
    AnswerCatalog, AnswerMap, AnswerValue, AssessmentEngine, CareLevel, QuestionId, QuestionType,
};

/// Catalog with a small option-weight table standing in for the official
/// certification score sheet.
struct SurveyCatalog;

const WEIGHTS: &[(&str, &str, f64)] = &[
    ("1-4", "見守り等", 13.0),
    ("1-4", "全介助", 70.0),
    ("2-2", "見守り等", 15.0),
    ("2-2", "全介助", 30.0),
    ("2-4", "全介助", 25.0),
    ("2-6", "全介助", 25.0),
    ("3-1", "ときどき伝達できる", 20.0),
    ("3-1", "ほとんど伝達できない", 30.0),
    ("4-1", "ときどきある", 25.0),
    ("4-1", "ある", 50.0),
    ("4-2", "ある", 47.0),
    ("5-3", "できない", 30.0),
];

impl AnswerCatalog for SurveyCatalog {
    fn intermediate_score(&self, question: &QuestionId, answer: &AnswerValue) -> Option<f64> {
        let weight_of = |option: &str| {
            WEIGHTS
                .iter()
                .find(|(q, o, _)| *q == question.0 && *o == option)
                .map(|(_, _, weight)| *weight)
        };
        match answer {
            AnswerValue::Single(option) => weight_of(option),
            AnswerValue::Multi(options) => {
                let weights: Vec<f64> = options
                    .iter()
                    .filter_map(|option| weight_of(option))
                    .collect();
                if weights.is_empty() {
                    None
                } else {
                    Some(weights.iter().sum())
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

fn engine() -> AssessmentEngine<SurveyCatalog> {
    AssessmentEngine::new(Arc::new(SurveyCatalog))
}

fn survey(singles: &[(&str, &str)], multis: &[(&str, &[&str])]) -> AnswerMap {
    let mut map: AnswerMap = singles
        .iter()
        .map(|(question, option)| (QuestionId::from(*question), AnswerValue::single(*option)))
        .collect();
    for (question, options) in multis {
        map.insert(
            QuestionId::from(*question),
            AnswerValue::multi(options.iter().copied()),
        );
    }
    map
}

#[test]
fn blank_survey_classifies_as_not_applicable() {
    let outcome = engine().evaluate(&AnswerMap::new()).expect("evaluates");

    assert_eq!(outcome.total_minutes, 11);
    assert_eq!(outcome.care_level, CareLevel::NotApplicable);
}

#[test]
fn tube_fed_bedridden_respondent_classifies_as_care_3() {
    let map = survey(
        &[
            ("1-4", "全介助"),
            ("1-7", "できない"),
            ("1-12", "ほとんど見えない"),
            ("2-1", "全介助"),
            ("2-2", "全介助"),
            ("2-3", "できない"),
            ("2-4", "全介助"),
            ("2-6", "全介助"),
            ("2-7", "全介助"),
            ("2-11", "全介助"),
            ("3-1", "ほとんど伝達できない"),
            ("3-7", "できない"),
            ("4-1", "ある"),
            ("4-2", "ある"),
            ("5-3", "できない"),
            ("5-4", "ある"),
            ("5-6", "全介助"),
        ],
        &[
            ("1-1", &["その他の四肢の麻痺"]),
            ("6-1", &["経管栄養"]),
        ],
    );

    let outcome = engine().evaluate(&map).expect("evaluates");

    assert_eq!(outcome.group_scores.physical_function, 70.0);
    assert_eq!(outcome.group_scores.life_function, 80.0);
    assert_eq!(outcome.group_scores.mental_behavior, 97.0);

    assert_eq!(outcome.category_times.meal, 1.1);
    assert_eq!(outcome.category_times.excretion, 11.1);
    assert_eq!(outcome.category_times.movement, 7.6);
    assert_eq!(outcome.category_times.hygiene, 3.6);
    assert_eq!(outcome.category_times.indirect_care, 6.1);
    assert_eq!(outcome.category_times.behavioral, 6.1);
    assert_eq!(outcome.category_times.functional_training, 7.8);
    // medical base of 37.2 plus 9.1 for the reported tube feeding
    assert!((outcome.category_times.medical - 46.3).abs() < 1e-9);

    assert_eq!(outcome.total_minutes, 89);
    assert_eq!(outcome.care_level, CareLevel::Care3);
}

#[test]
fn partially_assisted_respondent_classifies_as_care_4() {
    let map = survey(
        &[
            ("1-4", "見守り等"),
            ("1-7", "つかまらないでできる"),
            ("2-1", "見守り等"),
            ("2-2", "見守り等"),
            ("2-3", "できる"),
            ("2-4", "一部介助"),
            ("2-6", "一部介助"),
            ("2-7", "一部介助"),
            ("2-12", "月1回以上"),
            ("3-1", "ときどき伝達できる"),
            ("3-7", "できる"),
            ("4-1", "ときどきある"),
        ],
        &[],
    );

    let outcome = engine().evaluate(&map).expect("evaluates");

    assert_eq!(outcome.group_scores.physical_function, 13.0);
    assert_eq!(outcome.group_scores.life_function, 15.0);
    assert_eq!(outcome.group_scores.cognitive_function, 20.0);
    assert_eq!(outcome.group_scores.mental_behavior, 25.0);

    assert_eq!(outcome.category_times.meal, 15.4);
    assert_eq!(outcome.category_times.excretion, 15.1);
    assert_eq!(outcome.category_times.movement, 14.6);
    assert_eq!(outcome.category_times.hygiene, 8.0);
    assert_eq!(outcome.category_times.indirect_care, 24.2);
    assert_eq!(outcome.category_times.behavioral, 16.1);
    assert_eq!(outcome.category_times.functional_training, 8.9);
    assert_eq!(outcome.category_times.medical, 6.0);

    assert_eq!(outcome.total_minutes, 108);
    assert_eq!(outcome.care_level, CareLevel::Care4);
}
