use super::common::*;

use crate::assessment::domain::{QuestionId, SurveyGroup};
use crate::assessment::scores::{all_group_scores, group_of, group_score};

#[test]
fn group_of_maps_ids_to_their_survey_group() {
    assert_eq!(
        group_of(&QuestionId::from("1-13")),
        Some(SurveyGroup::PhysicalFunction)
    );
    assert_eq!(
        group_of(&QuestionId::from("2-12")),
        Some(SurveyGroup::LifeFunction)
    );
    assert_eq!(
        group_of(&QuestionId::from("3-9")),
        Some(SurveyGroup::CognitiveFunction)
    );
    assert_eq!(
        group_of(&QuestionId::from("4-15")),
        Some(SurveyGroup::MentalBehavior)
    );
    assert_eq!(
        group_of(&QuestionId::from("5-1")),
        Some(SurveyGroup::SocialAdaptation)
    );
}

#[test]
fn group_of_rejects_unscored_and_malformed_ids() {
    assert_eq!(group_of(&QuestionId::from("6-1")), None);
    assert_eq!(group_of(&QuestionId::from("1-14")), None);
    assert_eq!(group_of(&QuestionId::from("2-0")), None);
    assert_eq!(group_of(&QuestionId::from("not-a-number")), None);
    assert_eq!(group_of(&QuestionId::from("21")), None);
}

#[test]
fn group_scores_sum_only_their_own_items() {
    let map = answers(&[("2-4", "自立（介助なし）"), ("2-8", "一部介助"), ("3-3", "できる")]);

    assert_minutes(group_score(SurveyGroup::LifeFunction, &map, &FixtureCatalog), 36.0);
    assert_minutes(
        group_score(SurveyGroup::CognitiveFunction, &map, &FixtureCatalog),
        41.0,
    );
    assert_minutes(
        group_score(SurveyGroup::PhysicalFunction, &map, &FixtureCatalog),
        0.0,
    );
}

#[test]
fn unknown_items_and_options_contribute_nothing() {
    let map = answers(&[("2-4", "nonsense option"), ("9-1", "自立（介助なし）")]);
    assert_minutes(group_score(SurveyGroup::LifeFunction, &map, &FixtureCatalog), 0.0);
}

#[test]
fn multi_choice_selections_contribute_their_combined_weight() {
    let map = with_multi(answers(&[]), "1-1", &["いずれか一肢のみ"]);
    let scores = all_group_scores(&map, &FixtureCatalog);
    assert_minutes(scores.physical_function, 5.0);
    assert_minutes(scores.life_function, 0.0);
}
