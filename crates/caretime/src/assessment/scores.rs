use super::catalog::AnswerCatalog;
use super::domain::{AnswerMap, GroupScores, QuestionId, SurveyGroup};

/// Highest item index per scored group. Group 1 runs `1-1`..`1-13`, group 2
/// `2-1`..`2-12`, and so on; anything outside these bounds is not a scored
/// item.
const GROUP_INDEX_LIMITS: [(u8, u8); 5] = [(1, 13), (2, 12), (3, 9), (4, 15), (5, 6)];

/// Resolves an item id to its scored group, or `None` for malformed ids,
/// out-of-range indexes, and the unscored signal groups (6 and up).
pub fn group_of(question: &QuestionId) -> Option<SurveyGroup> {
    let (group, index) = question.group_index()?;
    let (_, limit) = GROUP_INDEX_LIMITS
        .iter()
        .find(|(number, _)| *number == group)?;
    if index >= 1 && index <= *limit {
        SurveyGroup::from_number(group)
    } else {
        None
    }
}

/// Sums the catalog's intermediate scores for every answered item belonging
/// to `group`. Items the catalog does not know contribute zero.
pub fn group_score(group: SurveyGroup, answers: &AnswerMap, catalog: &dyn AnswerCatalog) -> f64 {
    answers
        .iter()
        .filter(|(question, _)| group_of(question) == Some(group))
        .filter_map(|(question, answer)| catalog.intermediate_score(question, answer))
        .sum()
}

pub fn all_group_scores(answers: &AnswerMap, catalog: &dyn AnswerCatalog) -> GroupScores {
    GroupScores {
        physical_function: group_score(SurveyGroup::PhysicalFunction, answers, catalog),
        life_function: group_score(SurveyGroup::LifeFunction, answers, catalog),
        cognitive_function: group_score(SurveyGroup::CognitiveFunction, answers, catalog),
        mental_behavior: group_score(SurveyGroup::MentalBehavior, answers, catalog),
        social_adaptation: group_score(SurveyGroup::SocialAdaptation, answers, catalog),
    }
}
