use super::catalog::AnswerCatalog;
use super::domain::{AnswerMap, AnswerValue, SurveyGroup};
use super::scores::group_score;

/// Read-only view over one survey response that the category calculators
/// branch against. Wraps the answer map with the lookup conventions of the
/// rule tables: absent multi-choice answers read as "nothing selected",
/// absent single-choice answers read as missing.
pub struct EvaluationContext<'a> {
    answers: &'a AnswerMap,
    catalog: &'a dyn AnswerCatalog,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(answers: &'a AnswerMap, catalog: &'a dyn AnswerCatalog) -> Self {
        Self { answers, catalog }
    }

    /// Intermediate score for a survey group.
    pub fn score(&self, group: SurveyGroup) -> f64 {
        group_score(group, self.answers, self.catalog)
    }

    /// Selected option of a single-choice item. `None` when the item is
    /// unanswered, answered with an empty string, or answered with a list.
    pub fn single(&self, question: &str) -> Option<&str> {
        match self.answers.get(question) {
            Some(AnswerValue::Single(option)) if !option.is_empty() => Some(option),
            _ => None,
        }
    }

    /// True when a multi-choice item has no effective selection. Absence of
    /// the item, an empty list and an empty string all count as none.
    pub fn none_selected(&self, question: &str) -> bool {
        match self.answers.get(question) {
            Some(answer) => answer.is_none_selected(),
            None => true,
        }
    }

    /// True when `option` is among the selections of a multi-choice item.
    pub fn selected(&self, question: &str, option: &str) -> bool {
        match self.answers.get(question) {
            Some(AnswerValue::Multi(options)) => options.iter().any(|o| o == option),
            Some(AnswerValue::Single(selected)) => selected == option,
            None => false,
        }
    }

    /// All selections of a multi-choice item. A non-empty single answer is
    /// treated as a one-element selection.
    pub fn selections(&self, question: &str) -> Vec<&str> {
        match self.answers.get(question) {
            Some(AnswerValue::Multi(options)) => options.iter().map(String::as_str).collect(),
            Some(AnswerValue::Single(option)) if !option.is_empty() => vec![option],
            _ => Vec::new(),
        }
    }
}
