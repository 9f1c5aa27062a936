use std::sync::Arc;

use thiserror::Error;

use super::calculators::{registry, CategoryCalculator};
use super::catalog::{AnswerCatalog, QuestionType};
use super::classify::classify;
use super::context::EvaluationContext;
use super::domain::{AnswerMap, AnswerValue, AssessmentOutcome, CategoryTimes, QuestionId};
use super::scores::all_group_scores;

/// Rejection of a survey response before any rule evaluation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("answer for item {question} does not match its declared {expected} shape")]
    InvalidInput {
        question: QuestionId,
        expected: QuestionType,
    },
}

/// Stateless evaluator: validates a survey response, runs the eight
/// category calculators, and classifies the truncated total.
///
/// The engine is cheap to clone and safe to share across request handlers.
pub struct AssessmentEngine<C> {
    catalog: Arc<C>,
    calculators: [&'static dyn CategoryCalculator; 8],
}

impl<C> Clone for AssessmentEngine<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            calculators: self.calculators,
        }
    }
}

impl<C: AnswerCatalog> AssessmentEngine<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            calculators: registry(),
        }
    }

    pub fn evaluate(&self, answers: &AnswerMap) -> Result<AssessmentOutcome, AssessmentError> {
        self.validate(answers)?;

        let mut category_times = CategoryTimes::floors();
        // An empty survey short-circuits to the documented floors; the rule
        // trees are only defined over at least one recorded answer.
        if !answers.is_empty() {
            let ctx = EvaluationContext::new(answers, self.catalog.as_ref());
            for calculator in self.calculators {
                category_times.set(calculator.category(), calculator.calculate(&ctx));
            }
        }

        let total_minutes = category_times.sum().trunc() as u32;
        let care_level = classify(total_minutes);
        tracing::debug!(total_minutes, level = care_level.label(), "assessment evaluated");

        Ok(AssessmentOutcome {
            category_times,
            group_scores: all_group_scores(answers, self.catalog.as_ref()),
            total_minutes,
            care_level,
        })
    }

    /// Checks every answered item against its declared shape. Items the
    /// catalog does not know pass through unvalidated. An empty-string
    /// single value on a multi-choice item is accepted as the legacy
    /// "nothing selected" form.
    fn validate(&self, answers: &AnswerMap) -> Result<(), AssessmentError> {
        for (question, answer) in answers {
            let Some(expected) = self.catalog.question_type(question) else {
                continue;
            };
            let ok = match (expected, answer) {
                (QuestionType::Single, AnswerValue::Single(_)) => true,
                (QuestionType::Multi, AnswerValue::Multi(_)) => true,
                (QuestionType::Multi, AnswerValue::Single(option)) => option.is_empty(),
                (QuestionType::Single, AnswerValue::Multi(_)) => false,
            };
            if !ok {
                return Err(AssessmentError::InvalidInput {
                    question: question.clone(),
                    expected,
                });
            }
        }
        Ok(())
    }
}
