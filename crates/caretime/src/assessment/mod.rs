//! Care-needs certification assessment: group scoring over survey answers,
//! eight per-category minute estimators, and classification of the total
//! into a care level.

pub mod catalog;
pub mod classify;
pub mod domain;
pub mod engine;
pub mod router;
pub mod scores;

mod calculators;
mod context;
mod options;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerCatalog, QuestionType};
pub use classify::classify;
pub use domain::{
    AnswerMap, AnswerValue, AssessmentOutcome, CareCategory, CareLevel, CategoryTimes,
    GroupScores, QuestionId, SurveyGroup,
};
pub use engine::{AssessmentEngine, AssessmentError};
pub use router::assessment_router;
