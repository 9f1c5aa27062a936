use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerValue, QuestionId};

/// Declared answer shape for a survey item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Exactly one option may be selected.
    Single,
    /// Any subset of the options may be selected, including none.
    Multi,
}

impl QuestionType {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionType::Single => "single_choice",
            QuestionType::Multi => "multi_choice",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of per-option intermediate scores and item metadata.
///
/// Implementations back the group-score computation; the engine never
/// hardcodes option weights. Unknown items and unknown options contribute
/// nothing rather than erroring, so catalogs may be partial.
pub trait AnswerCatalog: Send + Sync {
    /// Intermediate score contributed by `answer` to its group total, or
    /// `None` when the item or option is not in the catalog.
    fn intermediate_score(&self, question: &QuestionId, answer: &AnswerValue) -> Option<f64>;

    /// Declared shape of the item, used to validate incoming answer maps.
    /// `None` means the item is unknown and its answers pass unvalidated.
    fn question_type(&self, question: &QuestionId) -> Option<QuestionType>;
}
