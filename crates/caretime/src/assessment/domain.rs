use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Survey item identifier of the form `"<group>-<index>"`, e.g. `"2-4"`.
///
/// Groups 1-5 feed the intermediate group scores; groups 6-8 carry raw
/// signals (medical procedures, assessor judgments) read directly by the
/// category calculators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Splits the id into its `(group, index)` pair when well-formed.
    pub fn group_index(&self) -> Option<(u8, u8)> {
        let (group, index) = self.0.split_once('-')?;
        Some((group.parse().ok()?, index.parse().ok()?))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Recorded answer for one survey item: a single selected option or the
/// selected subset of a multi-choice item (order irrelevant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    pub fn single(option: impl Into<String>) -> Self {
        Self::Single(option.into())
    }

    pub fn multi<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multi(options.into_iter().map(Into::into).collect())
    }

    /// True when nothing is effectively selected: an empty selection list or
    /// a legacy empty string.
    pub fn is_none_selected(&self) -> bool {
        match self {
            AnswerValue::Single(option) => option.is_empty(),
            AnswerValue::Multi(options) => options.is_empty(),
        }
    }
}

/// Complete or partial survey response. Any key may be absent; the engine
/// degrades to documented floor values rather than failing.
pub type AnswerMap = BTreeMap<QuestionId, AnswerValue>;

/// The five scored question clusters of the certification survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyGroup {
    PhysicalFunction,
    LifeFunction,
    CognitiveFunction,
    MentalBehavior,
    SocialAdaptation,
}

impl SurveyGroup {
    pub const ALL: [SurveyGroup; 5] = [
        SurveyGroup::PhysicalFunction,
        SurveyGroup::LifeFunction,
        SurveyGroup::CognitiveFunction,
        SurveyGroup::MentalBehavior,
        SurveyGroup::SocialAdaptation,
    ];

    pub const fn number(self) -> u8 {
        match self {
            SurveyGroup::PhysicalFunction => 1,
            SurveyGroup::LifeFunction => 2,
            SurveyGroup::CognitiveFunction => 3,
            SurveyGroup::MentalBehavior => 4,
            SurveyGroup::SocialAdaptation => 5,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(SurveyGroup::PhysicalFunction),
            2 => Some(SurveyGroup::LifeFunction),
            3 => Some(SurveyGroup::CognitiveFunction),
            4 => Some(SurveyGroup::MentalBehavior),
            5 => Some(SurveyGroup::SocialAdaptation),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SurveyGroup::PhysicalFunction => "physical_function",
            SurveyGroup::LifeFunction => "life_function",
            SurveyGroup::CognitiveFunction => "cognitive_function",
            SurveyGroup::MentalBehavior => "mental_behavior",
            SurveyGroup::SocialAdaptation => "social_adaptation",
        }
    }
}

/// The eight daily-living and medical-support categories the engine
/// estimates minutes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareCategory {
    Meal,
    Excretion,
    Movement,
    Hygiene,
    IndirectCare,
    Behavioral,
    FunctionalTraining,
    Medical,
}

impl CareCategory {
    /// Stable evaluation order used by the total time engine.
    pub const ALL: [CareCategory; 8] = [
        CareCategory::Meal,
        CareCategory::Excretion,
        CareCategory::Movement,
        CareCategory::Hygiene,
        CareCategory::IndirectCare,
        CareCategory::Behavioral,
        CareCategory::FunctionalTraining,
        CareCategory::Medical,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CareCategory::Meal => "meal",
            CareCategory::Excretion => "excretion",
            CareCategory::Movement => "movement",
            CareCategory::Hygiene => "hygiene",
            CareCategory::IndirectCare => "indirect_care",
            CareCategory::Behavioral => "behavioral",
            CareCategory::FunctionalTraining => "functional_training",
            CareCategory::Medical => "medical",
        }
    }

    /// Minutes returned when a required answer is absent mid-tree, and the
    /// value every category takes on a fully empty survey.
    pub const fn floor_minutes(self) -> f64 {
        match self {
            CareCategory::Meal => 1.1,
            CareCategory::Excretion => 0.2,
            CareCategory::Movement => 0.4,
            CareCategory::Hygiene => 1.2,
            CareCategory::IndirectCare => 1.6,
            CareCategory::Behavioral => 5.8,
            CareCategory::FunctionalTraining => 0.5,
            CareCategory::Medical => 1.0,
        }
    }

    /// Expected output bounds per the rule tables. Not enforced at runtime;
    /// the test suite treats out-of-range results as defects. The Medical
    /// upper bound excludes the additive special-procedure extras.
    pub const fn expected_range(self) -> (f64, f64) {
        match self {
            CareCategory::Meal => (1.1, 71.4),
            CareCategory::Excretion => (0.2, 28.0),
            CareCategory::Movement => (0.4, 21.4),
            CareCategory::Hygiene => (0.4, 24.3),
            CareCategory::IndirectCare => (1.6, 26.4),
            CareCategory::Behavioral => (5.8, 21.2),
            CareCategory::FunctionalTraining => (0.5, 15.4),
            CareCategory::Medical => (1.0, 37.2),
        }
    }
}

/// Final ordinal classification derived from total certification minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareLevel {
    NotApplicable,
    Support1,
    Support2OrCare1,
    Care2,
    Care3,
    Care4,
    Care5,
}

impl CareLevel {
    pub const fn label(self) -> &'static str {
        match self {
            CareLevel::NotApplicable => "not_applicable",
            CareLevel::Support1 => "support_1",
            CareLevel::Support2OrCare1 => "support_2_or_care_1",
            CareLevel::Care2 => "care_2",
            CareLevel::Care3 => "care_3",
            CareLevel::Care4 => "care_4",
            CareLevel::Care5 => "care_5",
        }
    }
}

/// Per-category minute estimates for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTimes {
    pub meal: f64,
    pub excretion: f64,
    pub movement: f64,
    pub hygiene: f64,
    pub indirect_care: f64,
    pub behavioral: f64,
    pub functional_training: f64,
    pub medical: f64,
}

impl CategoryTimes {
    /// Every category at its documented floor: the result of evaluating an
    /// empty survey.
    pub fn floors() -> Self {
        let mut times = Self {
            meal: 0.0,
            excretion: 0.0,
            movement: 0.0,
            hygiene: 0.0,
            indirect_care: 0.0,
            behavioral: 0.0,
            functional_training: 0.0,
            medical: 0.0,
        };
        for category in CareCategory::ALL {
            times.set(category, category.floor_minutes());
        }
        times
    }

    pub fn get(&self, category: CareCategory) -> f64 {
        match category {
            CareCategory::Meal => self.meal,
            CareCategory::Excretion => self.excretion,
            CareCategory::Movement => self.movement,
            CareCategory::Hygiene => self.hygiene,
            CareCategory::IndirectCare => self.indirect_care,
            CareCategory::Behavioral => self.behavioral,
            CareCategory::FunctionalTraining => self.functional_training,
            CareCategory::Medical => self.medical,
        }
    }

    pub fn set(&mut self, category: CareCategory, minutes: f64) {
        match category {
            CareCategory::Meal => self.meal = minutes,
            CareCategory::Excretion => self.excretion = minutes,
            CareCategory::Movement => self.movement = minutes,
            CareCategory::Hygiene => self.hygiene = minutes,
            CareCategory::IndirectCare => self.indirect_care = minutes,
            CareCategory::Behavioral => self.behavioral = minutes,
            CareCategory::FunctionalTraining => self.functional_training = minutes,
            CareCategory::Medical => self.medical = minutes,
        }
    }

    pub fn sum(&self) -> f64 {
        CareCategory::ALL
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }
}

/// The five intermediate group scores at the time of an evaluation,
/// surfaced alongside the result to allow transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupScores {
    pub physical_function: f64,
    pub life_function: f64,
    pub cognitive_function: f64,
    pub mental_behavior: f64,
    pub social_adaptation: f64,
}

impl GroupScores {
    pub fn get(&self, group: SurveyGroup) -> f64 {
        match group {
            SurveyGroup::PhysicalFunction => self.physical_function,
            SurveyGroup::LifeFunction => self.life_function,
            SurveyGroup::CognitiveFunction => self.cognitive_function,
            SurveyGroup::MentalBehavior => self.mental_behavior,
            SurveyGroup::SocialAdaptation => self.social_adaptation,
        }
    }
}

/// Evaluation output: the eight category estimates, the group-score
/// breakdown, the truncated total, and the resulting care level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub category_times: CategoryTimes,
    pub group_scores: GroupScores,
    pub total_minutes: u32,
    pub care_level: CareLevel,
}
