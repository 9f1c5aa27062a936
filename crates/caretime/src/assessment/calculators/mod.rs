//! Per-category minute estimators. Each calculator walks a fixed decision
//! tree over group scores and individual answers; a missing single-choice
//! answer at any branch point resolves to the category floor.

mod behavioral;
mod excretion;
mod hygiene;
mod indirect;
mod meal;
mod medical;
mod movement;
mod training;

use super::context::EvaluationContext;
use super::domain::CareCategory;

pub(crate) use behavioral::BehavioralCalculator;
pub(crate) use excretion::ExcretionCalculator;
pub(crate) use hygiene::HygieneCalculator;
pub(crate) use indirect::IndirectCareCalculator;
pub(crate) use meal::MealCalculator;
pub(crate) use medical::MedicalCalculator;
pub(crate) use movement::MovementCalculator;
pub(crate) use training::FunctionalTrainingCalculator;

/// One category's minute estimator.
pub trait CategoryCalculator: Send + Sync {
    fn category(&self) -> CareCategory;

    /// Returned when a required answer is absent mid-tree.
    fn floor(&self) -> f64 {
        self.category().floor_minutes()
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64;
}

/// The eight calculators in the engine's stable evaluation order.
pub(crate) fn registry() -> [&'static dyn CategoryCalculator; 8] {
    [
        &MealCalculator,
        &ExcretionCalculator,
        &MovementCalculator,
        &HygieneCalculator,
        &IndirectCareCalculator,
        &BehavioralCalculator,
        &FunctionalTrainingCalculator,
        &MedicalCalculator,
    ]
}
