use super::CategoryCalculator;
use crate::assessment::context::EvaluationContext;
use crate::assessment::domain::{CareCategory, SurveyGroup};
use crate::assessment::options::*;

/// Minutes of meal assistance. Branches first on the eating item (2-4),
/// then on mobility around the table and swallowing ability.
pub(crate) struct MealCalculator;

impl CategoryCalculator for MealCalculator {
    fn category(&self) -> CareCategory {
        CareCategory::Meal
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let floor = self.floor();
        match ctx.single("2-4") {
            Some(INDEPENDENT) | Some(WATCHED) => self.eats_unassisted(ctx, floor),
            Some(PARTIAL_ASSIST) | Some(FULL_ASSIST) => self.eats_assisted(ctx, floor),
            _ => floor,
        }
    }
}

impl MealCalculator {
    fn eats_unassisted(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        let life = ctx.score(SurveyGroup::LifeFunction);
        if life <= 31.2 {
            if ctx.score(SurveyGroup::CognitiveFunction) <= 40.3 {
                18.6
            } else if ctx.score(SurveyGroup::MentalBehavior) <= 88.9 {
                13.7
            } else {
                11.2
            }
        } else {
            match ctx.single("2-2") {
                Some(INDEPENDENT) | Some(WATCHED) => match ctx.single("3-4") {
                    Some(CAN) => 3.4,
                    Some(_) => match ctx.single("2-12") {
                        Some(OUTING_WEEKLY) | Some(OUTING_MONTHLY) => 10.1,
                        Some(_) => {
                            if life <= 48.6 {
                                8.8
                            } else {
                                5.0
                            }
                        }
                        None => floor,
                    },
                    None => floor,
                },
                Some(_) => match ctx.single("3-4") {
                    Some(CAN) => 6.8,
                    Some(_) => {
                        if ctx.score(SurveyGroup::PhysicalFunction) <= 67.1 {
                            11.1
                        } else {
                            7.5
                        }
                    }
                    None => floor,
                },
                None => floor,
            }
        }
    }

    fn eats_assisted(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("2-3") {
            Some(CAN) | Some(WATCHED) => {}
            _ => return floor,
        }
        let life = ctx.score(SurveyGroup::LifeFunction);
        if life <= 11.5 {
            if ctx.score(SurveyGroup::CognitiveFunction) <= 27.7 {
                if ctx.score(SurveyGroup::PhysicalFunction) <= 12.3 {
                    71.4
                } else {
                    match ctx.single("1-12") {
                        Some(VISION_NORMAL) => 65.9,
                        Some(_) => 56.0,
                        None => floor,
                    }
                }
            } else {
                45.4
            }
        } else {
            match ctx.single("2-7") {
                Some(INDEPENDENT) | Some(PARTIAL_ASSIST) => {
                    if life <= 35.4 {
                        15.4
                    } else {
                        21.6
                    }
                }
                Some(_) => match ctx.single("1-3") {
                    Some(ROLL_UNAIDED) | Some(ROLL_WITH_SUPPORT) => {
                        if ctx.none_selected("1-1") {
                            34.2
                        } else {
                            25.3
                        }
                    }
                    // The rule table leaves the no-rolling branch unassigned.
                    _ => floor,
                },
                None => floor,
            }
        }
    }
}
