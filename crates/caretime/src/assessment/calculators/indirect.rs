use super::CategoryCalculator;
use crate::assessment::context::EvaluationContext;
use crate::assessment::domain::{CareCategory, SurveyGroup};
use crate::assessment::options::*;

/// Minutes of indirect care: housekeeping, preparation and other support
/// not rendered to the body. Branches on communication ability, decision
/// making and money management.
pub(crate) struct IndirectCareCalculator;

impl CategoryCalculator for IndirectCareCalculator {
    fn category(&self) -> CareCategory {
        CareCategory::IndirectCare
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let floor = self.floor();
        let life = ctx.score(SurveyGroup::LifeFunction);
        if life <= 46.1 {
            match ctx.single("3-1") {
                Some(COMMUNICATES) => {
                    if ctx.score(SurveyGroup::CognitiveFunction) <= 33.5 {
                        if life <= 18.9 {
                            26.4
                        } else {
                            21.5
                        }
                    } else {
                        match ctx.single("5-3") {
                            Some(CAN) => 12.2,
                            Some(_) => {
                                if ctx.score(SurveyGroup::MentalBehavior) <= 89.7 {
                                    16.8
                                } else {
                                    14.3
                                }
                            }
                            None => floor,
                        }
                    }
                }
                Some(_) => {
                    if ctx.score(SurveyGroup::PhysicalFunction) <= 26.9 {
                        return 24.2;
                    }
                    match ctx.single("2-12") {
                        Some(OUTING_WEEKLY) | Some(OUTING_MONTHLY) => 15.7,
                        Some(_) => 18.6,
                        None => floor,
                    }
                }
                None => floor,
            }
        } else {
            match ctx.single("5-6") {
                Some(INDEPENDENT) | Some(WATCHED) => {
                    if ctx.score(SurveyGroup::SocialAdaptation) <= 52.4 {
                        8.0
                    } else {
                        4.9
                    }
                }
                Some(_) => {
                    if life <= 72.8 {
                        10.6
                    } else if ctx.score(SurveyGroup::CognitiveFunction) <= 66.0 {
                        6.1
                    } else {
                        floor
                    }
                }
                None => floor,
            }
        }
    }
}
