use super::CategoryCalculator;
use crate::assessment::context::EvaluationContext;
use crate::assessment::domain::{CareCategory, SurveyGroup};
use crate::assessment::options::*;

/// Minutes spent responding to behavioral and psychological symptoms.
/// Keyed primarily on the mental-behavior score; note the floor of 5.8 is
/// well above zero since some response burden is always assumed.
pub(crate) struct BehavioralCalculator;

impl CategoryCalculator for BehavioralCalculator {
    fn category(&self) -> CareCategory {
        CareCategory::Behavioral
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let floor = self.floor();
        let mental = ctx.score(SurveyGroup::MentalBehavior);
        if mental <= 81.0 {
            self.low_mental(ctx, floor)
        } else {
            self.high_mental(ctx, floor, mental)
        }
    }
}

impl BehavioralCalculator {
    fn low_mental(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        if ctx.none_selected("1-1") {
            match ctx.single("3-1") {
                Some(COMMUNICATES) | Some(COMMUNICATES_SOMETIMES) | Some(COMMUNICATES_RARELY) => {
                    match ctx.single("1-7") {
                        Some(ROLL_UNAIDED) => {
                            if ctx.score(SurveyGroup::PhysicalFunction) <= 90.2 {
                                16.1
                            } else {
                                10.5
                            }
                        }
                        Some(_) => match ctx.single("1-5") {
                            Some(CAN) => 10.6,
                            Some(_) => 7.6,
                            None => floor,
                        },
                        None => floor,
                    }
                }
                Some(_) => 21.2,
                None => floor,
            }
        } else {
            match ctx.single("3-9") {
                Some(ABSENT) => {
                    if ctx.score(SurveyGroup::PhysicalFunction) <= 48.6 {
                        match ctx.single("5-3") {
                            Some(CAN) | Some(DECIDES_EXCEPT_SPECIAL)
                            | Some(DECIDES_WITH_DIFFICULTY) => 6.7,
                            Some(_) => 8.1,
                            None => floor,
                        }
                    } else {
                        9.0
                    }
                }
                Some(_) => 10.8,
                None => floor,
            }
        }
    }

    fn high_mental(&self, ctx: &EvaluationContext<'_>, floor: f64, mental: f64) -> f64 {
        if mental <= 90.8 {
            match ctx.single("3-1") {
                Some(COMMUNICATES) | Some(COMMUNICATES_SOMETIMES) | Some(COMMUNICATES_RARELY) => {
                    match ctx.single("3-8") {
                        Some(ABSENT) => {
                            if ctx.score(SurveyGroup::PhysicalFunction) <= 68.1 {
                                6.3
                            } else if ctx.score(SurveyGroup::CognitiveFunction) <= 80.5 {
                                7.5
                            } else {
                                6.2
                            }
                        }
                        Some(_) => 8.7,
                        None => floor,
                    }
                }
                Some(_) => 10.1,
                None => floor,
            }
        } else if mental <= 95.3 {
            if ctx.none_selected("1-1") {
                if ctx.score(SurveyGroup::CognitiveFunction) <= 75.8 {
                    7.6
                } else {
                    6.4
                }
            } else {
                6.2
            }
        } else {
            if ctx.score(SurveyGroup::PhysicalFunction) <= 18.3 {
                return floor;
            }
            match ctx.single("2-7") {
                Some(INDEPENDENT) => floor,
                Some(_) => match ctx.single("1-7") {
                    Some(ROLL_UNAIDED) | Some(ROLL_WITH_SUPPORT) => 6.4,
                    Some(_) => 6.1,
                    None => floor,
                },
                None => floor,
            }
        }
    }
}
