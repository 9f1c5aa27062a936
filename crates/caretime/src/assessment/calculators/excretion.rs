use super::CategoryCalculator;
use crate::assessment::context::EvaluationContext;
use crate::assessment::domain::{CareCategory, SurveyGroup};
use crate::assessment::options::*;

/// Minutes of toileting assistance. The widest of the trees: it splits on
/// the life-function score, then walks and transfer ability, bowel control
/// and daily decision making.
pub(crate) struct ExcretionCalculator;

impl CategoryCalculator for ExcretionCalculator {
    fn category(&self) -> CareCategory {
        CareCategory::Excretion
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let floor = self.floor();
        if ctx.score(SurveyGroup::LifeFunction) <= 65.8 {
            self.low_life(ctx, floor)
        } else {
            self.high_life(ctx, floor)
        }
    }
}

impl ExcretionCalculator {
    fn low_life(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("2-2") {
            Some(INDEPENDENT) | Some(WATCHED) => match ctx.single("2-6") {
                Some(INDEPENDENT) | Some(WATCHED) | Some(PARTIAL_ASSIST) => {
                    if ctx.score(SurveyGroup::CognitiveFunction) <= 58.2 {
                        15.1
                    } else {
                        11.6
                    }
                }
                Some(_) => match ctx.single("2-7") {
                    Some(INDEPENDENT) | Some(PARTIAL_ASSIST) => 19.1,
                    Some(_) => 22.6,
                    None => floor,
                },
                None => floor,
            },
            Some(_) => {
                if ctx.score(SurveyGroup::MentalBehavior) <= 96.4 {
                    match ctx.single("5-3") {
                        Some(CAN) => 25.9,
                        Some(decision) => self.by_decision_making(ctx, decision),
                        None => floor,
                    }
                } else {
                    self.high_mental(ctx, floor)
                }
            }
            None => floor,
        }
    }

    fn by_decision_making(&self, ctx: &EvaluationContext<'_>, decision: &str) -> f64 {
        let life = ctx.score(SurveyGroup::LifeFunction);
        let physical = ctx.score(SurveyGroup::PhysicalFunction);
        let mental = ctx.score(SurveyGroup::MentalBehavior);
        if life <= 45.5 {
            if physical <= 41.3 {
                if physical <= 35.3 {
                    if life <= 20.6 {
                        if mental <= 77.9 {
                            24.5
                        } else if mental <= 82.9 {
                            19.8
                        } else if life <= 3.5 {
                            24.0
                        } else if !ctx.selected("1-2", CONTRACTURE_SHOULDER) {
                            21.0
                        } else if mental <= 91.4 {
                            23.9
                        } else {
                            22.1
                        }
                    } else {
                        25.9
                    }
                } else {
                    20.8
                }
            } else if mental <= 84.9 {
                match decision {
                    DECIDES_EXCEPT_SPECIAL | DECIDES_WITH_DIFFICULTY => 24.1,
                    _ => 28.0,
                }
            } else {
                22.9
            }
        } else {
            20.5
        }
    }

    fn high_mental(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        let physical = ctx.score(SurveyGroup::PhysicalFunction);
        if physical <= 11.9 {
            return 22.1;
        }
        match ctx.single("1-6") {
            Some(STAND_UNAIDED) | Some(STAND_WITH_SUPPORT) => {
                if physical <= 55.0 {
                    24.5
                } else {
                    20.1
                }
            }
            Some(_) => {
                if ctx.score(SurveyGroup::SocialAdaptation) <= 27.0 {
                    if ctx.score(SurveyGroup::LifeFunction) <= 17.5 {
                        if !ctx.selected("1-2", CONTRACTURE_HIP) {
                            21.5
                        } else {
                            match ctx.single("1-12") {
                                Some(VISION_NORMAL) => 19.7,
                                Some(_) => 18.4,
                                None => floor,
                            }
                        }
                    } else {
                        17.4
                    }
                } else {
                    21.7
                }
            }
            None => floor,
        }
    }

    fn high_life(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("2-6") {
            Some(INDEPENDENT) | Some(WATCHED) => {
                if ctx.score(SurveyGroup::LifeFunction) <= 87.7 {
                    match ctx.single("1-6") {
                        Some(STAND_UNAIDED) => 2.9,
                        Some(_) => {
                            if ctx.none_selected("1-1") {
                                8.2
                            } else {
                                4.7
                            }
                        }
                        None => floor,
                    }
                } else if ctx.score(SurveyGroup::PhysicalFunction) <= 85.1 {
                    2.0
                } else {
                    floor
                }
            }
            Some(_) => match ctx.single("2-11") {
                Some(INDEPENDENT) | Some(WATCHED) => 8.3,
                Some(_) => {
                    if ctx.score(SurveyGroup::LifeFunction) <= 77.3 {
                        16.1
                    } else {
                        11.1
                    }
                }
                None => floor,
            },
            None => floor,
        }
    }
}
