use super::CategoryCalculator;
use crate::assessment::context::EvaluationContext;
use crate::assessment::domain::{CareCategory, SurveyGroup};
use crate::assessment::options::*;

/// Minutes of transfer and locomotion assistance.
pub(crate) struct MovementCalculator;

impl CategoryCalculator for MovementCalculator {
    fn category(&self) -> CareCategory {
        CareCategory::Movement
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let floor = self.floor();
        if ctx.score(SurveyGroup::LifeFunction) <= 63.2 {
            self.low_life(ctx, floor)
        } else {
            self.high_life(ctx, floor)
        }
    }
}

impl MovementCalculator {
    fn low_life(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        let life = ctx.score(SurveyGroup::LifeFunction);
        if life <= 3.4 {
            if ctx.score(SurveyGroup::MentalBehavior) <= 97.6 {
                return 11.4;
            }
            return match ctx.single("1-13") {
                Some(HEARING_NORMAL) | Some(HEARING_LOUD) => 10.4,
                Some(_) => {
                    if ctx.score(SurveyGroup::PhysicalFunction) <= 1.6 {
                        8.8
                    } else {
                        7.3
                    }
                }
                None => floor,
            };
        }
        match ctx.single("2-2") {
            Some(INDEPENDENT) | Some(WATCHED) => {
                if life <= 43.7 {
                    return 14.6;
                }
                match ctx.single("5-3") {
                    Some(CAN) | Some(DECIDES_EXCEPT_SPECIAL) => match ctx.single("2-1") {
                        Some(INDEPENDENT) | Some(WATCHED) => 7.6,
                        Some(_) => 11.1,
                        None => floor,
                    },
                    Some(_) => 12.6,
                    None => floor,
                }
            }
            Some(_) => self.walks_assisted(ctx, floor),
            None => floor,
        }
    }

    fn walks_assisted(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        if ctx.score(SurveyGroup::SocialAdaptation) <= 3.6 {
            return if ctx.score(SurveyGroup::CognitiveFunction) <= 19.7 {
                21.4
            } else {
                19.2
            };
        }
        match ctx.single("1-3") {
            Some(ROLL_UNAIDED) | Some(ROLL_WITH_SUPPORT) => {
                if ctx.score(SurveyGroup::PhysicalFunction) <= 64.3 {
                    match ctx.single("1-10") {
                        Some(INDEPENDENT) | Some(PARTIAL_ASSIST) => 15.2,
                        Some(_) => 17.2,
                        None => floor,
                    }
                } else {
                    match ctx.single("1-5") {
                        Some(CAN) => 20.5,
                        Some(_) => 17.6,
                        None => floor,
                    }
                }
            }
            Some(_) => match ctx.single("3-6") {
                Some(CAN) => 20.8,
                Some(_) => {
                    if ctx.score(SurveyGroup::PhysicalFunction) <= 15.8 {
                        return 19.3;
                    }
                    match ctx.single("2-4") {
                        Some(INDEPENDENT) | Some(WATCHED) => 19.1,
                        Some(_) => {
                            if ctx.none_selected("1-1") {
                                19.0
                            } else if ctx.score(SurveyGroup::CognitiveFunction) <= 36.2 {
                                17.8
                            } else {
                                16.3
                            }
                        }
                        None => floor,
                    }
                }
                None => floor,
            },
            None => floor,
        }
    }

    fn high_life(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        if ctx.score(SurveyGroup::LifeFunction) <= 79.9 {
            match ctx.single("2-6") {
                Some(INDEPENDENT) | Some(WATCHED) => match ctx.single("3-4") {
                    Some(CAN) => 4.7,
                    Some(_) => 7.8,
                    None => floor,
                },
                Some(_) => match ctx.single("2-1") {
                    Some(INDEPENDENT) => 8.2,
                    Some(_) => {
                        if ctx.none_selected("1-1") {
                            14.2
                        } else {
                            10.2
                        }
                    }
                    None => floor,
                },
                None => floor,
            }
        } else {
            match ctx.single("2-2") {
                Some(INDEPENDENT) => match ctx.single("2-11") {
                    Some(INDEPENDENT) | Some(WATCHED) => {
                        if ctx.score(SurveyGroup::CognitiveFunction) <= 61.7 {
                            3.8
                        } else if ctx.score(SurveyGroup::PhysicalFunction) <= 87.5 {
                            2.0
                        } else {
                            floor
                        }
                    }
                    Some(_) => 4.6,
                    None => floor,
                },
                Some(_) => {
                    if ctx.score(SurveyGroup::PhysicalFunction) <= 79.4 {
                        7.6
                    } else {
                        4.1
                    }
                }
                None => floor,
            }
        }
    }
}
