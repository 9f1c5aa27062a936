use super::CategoryCalculator;
use crate::assessment::context::EvaluationContext;
use crate::assessment::domain::{CareCategory, SurveyGroup};
use crate::assessment::options::*;

/// Minutes of bathing, grooming and dressing assistance.
pub(crate) struct HygieneCalculator;

impl CategoryCalculator for HygieneCalculator {
    fn category(&self) -> CareCategory {
        CareCategory::Hygiene
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let floor = self.floor();
        if ctx.score(SurveyGroup::LifeFunction) <= 14.4 {
            self.low_life(ctx, floor)
        } else {
            self.high_life(ctx, floor)
        }
    }
}

impl HygieneCalculator {
    fn low_life(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("3-5") {
            Some(CAN) => {
                if ctx.score(SurveyGroup::CognitiveFunction) <= 58.1 {
                    if ctx.score(SurveyGroup::LifeFunction) <= 9.4 {
                        2.2
                    } else {
                        4.2
                    }
                } else {
                    5.4
                }
            }
            Some(_) => {
                if ctx.score(SurveyGroup::PhysicalFunction) <= 10.1 {
                    return 0.4;
                }
                if ctx.score(SurveyGroup::MentalBehavior) <= 80.8 {
                    return 3.6;
                }
                match ctx.single("1-12") {
                    Some(VISION_NORMAL) | Some(VISION_ONE_METER) => {
                        if ctx.score(SurveyGroup::MentalBehavior) <= 98.8 {
                            1.7
                        } else {
                            2.8
                        }
                    }
                    Some(_) => 1.3,
                    None => floor,
                }
            }
            None => floor,
        }
    }

    fn high_life(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        if ctx.score(SurveyGroup::MentalBehavior) <= 95.8 {
            match ctx.single("2-12") {
                Some(OUTING_WEEKLY) | Some(OUTING_MONTHLY) => match ctx.single("3-1") {
                    Some(COMMUNICATES) => 10.9,
                    Some(_) => 8.0,
                    None => floor,
                },
                Some(_) => self.rare_outings(ctx, floor),
                None => floor,
            }
        } else {
            self.high_mental(ctx, floor)
        }
    }

    fn rare_outings(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("1-3") {
            Some(ROLL_UNAIDED) => {
                if ctx.score(SurveyGroup::MentalBehavior) <= 69.0 {
                    return 6.5;
                }
                match ctx.single("2-1") {
                    Some(INDEPENDENT) => match ctx.single("3-1") {
                        Some(COMMUNICATES) => 4.7,
                        Some(_) => 3.0,
                        None => floor,
                    },
                    Some(_) => 6.3,
                    None => floor,
                }
            }
            Some(_) => match ctx.single("3-1") {
                Some(COMMUNICATES) => {
                    if ctx.score(SurveyGroup::LifeFunction) <= 58.9 {
                        if ctx.score(SurveyGroup::LifeFunction) <= 40.0 {
                            7.1
                        } else {
                            11.3
                        }
                    } else {
                        match ctx.single("1-9") {
                            Some(STAND_UNAIDED) | Some(STAND_WITH_SUPPORT) => 7.7,
                            Some(_) => 5.8,
                            None => floor,
                        }
                    }
                }
                Some(_) => {
                    if ctx.score(SurveyGroup::LifeFunction) <= 69.7 {
                        match ctx.single("2-4") {
                            Some(INDEPENDENT) => 6.7,
                            Some(_) => {
                                if ctx.score(SurveyGroup::MentalBehavior) <= 74.4 {
                                    return 6.4;
                                }
                                match ctx.single("1-12") {
                                    Some(VISION_NORMAL) => {
                                        if ctx.score(SurveyGroup::MentalBehavior) <= 88.2 {
                                            4.9
                                        } else {
                                            3.6
                                        }
                                    }
                                    Some(_) => 5.7,
                                    None => floor,
                                }
                            }
                            None => floor,
                        }
                    } else {
                        8.2
                    }
                }
                None => floor,
            },
            None => floor,
        }
    }

    fn high_mental(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("2-1") {
            Some(INDEPENDENT) => match ctx.single("5-2") {
                Some(INDEPENDENT) | Some(PARTIAL_ASSIST) => match ctx.single("2-11") {
                    Some(INDEPENDENT) => {
                        if ctx.score(SurveyGroup::SocialAdaptation) <= 65.5 {
                            3.2
                        } else {
                            4.7
                        }
                    }
                    Some(_) => 5.1,
                    None => floor,
                },
                Some(_) => 2.7,
                None => floor,
            },
            Some(_) => {
                if ctx.score(SurveyGroup::CognitiveFunction) <= 51.0 {
                    return 3.6;
                }
                match ctx.single("2-7") {
                    Some(INDEPENDENT) | Some(PARTIAL_ASSIST) => {
                        if ctx.score(SurveyGroup::PhysicalFunction) <= 40.1 {
                            return 9.4;
                        }
                        match ctx.single("2-3") {
                            Some(CAN) => 4.5,
                            Some(_) => 7.8,
                            None => floor,
                        }
                    }
                    Some(_) => 4.6,
                    None => floor,
                }
            }
            None => floor,
        }
    }
}
