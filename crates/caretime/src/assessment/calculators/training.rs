use super::CategoryCalculator;
use crate::assessment::context::EvaluationContext;
use crate::assessment::domain::{CareCategory, SurveyGroup};
use crate::assessment::options::*;

/// Coarse paralysis classification from the multi-choice item 1-1,
/// severest selection first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paralysis {
    None,
    OneLimb,
    BothLegs,
    OneSide,
    AllLimbs,
}

fn paralysis_class(ctx: &EvaluationContext<'_>) -> Paralysis {
    if ctx.none_selected("1-1") {
        Paralysis::None
    } else if ctx.selected("1-1", PARALYSIS_ALL_LIMBS) {
        Paralysis::AllLimbs
    } else if ctx.selected("1-1", PARALYSIS_ONE_SIDE) {
        Paralysis::OneSide
    } else if ctx.selected("1-1", PARALYSIS_BOTH_LEGS) {
        Paralysis::BothLegs
    } else if ctx.selected("1-1", PARALYSIS_ONE_LIMB) {
        Paralysis::OneLimb
    } else {
        // Unrecognized selections are conservatively treated as severe.
        Paralysis::AllLimbs
    }
}

/// Minutes of rehabilitation and functional-training support.
pub(crate) struct FunctionalTrainingCalculator;

impl CategoryCalculator for FunctionalTrainingCalculator {
    fn category(&self) -> CareCategory {
        CareCategory::FunctionalTraining
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let floor = self.floor();
        match ctx.single("3-7") {
            Some(CAN) => self.states_own_place(ctx, floor),
            Some(_) => self.cannot_state_place(ctx, floor),
            None => floor,
        }
    }
}

impl FunctionalTrainingCalculator {
    fn states_own_place(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        if !ctx.selected("1-2", CONTRACTURE_SHOULDER) {
            if ctx.score(SurveyGroup::PhysicalFunction) <= 80.4 {
                match paralysis_class(ctx) {
                    Paralysis::None | Paralysis::OneLimb => {
                        if ctx.score(SurveyGroup::MentalBehavior) <= 99.5 {
                            if ctx.score(SurveyGroup::LifeFunction) <= 64.2 {
                                8.9
                            } else {
                                6.1
                            }
                        } else {
                            10.5
                        }
                    }
                    _ => {
                        if ctx.score(SurveyGroup::SocialAdaptation) <= 21.3 {
                            7.7
                        } else if ctx.score(SurveyGroup::LifeFunction) <= 72.9 {
                            if ctx.score(SurveyGroup::MentalBehavior) <= 97.3 {
                                2.0
                            } else {
                                4.0
                            }
                        } else {
                            7.1
                        }
                    }
                }
            } else if ctx.score(SurveyGroup::MentalBehavior) <= 90.8 {
                2.2
            } else {
                match ctx.single("1-11") {
                    Some(INDEPENDENT) | Some(PARTIAL_ASSIST) => 6.1,
                    Some(_) => 4.5,
                    None => floor,
                }
            }
        } else if ctx.score(SurveyGroup::LifeFunction) <= 35.6 {
            15.4
        } else {
            match ctx.single("5-3") {
                Some(CAN) => match ctx.single("2-5") {
                    Some(INDEPENDENT) | Some(WATCHED) => 7.6,
                    Some(_) => 6.0,
                    None => floor,
                },
                Some(_) => 10.4,
                None => floor,
            }
        }
    }

    fn cannot_state_place(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        let class = paralysis_class(ctx);
        match class {
            Paralysis::None | Paralysis::OneLimb | Paralysis::BothLegs => {
                match ctx.single("2-3") {
                    Some(CAN) => self.swallows_freely(ctx, floor, class),
                    Some(WATCHED) => self.swallows_watched(ctx, floor, class),
                    Some(_) => 7.0,
                    None => floor,
                }
            }
            Paralysis::OneSide => match ctx.single("5-3") {
                Some(CAN) | Some(DECIDES_EXCEPT_SPECIAL) | Some(DECIDES_WITH_DIFFICULTY) => 4.6,
                Some(_) => 11.6,
                None => floor,
            },
            Paralysis::AllLimbs => match ctx.single("5-4") {
                Some(ABSENT) => {
                    if ctx.score(SurveyGroup::PhysicalFunction) <= 28.5 {
                        match ctx.single("1-12") {
                            Some(VISION_NORMAL) => {
                                if ctx.score(SurveyGroup::MentalBehavior) <= 96.7 {
                                    1.9
                                } else {
                                    3.3
                                }
                            }
                            Some(_) => {
                                if ctx.score(SurveyGroup::LifeFunction) <= 5.2 {
                                    if ctx.score(SurveyGroup::PhysicalFunction) <= 1.6 {
                                        2.5
                                    } else {
                                        3.2
                                    }
                                } else {
                                    6.5
                                }
                            }
                            None => floor,
                        }
                    } else {
                        7.8
                    }
                }
                Some(_) => 7.8,
                None => floor,
            },
        }
    }

    fn swallows_freely(&self, ctx: &EvaluationContext<'_>, floor: f64, class: Paralysis) -> f64 {
        if ctx.score(SurveyGroup::CognitiveFunction) <= 37.6 {
            return if ctx.score(SurveyGroup::MentalBehavior) <= 88.4 {
                2.0
            } else {
                4.6
            };
        }
        match ctx.single("5-1") {
            Some(INDEPENDENT) | Some(PARTIAL_ASSIST) => {
                if ctx.score(SurveyGroup::CognitiveFunction) <= 54.1 {
                    1.1
                } else {
                    4.1
                }
            }
            Some(_) => match ctx.single("5-4") {
                Some(ABSENT) => match class {
                    Paralysis::None | Paralysis::OneLimb => match ctx.single("2-1") {
                        Some(INDEPENDENT) | Some(WATCHED) => 5.1,
                        Some(_) => 10.5,
                        None => floor,
                    },
                    _ => 4.6,
                },
                Some(_) => 3.9,
                None => floor,
            },
            None => floor,
        }
    }

    fn swallows_watched(&self, ctx: &EvaluationContext<'_>, floor: f64, class: Paralysis) -> f64 {
        match ctx.single("5-3") {
            Some(decision @ (CAN | DECIDES_EXCEPT_SPECIAL | DECIDES_WITH_DIFFICULTY)) => {
                match ctx.single("3-1") {
                    Some(COMMUNICATES) | Some(COMMUNICATES_SOMETIMES)
                    | Some(COMMUNICATES_RARELY) => match decision {
                        CAN | DECIDES_EXCEPT_SPECIAL => 1.6,
                        _ => 3.9,
                    },
                    Some(_) => floor,
                    None => floor,
                }
            }
            Some(_) => match class {
                Paralysis::AllLimbs => 5.7,
                _ => {
                    if ctx.score(SurveyGroup::MentalBehavior) <= 91.2 {
                        2.5
                    } else {
                        4.6
                    }
                }
            },
            None => floor,
        }
    }
}
