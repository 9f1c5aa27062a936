use super::CategoryCalculator;
use crate::assessment::context::EvaluationContext;
use crate::assessment::domain::{CareCategory, SurveyGroup};
use crate::assessment::options::*;

/// Additive minutes for each special medical procedure reported under the
/// items 6-1 and 6-2. Selections across both items all count; the same
/// procedure reported twice counts twice.
const SPECIAL_CARE_MINUTES: [(&str, f64); 12] = [
    ("点滴の管理", 8.5),
    ("中心静脈栄養", 8.5),
    ("透析", 8.5),
    ("ストーマ（人工肛門）の処置", 3.8),
    ("酸素療法", 0.8),
    ("レスピレーター（人工呼吸器）", 4.5),
    ("気管切開の処置", 5.6),
    ("疼痛の看護", 2.1),
    ("経管栄養", 9.1),
    ("モニター測定（血圧・心拍・酸素飽和度等）", 3.6),
    ("じょくそうの処置", 4.0),
    ("カテーテル（コンドームカテーテル・留置カテーテル・ウロストーマ等）", 8.2),
];

/// Minutes of medically related care: a base estimate from the rule tree
/// plus fixed extras per reported special procedure.
pub(crate) struct MedicalCalculator;

impl CategoryCalculator for MedicalCalculator {
    fn category(&self) -> CareCategory {
        CareCategory::Medical
    }

    fn calculate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        self.base_minutes(ctx) + special_procedure_minutes(ctx)
    }
}

fn special_procedure_minutes(ctx: &EvaluationContext<'_>) -> f64 {
    ["6-1", "6-2"]
        .into_iter()
        .flat_map(|question| ctx.selections(question))
        .filter_map(|selection| {
            SPECIAL_CARE_MINUTES
                .iter()
                .find(|(label, _)| *label == selection)
                .map(|(_, minutes)| *minutes)
        })
        .sum()
}

impl MedicalCalculator {
    fn base_minutes(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let floor = self.floor();
        match ctx.single("2-3") {
            Some(CAN) | Some(WATCHED) => self.swallows(ctx, floor),
            Some(_) => self.cannot_swallow(ctx, floor),
            None => floor,
        }
    }

    fn swallows(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("2-2") {
            Some(INDEPENDENT) | Some(WATCHED) => self.moves_unassisted(ctx, floor),
            Some(_) => self.moves_assisted(ctx, floor),
            None => floor,
        }
    }

    fn moves_unassisted(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("2-1") {
            Some(INDEPENDENT) => match ctx.single("1-8") {
                Some(ROLL_UNAIDED) => 1.0,
                Some(_) => match ctx.single("2-12") {
                    Some(OUTING_WEEKLY) | Some(OUTING_MONTHLY) => 4.2,
                    Some(_) => {
                        if ctx.score(SurveyGroup::SocialAdaptation) <= 19.5 {
                            3.3
                        } else {
                            2.0
                        }
                    }
                    None => floor,
                },
                None => floor,
            },
            Some(_) => {
                if ctx.score(SurveyGroup::MentalBehavior) <= 66.8 {
                    return 6.0;
                }
                match ctx.single("3-7") {
                    Some(CAN) => {
                        if ctx.score(SurveyGroup::PhysicalFunction) <= 76.0 {
                            if ctx.score(SurveyGroup::LifeFunction) <= 72.2 {
                                4.5
                            } else {
                                3.2
                            }
                        } else {
                            5.9
                        }
                    }
                    Some(_) => 2.6,
                    None => floor,
                }
            }
            None => floor,
        }
    }

    fn moves_assisted(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("1-7") {
            Some(ROLL_UNAIDED) | Some(ROLL_WITH_SUPPORT) => {
                if ctx.score(SurveyGroup::CognitiveFunction) <= 52.7 {
                    return 3.0;
                }
                match ctx.single("1-9") {
                    Some(STAND_UNAIDED) | Some(STAND_WITH_SUPPORT) => 4.4,
                    Some(_) => 7.4,
                    None => floor,
                }
            }
            Some(_) => {
                if ctx.none_selected("1-1") {
                    self.without_paralysis(ctx, floor)
                } else {
                    self.with_paralysis(ctx, floor)
                }
            }
            None => floor,
        }
    }

    fn without_paralysis(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("3-1") {
            Some(COMMUNICATES) | Some(COMMUNICATES_SOMETIMES) => {
                if ctx.score(SurveyGroup::LifeFunction) <= 26.0 {
                    14.8
                } else {
                    10.1
                }
            }
            Some(_) => 7.0,
            None => floor,
        }
    }

    fn with_paralysis(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        if ctx.score(SurveyGroup::PhysicalFunction) <= 16.4 {
            return 8.3;
        }
        match ctx.single("3-2") {
            Some(CAN) => {
                if ctx.score(SurveyGroup::LifeFunction) <= 41.5 {
                    9.2
                } else {
                    5.1
                }
            }
            Some(_) => match ctx.single("3-5") {
                Some(CAN) => match ctx.single("2-4") {
                    Some(INDEPENDENT) | Some(WATCHED) | Some(PARTIAL_ASSIST) => {
                        let mental = ctx.score(SurveyGroup::MentalBehavior);
                        if mental <= 97.3 {
                            if mental <= 84.6 {
                                3.9
                            } else {
                                5.3
                            }
                        } else {
                            2.9
                        }
                    }
                    Some(_) => 6.1,
                    None => floor,
                },
                Some(_) => 6.5,
                None => floor,
            },
            None => floor,
        }
    }

    fn cannot_swallow(&self, ctx: &EvaluationContext<'_>, floor: f64) -> f64 {
        match ctx.single("1-12") {
            Some(VISION_NORMAL) | Some(VISION_ONE_METER) => {
                if ctx.score(SurveyGroup::MentalBehavior) <= 95.8 {
                    28.0
                } else {
                    29.0
                }
            }
            Some(_) => {
                let physical = ctx.score(SurveyGroup::PhysicalFunction);
                if physical <= 10.1 {
                    if physical <= 0.5 {
                        32.0
                    } else {
                        33.7
                    }
                } else {
                    37.2
                }
            }
            None => floor,
        }
    }
}
