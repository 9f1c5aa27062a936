use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use caretime::assessment::{AnswerCatalog, AnswerValue, QuestionId, QuestionType};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog over the standard 74-item certification survey with provisional
/// option weights. Each scale rewards independence, so heavily assisted
/// respondents accumulate low group scores and high care minutes.
///
/// TODO: replace the provisional weights with the published national score
/// sheet once it has been transcribed.
#[derive(Default, Clone)]
pub(crate) struct StandardAnswerCatalog;

const MULTI_CHOICE_ITEMS: [&str; 4] = ["1-1", "1-2", "6-1", "6-2"];

fn assistance_weight(option: &str) -> Option<f64> {
    match option {
        "自立（介助なし）" => Some(8.0),
        "見守り等" => Some(5.5),
        "一部介助" => Some(2.5),
        "全介助" => Some(0.0),
        _ => None,
    }
}

fn rolling_weight(option: &str) -> Option<f64> {
    match option {
        "つかまらないでできる" => Some(7.5),
        "何かにつかまればできる" => Some(4.0),
        "できない" => Some(0.0),
        _ => None,
    }
}

fn standing_weight(option: &str) -> Option<f64> {
    match option {
        "支えなしでできる" => Some(7.5),
        "何か支えがあればできる" => Some(4.0),
        "できない" => Some(0.0),
        _ => None,
    }
}

fn ability_weight(option: &str) -> Option<f64> {
    match option {
        "できる" => Some(7.5),
        "見守り等" => Some(4.0),
        "できない" => Some(0.0),
        _ => None,
    }
}

fn vision_weight(option: &str) -> Option<f64> {
    match option {
        "普通（日常生活に支障がない）" => Some(7.5),
        "約1m離れた視力確認表の図が見える" => Some(4.0),
        "ほとんど見えない" => Some(0.0),
        _ => None,
    }
}

fn hearing_weight(option: &str) -> Option<f64> {
    match option {
        "普通" => Some(7.5),
        "普通の声がやっと聴き取れる" => Some(4.0),
        "ほとんど聞こえない" => Some(0.0),
        _ => None,
    }
}

fn outing_weight(option: &str) -> Option<f64> {
    match option {
        "週1回以上" => Some(8.0),
        "月1回以上" => Some(5.5),
        "ほとんど外出しない" => Some(0.0),
        _ => None,
    }
}

fn communication_weight(option: &str) -> Option<f64> {
    match option {
        "調査対象者が意思を他者に伝達できる" => Some(11.0),
        "ときどき伝達できる" => Some(5.5),
        "ほとんど伝達できない" => Some(0.0),
        _ => None,
    }
}

fn cognition_weight(option: &str) -> Option<f64> {
    match option {
        "できる" => Some(11.0),
        "できない" => Some(0.0),
        _ => None,
    }
}

fn symptom_weight(option: &str) -> Option<f64> {
    match option {
        "ない" => Some(6.6),
        "ときどきある" => Some(3.3),
        "ある" => Some(0.0),
        _ => None,
    }
}

fn social_weight(option: &str) -> Option<f64> {
    match option {
        "自立（介助なし）" => Some(16.5),
        "見守り等" => Some(11.0),
        "一部介助" => Some(5.5),
        "全介助" => Some(0.0),
        _ => None,
    }
}

fn decision_weight(option: &str) -> Option<f64> {
    match option {
        "できる" => Some(16.5),
        "特別な場合を除いてできる" => Some(11.0),
        "日常的に困難" => Some(5.5),
        "できない" => Some(0.0),
        _ => None,
    }
}

fn option_weight(question: &QuestionId, option: &str) -> Option<f64> {
    let (group, _) = question.group_index()?;
    match question.0.as_str() {
        // paralysis and contracture selections carry no independence score
        "1-1" | "1-2" => None,
        "1-3" | "1-7" | "1-8" => rolling_weight(option),
        "1-6" | "1-9" => standing_weight(option),
        "1-12" => vision_weight(option),
        "1-13" => hearing_weight(option),
        "1-4" | "1-5" | "1-10" | "1-11" => ability_weight(option),
        "2-3" => ability_weight(option),
        "2-12" => outing_weight(option),
        "3-1" => communication_weight(option),
        "5-3" => decision_weight(option),
        "5-4" => symptom_weight(option),
        _ => match group {
            2 => assistance_weight(option),
            3 => cognition_weight(option),
            4 => symptom_weight(option),
            5 => social_weight(option),
            _ => None,
        },
    }
}

impl AnswerCatalog for StandardAnswerCatalog {
    fn intermediate_score(&self, question: &QuestionId, answer: &AnswerValue) -> Option<f64> {
        match answer {
            AnswerValue::Single(option) => option_weight(question, option),
            AnswerValue::Multi(options) => {
                let weights: Vec<f64> = options
                    .iter()
                    .filter_map(|option| option_weight(question, option))
                    .collect();
                if weights.is_empty() {
                    None
                } else {
                    Some(weights.iter().sum())
                }
            }
        }
    }

    fn question_type(&self, question: &QuestionId) -> Option<QuestionType> {
        question.group_index()?;
        if MULTI_CHOICE_ITEMS.contains(&question.0.as_str()) {
            Some(QuestionType::Multi)
        } else {
            Some(QuestionType::Single)
        }
    }
}
