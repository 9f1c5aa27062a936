use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use caretime::assessment::{
    AnswerMap, AnswerValue, AssessmentEngine, AssessmentOutcome, CareCategory, QuestionId,
};
use caretime::error::AppError;
use chrono::{DateTime, Local};
use clap::Args;
use serde::Serialize;

use crate::infra::StandardAnswerCatalog;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding the survey answer map
    pub(crate) file: PathBuf,
    /// Print the outcome as a single line instead of pretty JSON
    #[arg(long)]
    pub(crate) compact: bool,
}

#[derive(Serialize)]
struct EvaluationReport {
    evaluated_at: DateTime<Local>,
    #[serde(flatten)]
    outcome: AssessmentOutcome,
}

fn invalid_json(err: serde_json::Error) -> AppError {
    AppError::Io(std::io::Error::new(ErrorKind::InvalidData, err))
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let answers: AnswerMap = serde_json::from_str(&raw).map_err(invalid_json)?;

    let engine = AssessmentEngine::new(Arc::new(StandardAnswerCatalog));
    let outcome = engine.evaluate(&answers)?;

    let report = EvaluationReport {
        evaluated_at: Local::now(),
        outcome,
    };
    let rendered = if args.compact {
        serde_json::to_string(&report).map_err(invalid_json)?
    } else {
        serde_json::to_string_pretty(&report).map_err(invalid_json)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let engine = AssessmentEngine::new(Arc::new(StandardAnswerCatalog));

    println!("Care assessment demo");
    for (name, survey) in [
        ("mostly independent respondent", independent_survey()),
        ("heavily assisted respondent", heavy_care_survey()),
    ] {
        let outcome = engine.evaluate(&survey)?;
        println!("\n{name}");
        println!(
            "- total {} minutes/day -> {}",
            outcome.total_minutes,
            outcome.care_level.label()
        );
        for category in CareCategory::ALL {
            println!(
                "  - {}: {:.1} min",
                category.label(),
                outcome.category_times.get(category)
            );
        }
    }

    Ok(())
}

fn survey(singles: &[(&str, &str)], multis: &[(&str, &[&str])]) -> AnswerMap {
    let mut map: AnswerMap = singles
        .iter()
        .map(|(question, option)| (QuestionId::from(*question), AnswerValue::single(*option)))
        .collect();
    for (question, options) in multis {
        map.insert(
            QuestionId::from(*question),
            AnswerValue::multi(options.iter().copied()),
        );
    }
    map
}

fn independent_survey() -> AnswerMap {
    survey(
        &[
            ("1-3", "つかまらないでできる"),
            ("1-6", "支えなしでできる"),
            ("1-12", "普通（日常生活に支障がない）"),
            ("1-13", "普通"),
            ("2-1", "自立（介助なし）"),
            ("2-2", "自立（介助なし）"),
            ("2-3", "できる"),
            ("2-4", "自立（介助なし）"),
            ("2-5", "自立（介助なし）"),
            ("2-6", "自立（介助なし）"),
            ("2-7", "自立（介助なし）"),
            ("2-11", "自立（介助なし）"),
            ("2-12", "週1回以上"),
            ("3-1", "調査対象者が意思を他者に伝達できる"),
            ("3-4", "できる"),
            ("3-5", "できる"),
            ("3-7", "できる"),
            ("4-1", "ない"),
            ("4-2", "ない"),
            ("4-3", "ない"),
            ("5-3", "できる"),
            ("5-6", "自立（介助なし）"),
        ],
        &[],
    )
}

fn heavy_care_survey() -> AnswerMap {
    survey(
        &[
            ("1-4", "できない"),
            ("1-7", "できない"),
            ("1-12", "ほとんど見えない"),
            ("2-1", "全介助"),
            ("2-2", "全介助"),
            ("2-3", "できない"),
            ("2-4", "全介助"),
            ("2-6", "全介助"),
            ("2-7", "全介助"),
            ("2-11", "全介助"),
            ("2-12", "ほとんど外出しない"),
            ("3-1", "ほとんど伝達できない"),
            ("3-5", "できない"),
            ("3-7", "できない"),
            ("3-9", "ある"),
            ("4-1", "ある"),
            ("4-2", "ある"),
            ("5-3", "できない"),
            ("5-4", "ある"),
            ("5-6", "全介助"),
        ],
        &[
            ("1-1", &["その他の四肢の麻痺"]),
            ("6-1", &["経管栄養"]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use caretime::assessment::CareLevel;

    #[test]
    fn heavy_care_survey_outranks_the_independent_one() {
        let engine = AssessmentEngine::new(Arc::new(StandardAnswerCatalog));

        let independent = engine
            .evaluate(&independent_survey())
            .expect("evaluates");
        let heavy = engine.evaluate(&heavy_care_survey()).expect("evaluates");

        assert!(heavy.total_minutes > independent.total_minutes);
        assert!(heavy.care_level > independent.care_level);
        assert_eq!(heavy.care_level, CareLevel::Care5);
    }
}
