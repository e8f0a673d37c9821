//! End-to-end scenarios driving the readiness engine through its public JSON boundary.

use phd_readiness::assessment::{
    AssessmentSubmission, Dimension, GateStatus, ReadinessEngine, RubricConfig, Suggestion,
    Verdict, WeightScheme,
};
use serde_json::Value;

fn engine() -> ReadinessEngine {
    ReadinessEngine::new(RubricConfig::standard())
}

const COMPETITIVE_APPLICANT: &str = r#"{
    "scheme": "default",
    "undergraduate": { "method": "class", "class": "upper_second" },
    "postgraduate": { "method": "percent", "percent": 70 },
    "institutions": {
        "undergraduate": { "domestic": "cn_985" },
        "target": { "qs": "qs_101_200" }
    },
    "rigor": "moderate",
    "proposal": { "innovation": 8, "feasibility": 8, "fit": 8, "writing": 8 },
    "experience": { "good_first_author": 1, "ra_months": 6, "awards": 1 },
    "recommendations": { "first": 8, "second": 8 },
    "interview": 8
}"#;

#[test]
fn json_submission_produces_complete_report() {
    let submission = AssessmentSubmission::from_json(COMPETITIVE_APPLICANT).expect("valid input");

    let report = engine().assess(submission);

    // combined grade 0.4 * 8.0 + 0.6 * 9.0 = 8.6; source prestige 8.0 equals target.
    let academic = (0.55 * 8.6 + 0.25 * 8.0 + 0.10 * 7.0) * 1.30;
    assert!((report.subscores.academic - academic).abs() < 1e-9);
    assert_eq!(report.subscores.experience, 6.0);
    assert_eq!(report.delta, 0.0);

    let expected = 0.30 * academic + 0.30 * 8.0 + 0.20 * 6.0 + 0.12 * 8.0 + 0.08 * 8.0;
    let score = report.final_score.expect("gate passed");
    assert!((score - expected).abs() < 1e-9);
    assert_eq!(report.verdict, Verdict::Competitive);
    assert_eq!(report.suggestions.len(), 3);
    assert!(matches!(
        report.suggestions[0],
        Suggestion::Improve {
            dimension: Dimension::Experience,
            ..
        }
    ));
}

#[test]
fn report_serializes_undetermined_score_as_null() {
    let mut submission =
        AssessmentSubmission::from_json(COMPETITIVE_APPLICANT).expect("valid input");
    submission.english_gate_passed = false;

    let report = engine().assess(submission);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(report.gate, GateStatus::Failed);
    assert_eq!(json["final_score"], Value::Null);
    assert_eq!(json["verdict"], "gate_not_met");
    assert_eq!(json["suggestions"][0]["kind"], "satisfy_language_requirement");
    assert_eq!(json["suggestions"].as_array().map(Vec::len), Some(1));
}

#[test]
fn adversarial_input_stays_on_scale() {
    let raw = r#"{
        "undergraduate": { "method": "percent", "percent": 1000 },
        "postgraduate": { "method": "percent", "percent": -40 },
        "rigor": 99,
        "proposal": { "innovation": 50, "feasibility": -50, "fit": 1e9, "writing": 10 },
        "experience": { "top_first_author": 1000000, "awards": -3, "ra_months": -1 },
        "recommendations": { "first": -10, "second": 40 },
        "interview": 1e300,
        "adjustments": { "external_funding": true, "supervisor_intent": true }
    }"#;
    let submission = AssessmentSubmission::from_json(raw).expect("valid json");

    let report = engine().assess(submission);

    for dimension in Dimension::ordered() {
        let score = report.subscores.get(dimension);
        assert!((0.0..=10.0).contains(&score), "{dimension:?} out of range: {score}");
    }
    let final_score = report.final_score.expect("gate passed");
    assert!((0.0..=10.0).contains(&final_score));
}

#[test]
fn form_defaults_round_trip_through_json() {
    let defaults = AssessmentSubmission::form_defaults();
    let json = serde_json::to_string(&defaults).expect("serializes");
    let parsed = AssessmentSubmission::from_json(&json).expect("parses");

    assert_eq!(parsed, defaults);
    assert_eq!(parsed.scheme, WeightScheme::Default);
}
