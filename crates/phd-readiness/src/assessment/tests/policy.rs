use super::common::{assert_close, baseline_submission, engine, strong_submission};
use crate::assessment::policy::compose_final;
use crate::assessment::{
    weighted_total, Dimension, GateStatus, SubScores, Verdict, WeightScheme,
};

fn uniform(score: f64) -> SubScores {
    SubScores {
        academic: score,
        proposal: score,
        experience: score,
        recommendation: score,
        interview: score,
    }
}

#[test]
fn every_scheme_sums_to_one() {
    for scheme in WeightScheme::ordered() {
        let weights = scheme.weights();
        assert_close(weights.sum(), 1.0);
        assert_close(weights.proposal + weights.experience, 0.50);
        assert_eq!(weights.weight(Dimension::Academic), 0.30);
        assert_eq!(weights.weight(Dimension::Recommendation), 0.12);
        assert_eq!(weights.weight(Dimension::Interview), 0.08);
    }
}

#[test]
fn weighted_total_adds_delta_and_clamps() {
    let weights = WeightScheme::Default.weights();
    assert_close(weighted_total(&uniform(7.0), &weights, 0.0), 7.0);
    assert_close(weighted_total(&uniform(7.0), &weights, 0.5), 7.5);
    assert_eq!(weighted_total(&uniform(10.0), &weights, 1.0), 10.0);
}

#[test]
fn verdict_tiers_are_inclusive_at_their_floors() {
    assert_eq!(Verdict::from_score(8.4), Verdict::HighlyCompetitive);
    assert_eq!(Verdict::from_score(8.39), Verdict::Competitive);
    assert_eq!(Verdict::from_score(7.4), Verdict::Competitive);
    assert_eq!(Verdict::from_score(7.39), Verdict::Borderline);
    assert_eq!(Verdict::from_score(6.9), Verdict::Borderline);
    assert_eq!(Verdict::from_score(6.89), Verdict::RecommendStrengthening);
    assert_eq!(Verdict::from_score(0.0), Verdict::RecommendStrengthening);
}

#[test]
fn failed_gate_withholds_the_score() {
    let weights = WeightScheme::Default.weights();
    let (score, verdict) = compose_final(GateStatus::Failed, &uniform(10.0), &weights, 1.0);
    assert_eq!(score, None);
    assert_eq!(verdict, Verdict::GateNotMet);
}

#[test]
fn engine_rates_strong_applicant_highly_competitive() {
    let report = engine().assess(strong_submission());

    assert_eq!(report.gate, GateStatus::Passed);
    assert_eq!(report.delta, 1.0);
    assert_eq!(report.final_score, Some(10.0));
    assert_eq!(report.verdict, Verdict::HighlyCompetitive);
}

#[test]
fn engine_rates_blank_form_as_needing_work() {
    let report = engine().assess(baseline_submission());

    assert_close(report.subscores.academic, 0.7 * 1.30);
    assert_eq!(report.subscores.proposal, 8.0);
    assert_eq!(report.subscores.experience, 0.0);
    assert_close(
        report.final_score.expect("evaluated"),
        0.30 * 0.91 + 0.30 * 8.0 + 0.12 * 8.0 + 0.08 * 8.0,
    );
    assert_eq!(report.verdict, Verdict::RecommendStrengthening);
}

#[test]
fn engine_ignores_every_input_when_gate_fails() {
    let mut submission = strong_submission();
    submission.english_gate_passed = false;

    let report = engine().assess(submission);

    assert_eq!(report.gate, GateStatus::Failed);
    assert_eq!(report.final_score, None);
    assert_eq!(report.verdict, Verdict::GateNotMet);
    assert_eq!(report.subscores.academic, 10.0);
}

#[test]
fn scheme_shifts_weight_between_proposal_and_experience() {
    let mut submission = baseline_submission();
    submission.proposal.innovation = Some(10.0);
    submission.proposal.feasibility = Some(10.0);

    submission.scheme = WeightScheme::Humanities;
    let humanities = engine().assess(submission.clone());
    submission.scheme = WeightScheme::Engineering;
    let engineering = engine().assess(submission);

    assert_eq!(humanities.weights, WeightScheme::Humanities.weights());
    assert!(
        humanities.final_score.expect("evaluated") > engineering.final_score.expect("evaluated")
    );
}

#[test]
fn components_break_down_the_weighted_sum() {
    let report = engine().assess(baseline_submission());

    let total: f64 = report
        .components
        .iter()
        .map(|component| component.contribution)
        .sum();
    let ordered: Vec<Dimension> = report
        .components
        .iter()
        .map(|component| component.dimension)
        .collect();

    assert_eq!(ordered, Dimension::ordered().to_vec());
    assert_close(total + report.delta, report.final_score.expect("evaluated"));
}
