use clap::Args;
use phd_readiness::assessment::{
    AdjustmentFlags, AssessmentSubmission, DomesticTier, ExperienceSubmission, GradeSubmission,
    InstitutionHistory, InstitutionSelection, PostgraduateClass, ProposalSubmission, QsTier,
    RecommendationSubmission, RigorInput, RigorLevel, WeightScheme,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Weight scheme for the sample applicant (defaults to the configured scheme)
    #[arg(long, value_parser = crate::input::parse_scheme)]
    pub(crate) scheme: Option<WeightScheme>,
    /// Evaluate the sample applicant as if the English requirement were not met
    #[arg(long)]
    pub(crate) english_gate_failed: bool,
    /// Output format override (text or json)
    #[arg(long, value_parser = crate::input::parse_format)]
    pub(crate) format: Option<phd_readiness::config::OutputFormat>,
}

/// Sample applicant: solid grades from a 211 university, a modest publication
/// record, and a target one ranking band above their background.
pub(crate) fn demo_submission(scheme: WeightScheme, english_gate_passed: bool) -> AssessmentSubmission {
    AssessmentSubmission {
        english_gate_passed,
        scheme,
        undergraduate: GradeSubmission::percent(68.0),
        postgraduate: GradeSubmission::class(PostgraduateClass::Merit),
        institutions: InstitutionHistory {
            undergraduate: InstitutionSelection::domestic(DomesticTier::Project211),
            postgraduate: InstitutionSelection::qs(QsTier::Rank101To200),
            target: InstitutionSelection::qs(QsTier::Rank51To100),
        },
        rigor: Some(RigorInput::Level(RigorLevel::Moderate)),
        proposal: ProposalSubmission {
            innovation: Some(8.0),
            feasibility: Some(7.0),
            fit: Some(8.5),
            writing: Some(7.5),
        },
        experience: ExperienceSubmission {
            good_co_author: 2.0,
            ra_months: 4.0,
            awards: 1.0,
            ..ExperienceSubmission::default()
        },
        recommendations: RecommendationSubmission {
            first: Some(8.0),
            second: Some(7.5),
        },
        interview: Some(7.0),
        adjustments: AdjustmentFlags {
            external_funding: false,
            supervisor_intent: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phd_readiness::assessment::{Dimension, ReadinessEngine, Suggestion, Verdict};

    #[test]
    fn sample_applicant_is_borderline() {
        let report = ReadinessEngine::default().assess(demo_submission(WeightScheme::Default, true));

        assert_eq!(report.verdict, Verdict::Borderline);
        assert_eq!(report.delta, 0.0);
        assert!(report.derived.relative_advantage < 0.0);
        match &report.suggestions[0] {
            Suggestion::Improve { dimension, gain, .. } => {
                assert_eq!(*dimension, Dimension::Experience);
                assert_eq!(*gain, 0.8);
            }
            other => panic!("expected improvement advice, got {other:?}"),
        }
    }

    #[test]
    fn sample_applicant_respects_the_gate_flag() {
        let report =
            ReadinessEngine::default().assess(demo_submission(WeightScheme::Humanities, false));

        assert_eq!(report.verdict, Verdict::GateNotMet);
        assert_eq!(report.final_score, None);
        assert_eq!(report.scheme, WeightScheme::Humanities);
    }
}
