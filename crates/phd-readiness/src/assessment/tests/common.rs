use crate::assessment::domain::{
    AdjustmentFlags, AssessmentSubmission, DomesticTier, ExperienceSubmission, GradeSubmission,
    InstitutionHistory, InstitutionSelection, PostgraduateClass, ProposalSubmission, QsTier,
    RecommendationSubmission, RigorInput, RigorLevel, UndergraduateClass,
};
use crate::assessment::{ReadinessEngine, RubricConfig};

const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn engine() -> ReadinessEngine {
    ReadinessEngine::new(RubricConfig::standard())
}

/// Untouched self-assessment form: no grades or institutions, sliders at 8.
pub(super) fn baseline_submission() -> AssessmentSubmission {
    AssessmentSubmission::form_defaults()
}

/// Applicant from a top programme applying one band down, with a full record.
pub(super) fn strong_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        undergraduate: GradeSubmission::class(UndergraduateClass::First),
        postgraduate: GradeSubmission::class(PostgraduateClass::Distinction),
        institutions: InstitutionHistory {
            undergraduate: InstitutionSelection {
                qs: Some(QsTier::Top10),
                domestic: Some(DomesticTier::C9),
            },
            postgraduate: InstitutionSelection::qs(QsTier::Rank11To20),
            target: InstitutionSelection::qs(QsTier::Rank51To100),
        },
        rigor: Some(RigorInput::Level(RigorLevel::Intensive)),
        proposal: ProposalSubmission {
            innovation: Some(9.0),
            feasibility: Some(9.0),
            fit: Some(9.0),
            writing: Some(9.0),
        },
        experience: ExperienceSubmission {
            top_first_author: 1.0,
            good_first_author: 1.0,
            thesis_honours: true,
            ra_months: 6.0,
            awards: 1.0,
            ..ExperienceSubmission::default()
        },
        recommendations: RecommendationSubmission {
            first: Some(9.0),
            second: Some(9.0),
        },
        interview: Some(9.0),
        adjustments: AdjustmentFlags {
            external_funding: true,
            supervisor_intent: true,
        },
        ..AssessmentSubmission::default()
    }
}
