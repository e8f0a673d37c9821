//! Readiness scoring pipeline.
//!
//! Data flows one way: a raw [`AssessmentSubmission`] passes the
//! [`InputGuard`], the resulting [`AssessmentProfile`] is mapped to five
//! sub-scores, those are combined under the active [`WeightScheme`], and the
//! final score yields a [`Verdict`] and ranked [`Suggestion`]s. Nothing is
//! cached between evaluations.

mod advice;
mod config;
pub mod domain;
mod intake;
mod policy;
pub mod prestige;
pub mod rules;
pub mod scales;
mod weights;

#[cfg(test)]
mod tests;

pub use advice::{Suggestion, LANGUAGE_REQUIREMENT_MESSAGE};
pub use config::RubricConfig;
pub use domain::{
    AdjustmentFlags, AssessmentProfile, AssessmentSubmission, DomesticTier, ExperienceRecord,
    ExperienceSubmission, GradeMethod, GradeRecord, GradeSubmission, InstitutionHistory,
    InstitutionSelection, PostgraduateClass, ProposalScores, ProposalSubmission, QsTier,
    RecommendationScores, RecommendationSubmission, RigorInput, RigorLevel, UndergraduateClass,
};
pub use intake::{InputGuard, SubmissionReadError};
pub use policy::{weighted_total, GateStatus, Verdict};
pub use weights::{WeightScheme, WeightVector};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The five scored dimensions of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Academic,
    Proposal,
    Experience,
    Recommendation,
    Interview,
}

impl Dimension {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Academic,
            Self::Proposal,
            Self::Experience,
            Self::Recommendation,
            Self::Interview,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Academic => "AG",
            Self::Proposal => "RP",
            Self::Experience => "RE",
            Self::Recommendation => "RL",
            Self::Interview => "PI",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Academic => "Academic background",
            Self::Proposal => "Research proposal",
            Self::Experience => "Research experience",
            Self::Recommendation => "Recommendation letters",
            Self::Interview => "Interview",
        }
    }

    pub const fn tip(self) -> &'static str {
        match self {
            Self::Academic => {
                "Raise your grades, take more rigorous coursework, and aim at institutions that match your background."
            }
            Self::Proposal => {
                "Sharpen the proposal: foreground the novelty, spell out methods and data, and tie it to the supervisor's agenda."
            }
            Self::Experience => {
                "Build research evidence: six or more months as an RA, submissions to good venues, stronger first-author work."
            }
            Self::Recommendation => {
                "Ask referees to state your percentile among peers and your independent contributions."
            }
            Self::Interview => {
                "Rehearse in-depth research questions, structured answers, and reasoning on the spot."
            }
        }
    }
}

/// Normalized 0-10 scores per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub academic: f64,
    pub proposal: f64,
    pub experience: f64,
    pub recommendation: f64,
    pub interview: f64,
}

impl SubScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Academic => self.academic,
            Dimension::Proposal => self.proposal,
            Dimension::Experience => self.experience,
            Dimension::Recommendation => self.recommendation,
            Dimension::Interview => self.interview,
        }
    }
}

/// Intermediate values behind the academic sub-score, exposed for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedScores {
    pub undergraduate_grade: Option<f64>,
    pub postgraduate_grade: Option<f64>,
    pub combined_grade: f64,
    pub source_prestige: Option<f64>,
    pub target_prestige: Option<f64>,
    pub relative_advantage: f64,
}

/// Discrete contribution of one dimension to the weighted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub dimension: Dimension,
    pub weight: f64,
    pub score: f64,
    pub contribution: f64,
}

/// Full output snapshot of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub gate: GateStatus,
    /// `None` when the language gate failed and the score is undetermined.
    pub final_score: Option<f64>,
    pub verdict: Verdict,
    pub subscores: SubScores,
    pub derived: DerivedScores,
    pub scheme: WeightScheme,
    pub weights: WeightVector,
    pub delta: f64,
    pub components: Vec<ScoreComponent>,
    pub suggestions: Vec<Suggestion>,
    /// Sanitized inputs the scores were computed from.
    pub profile: AssessmentProfile,
}

/// Stateless evaluator that applies the rubric to a profile.
#[derive(Debug, Clone, Default)]
pub struct ReadinessEngine {
    config: RubricConfig,
    guard: InputGuard,
}

impl ReadinessEngine {
    pub fn new(config: RubricConfig) -> Self {
        Self {
            config,
            guard: InputGuard,
        }
    }

    /// Sanitize a raw submission and evaluate it.
    pub fn assess(&self, submission: AssessmentSubmission) -> ReadinessReport {
        let profile = self.guard.profile_from_submission(submission);
        self.evaluate(&profile)
    }

    pub fn evaluate(&self, profile: &AssessmentProfile) -> ReadinessReport {
        let rules::ProfileScores {
            derived,
            subscores,
            delta,
        } = rules::score_profile(profile, &self.config);

        let gate = GateStatus::from_passed(profile.english_gate_passed);
        let weights = profile.scheme.weights();
        let (final_score, verdict) = policy::compose_final(gate, &subscores, &weights, delta);
        let suggestions = advice::rank_suggestions(gate, &subscores, &weights, &self.config);

        let components = Dimension::ordered()
            .into_iter()
            .map(|dimension| {
                let weight = weights.weight(dimension);
                let score = subscores.get(dimension);
                ScoreComponent {
                    dimension,
                    weight,
                    score,
                    contribution: weight * score,
                }
            })
            .collect();

        debug!(
            scheme = profile.scheme.id(),
            ?final_score,
            verdict = verdict.id(),
            delta,
            "readiness evaluated"
        );

        ReadinessReport {
            gate,
            final_score,
            verdict,
            subscores,
            derived,
            scheme: profile.scheme,
            weights,
            delta,
            components,
            suggestions,
            profile: profile.clone(),
        }
    }
}
