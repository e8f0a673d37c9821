use serde::{Deserialize, Serialize};

use super::scales::clamp_score;
use super::weights::WeightVector;
use super::{Dimension, SubScores};

const HIGHLY_COMPETITIVE_FLOOR: f64 = 8.4;
const COMPETITIVE_FLOOR: f64 = 7.4;
const BORDERLINE_FLOOR: f64 = 6.9;

/// Outcome of the language proficiency precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    Passed,
    Failed,
}

impl GateStatus {
    pub const fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Qualitative readiness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    HighlyCompetitive,
    Competitive,
    Borderline,
    RecommendStrengthening,
    GateNotMet,
}

impl Verdict {
    /// Tier for an evaluated score. `GateNotMet` is never produced here.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGHLY_COMPETITIVE_FLOOR {
            Self::HighlyCompetitive
        } else if score >= COMPETITIVE_FLOOR {
            Self::Competitive
        } else if score >= BORDERLINE_FLOOR {
            Self::Borderline
        } else {
            Self::RecommendStrengthening
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::HighlyCompetitive => "highly_competitive",
            Self::Competitive => "competitive",
            Self::Borderline => "borderline",
            Self::RecommendStrengthening => "recommend_strengthening",
            Self::GateNotMet => "gate_not_met",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyCompetitive => "highly competitive",
            Self::Competitive => "competitive",
            Self::Borderline => "borderline, match-dependent",
            Self::RecommendStrengthening => "recommend strengthening",
            Self::GateNotMet => "gate not met",
        }
    }
}

/// Weighted sum of the five sub-scores plus the adjustment delta, clamped to 0-10.
pub fn weighted_total(subscores: &SubScores, weights: &WeightVector, delta: f64) -> f64 {
    let weighted: f64 = Dimension::ordered()
        .into_iter()
        .map(|dimension| weights.weight(dimension) * subscores.get(dimension))
        .sum();
    clamp_score(weighted + delta)
}

/// Final score and verdict. A failed gate withholds the score entirely.
pub(crate) fn compose_final(
    gate: GateStatus,
    subscores: &SubScores,
    weights: &WeightVector,
    delta: f64,
) -> (Option<f64>, Verdict) {
    match gate {
        GateStatus::Failed => (None, Verdict::GateNotMet),
        GateStatus::Passed => {
            let score = weighted_total(subscores, weights, delta);
            (Some(score), Verdict::from_score(score))
        }
    }
}
