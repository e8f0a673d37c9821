use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::config::RubricConfig;
use super::policy::GateStatus;
use super::weights::WeightVector;
use super::{Dimension, SubScores};

pub const LANGUAGE_REQUIREMENT_MESSAGE: &str = "Meet the English language requirement first \
(IELTS/TOEFL overall and component minimums); applications below it are usually not sent to \
academic review.";

/// One line of improvement advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    Improve {
        dimension: Dimension,
        /// Weighted score gain from lifting this dimension to the target, two decimals.
        gain: f64,
        tip: String,
    },
    SatisfyLanguageRequirement {
        message: String,
    },
}

impl Suggestion {
    pub fn summary(&self) -> String {
        match self {
            Suggestion::Improve {
                dimension,
                gain,
                tip,
            } => format!(
                "{} ({}): estimated gain {:.2}. {}",
                dimension.label(),
                dimension.code(),
                gain,
                tip
            ),
            Suggestion::SatisfyLanguageRequirement { message } => message.clone(),
        }
    }
}

/// Rank dimensions by weighted headroom to the target score.
///
/// Ordering uses the signed gap so dimensions already above target still sort
/// deterministically; the reported gain never goes below zero.
pub(crate) fn rank_suggestions(
    gate: GateStatus,
    subscores: &SubScores,
    weights: &WeightVector,
    config: &RubricConfig,
) -> Vec<Suggestion> {
    if !gate.is_passed() {
        return vec![Suggestion::SatisfyLanguageRequirement {
            message: LANGUAGE_REQUIREMENT_MESSAGE.to_string(),
        }];
    }

    let mut gaps: Vec<(Dimension, f64)> = Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let gap = (config.suggestion_target - subscores.get(dimension))
                * weights.weight(dimension);
            (dimension, gap)
        })
        .collect();

    // Stable sort keeps canonical dimension order among equal gaps.
    gaps.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    gaps.into_iter()
        .take(config.suggestion_limit)
        .map(|(dimension, gap)| Suggestion::Improve {
            dimension,
            gain: round_to_cents(gap.max(0.0)),
            tip: dimension.tip().to_string(),
        })
        .collect()
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
