use serde::{Deserialize, Serialize};

use super::Dimension;

/// Discipline profile selecting one of the fixed weight vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightScheme {
    /// Science and computing programmes.
    #[default]
    Default,
    /// Applied engineering programmes; experience outweighs the proposal.
    Engineering,
    /// Humanities and social sciences; the proposal dominates.
    Humanities,
}

impl WeightScheme {
    pub const fn ordered() -> [Self; 3] {
        [Self::Default, Self::Engineering, Self::Humanities]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Engineering => "engineering",
            Self::Humanities => "humanities",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default (science / CS)",
            Self::Engineering => "Applied engineering",
            Self::Humanities => "Humanities & social sciences",
        }
    }

    /// Parse a scheme id as used in configuration and on the command line.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "default" | "stem" | "cs" => Some(Self::Default),
            "engineering" => Some(Self::Engineering),
            "humanities" => Some(Self::Humanities),
            _ => None,
        }
    }

    /// Proposal and experience trade off against each other; they always share 0.50.
    pub const fn weights(self) -> WeightVector {
        match self {
            Self::Default => WeightVector {
                academic: 0.30,
                proposal: 0.30,
                experience: 0.20,
                recommendation: 0.12,
                interview: 0.08,
            },
            Self::Engineering => WeightVector {
                academic: 0.30,
                proposal: 0.25,
                experience: 0.25,
                recommendation: 0.12,
                interview: 0.08,
            },
            Self::Humanities => WeightVector {
                academic: 0.30,
                proposal: 0.35,
                experience: 0.15,
                recommendation: 0.12,
                interview: 0.08,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub academic: f64,
    pub proposal: f64,
    pub experience: f64,
    pub recommendation: f64,
    pub interview: f64,
}

impl WeightVector {
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Academic => self.academic,
            Dimension::Proposal => self.proposal,
            Dimension::Experience => self.experience,
            Dimension::Recommendation => self.recommendation,
            Dimension::Interview => self.interview,
        }
    }

    pub fn sum(&self) -> f64 {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| self.weight(dimension))
            .sum()
    }
}
