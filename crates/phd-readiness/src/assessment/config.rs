use serde::{Deserialize, Serialize};

pub const ACADEMIC_HEADROOM: f64 = 1.30;
pub const SUGGESTION_TARGET: f64 = 8.0;
pub const SUGGESTION_LIMIT: usize = 3;

/// Empirically chosen rubric constants. `standard()` is the calibrated set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricConfig {
    /// Multiplier applied to the academic inner sum before clamping.
    pub academic_headroom: f64,
    /// Score each dimension is measured against when ranking advice.
    pub suggestion_target: f64,
    pub suggestion_limit: usize,
}

impl RubricConfig {
    pub fn standard() -> Self {
        Self {
            academic_headroom: ACADEMIC_HEADROOM,
            suggestion_target: SUGGESTION_TARGET,
            suggestion_limit: SUGGESTION_LIMIT,
        }
    }
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self::standard()
    }
}
