use super::domain::{DomesticTier, InstitutionHistory, InstitutionSelection, QsTier};
use super::scales::clamp_between;

/// Share of undergraduate prestige in the source blend; postgraduate takes the rest.
const UNDERGRADUATE_PRESTIGE_SHARE: f64 = 0.65;

/// Gaps within this band are treated as noise.
pub const RELATIVE_DEADZONE: f64 = 0.3;
pub const RELATIVE_CAP: f64 = 1.2;

impl QsTier {
    pub const fn score(self) -> f64 {
        match self {
            Self::Top10 => 10.0,
            Self::Rank11To20 => 9.5,
            Self::Rank21To50 => 9.0,
            Self::Rank51To100 => 8.5,
            Self::Rank101To200 => 8.0,
            Self::Rank201To300 => 7.5,
            Self::Rank301To500 => 7.0,
            Self::Rank501To800 => 6.5,
            Self::Beyond800 => 6.0,
        }
    }
}

impl DomesticTier {
    pub const fn score(self) -> f64 {
        match self {
            Self::C9 => 9.2,
            Self::Project985 => 8.0,
            Self::Project211 => 7.2,
            Self::FirstTier => 6.5,
            Self::BelowFirstTier => 5.0,
        }
    }
}

/// The more favorable of the two ranking selections, or `None` if neither is set.
pub fn prestige_from(qs: Option<QsTier>, domestic: Option<DomesticTier>) -> Option<f64> {
    match (qs.map(QsTier::score), domestic.map(DomesticTier::score)) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(single), None) | (None, Some(single)) => Some(single),
        (None, None) => None,
    }
}

pub fn selection_prestige(selection: &InstitutionSelection) -> Option<f64> {
    prestige_from(selection.qs, selection.domestic)
}

/// Prestige of the applicant's own background, weighted toward the first degree.
pub fn source_prestige(undergraduate: Option<f64>, postgraduate: Option<f64>) -> Option<f64> {
    match (undergraduate, postgraduate) {
        (Some(ug), Some(pg)) => {
            Some(UNDERGRADUATE_PRESTIGE_SHARE * ug + (1.0 - UNDERGRADUATE_PRESTIGE_SHARE) * pg)
        }
        (Some(single), None) | (None, Some(single)) => Some(single),
        (None, None) => None,
    }
}

/// Source and target prestige resolved from a full institution history.
pub fn resolve_history(history: &InstitutionHistory) -> (Option<f64>, Option<f64>) {
    let source = source_prestige(
        selection_prestige(&history.undergraduate),
        selection_prestige(&history.postgraduate),
    );
    let target = selection_prestige(&history.target);
    (source, target)
}

/// Deadzoned, capped gap between the applicant's background and the target.
///
/// Missing either side contributes nothing. Inside the deadzone the result is
/// zero; outside it the gap is shrunk by the deadzone width and clamped to
/// `[-RELATIVE_CAP, RELATIVE_CAP]`.
pub fn relative_advantage(source: Option<f64>, target: Option<f64>) -> f64 {
    let (Some(source), Some(target)) = (source, target) else {
        return 0.0;
    };

    let gap = source - target;
    if gap.is_nan() || gap.abs() <= RELATIVE_DEADZONE {
        return 0.0;
    }

    let shrunk = if gap > 0.0 {
        gap - RELATIVE_DEADZONE
    } else {
        gap + RELATIVE_DEADZONE
    };
    clamp_between(shrunk, -RELATIVE_CAP, RELATIVE_CAP)
}
