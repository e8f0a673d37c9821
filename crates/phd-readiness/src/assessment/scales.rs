use super::domain::{GradeRecord, PostgraduateClass, UndergraduateClass};

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

/// Knots of the percentage mapping. Flat below the first and above the last.
const PERCENT_BREAKPOINTS: [(f64, f64); 4] = [(50.0, 5.0), (60.0, 7.0), (70.0, 9.0), (85.0, 10.0)];

/// Share of the undergraduate grade when both degrees are known.
const UNDERGRADUATE_GRADE_SHARE: f64 = 0.4;
const POSTGRADUATE_GRADE_SHARE: f64 = 0.6;

/// Clamp to the 0-10 scale. NaN collapses to the lower bound.
pub fn clamp_score(value: f64) -> f64 {
    clamp_between(value, SCORE_MIN, SCORE_MAX)
}

pub(crate) fn clamp_between(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return lo;
    }
    value.clamp(lo, hi)
}

/// Map an average percentage mark onto the 5-10 band.
///
/// Returns `None` for absent or NaN input so callers can tell "not supplied"
/// apart from a low mark.
pub fn percent_to_score(percent: Option<f64>) -> Option<f64> {
    let percent = percent.filter(|value| !value.is_nan())?;

    let (first_mark, first_score) = PERCENT_BREAKPOINTS[0];
    if percent <= first_mark {
        return Some(first_score);
    }

    for window in PERCENT_BREAKPOINTS.windows(2) {
        let (lo_mark, lo_score) = window[0];
        let (hi_mark, hi_score) = window[1];
        if percent <= hi_mark {
            let slope = (hi_score - lo_score) / (hi_mark - lo_mark);
            return Some(lo_score + (percent - lo_mark) * slope);
        }
    }

    Some(PERCENT_BREAKPOINTS[PERCENT_BREAKPOINTS.len() - 1].1)
}

impl UndergraduateClass {
    pub const fn score(self) -> f64 {
        match self {
            Self::First => 9.2,
            Self::UpperSecond => 8.0,
            Self::LowerSecond => 6.5,
            Self::Third => 5.0,
            Self::Other => 4.5,
        }
    }
}

impl PostgraduateClass {
    pub const fn score(self) -> f64 {
        match self {
            Self::Distinction => 9.0,
            Self::Merit => 8.0,
            Self::Pass => 6.5,
            Self::Other => 5.0,
        }
    }
}

/// Degree classes that carry a fixed normalized score.
pub trait ClassScore: Copy {
    fn class_score(self) -> f64;
}

impl ClassScore for UndergraduateClass {
    fn class_score(self) -> f64 {
        self.score()
    }
}

impl ClassScore for PostgraduateClass {
    fn class_score(self) -> f64 {
        self.score()
    }
}

/// Normalized score of whichever grade representation is authoritative.
pub fn grade_score<C: ClassScore>(record: Option<&GradeRecord<C>>) -> Option<f64> {
    match record? {
        GradeRecord::Class(class) => Some(class.class_score()),
        GradeRecord::Percent(percent) => percent_to_score(Some(*percent)),
    }
}

/// Blend of the undergraduate and postgraduate grades; 0 when neither is known.
pub fn combined_grade(undergraduate: Option<f64>, postgraduate: Option<f64>) -> f64 {
    match (undergraduate, postgraduate) {
        (Some(ug), Some(pg)) => {
            clamp_score(UNDERGRADUATE_GRADE_SHARE * ug + POSTGRADUATE_GRADE_SHARE * pg)
        }
        (Some(single), None) | (None, Some(single)) => clamp_score(single),
        (None, None) => 0.0,
    }
}
