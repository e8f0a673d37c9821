use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::domain::{
    AssessmentProfile, AssessmentSubmission, ExperienceRecord, ExperienceSubmission, GradeMethod,
    GradeRecord, GradeSubmission, ProposalScores, RecommendationScores, RigorInput,
};
use super::scales::{SCORE_MAX, SCORE_MIN};

const PERCENT_MIN: f64 = 0.0;
const PERCENT_MAX: f64 = 100.0;

/// Failures while loading a submission from an external source.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionReadError {
    #[error("failed to read assessment input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid assessment input: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssessmentSubmission {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SubmissionReadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SubmissionReadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, SubmissionReadError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Boundary check turning a raw submission into an `AssessmentProfile`.
///
/// Never fails: out-of-range numbers are clamped, non-finite numbers are
/// treated as absent, and negative counters are floored at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputGuard;

impl InputGuard {
    pub fn profile_from_submission(&self, submission: AssessmentSubmission) -> AssessmentProfile {
        let AssessmentSubmission {
            english_gate_passed,
            scheme,
            undergraduate,
            postgraduate,
            institutions,
            rigor,
            proposal,
            experience,
            recommendations,
            interview,
            adjustments,
        } = submission;

        AssessmentProfile {
            english_gate_passed,
            scheme,
            undergraduate: grade_record("undergraduate", undergraduate),
            postgraduate: grade_record("postgraduate", postgraduate),
            institutions,
            rigor: rigor_score(rigor),
            proposal: ProposalScores {
                innovation: slider("proposal.innovation", proposal.innovation),
                feasibility: slider("proposal.feasibility", proposal.feasibility),
                fit: slider("proposal.fit", proposal.fit),
                writing: slider("proposal.writing", proposal.writing),
            },
            experience: experience_record(experience),
            recommendations: RecommendationScores {
                first: slider("recommendations.first", recommendations.first),
                second: slider("recommendations.second", recommendations.second),
            },
            interview: slider("interview", interview),
            adjustments,
        }
    }
}

fn grade_record<C>(field: &'static str, submission: GradeSubmission<C>) -> Option<GradeRecord<C>> {
    match submission.method {
        GradeMethod::Class => submission.class.map(GradeRecord::Class),
        GradeMethod::Percent => finite(field, submission.percent)
            .map(|percent| GradeRecord::Percent(bounded(field, percent, PERCENT_MIN, PERCENT_MAX))),
    }
}

fn rigor_score(rigor: Option<RigorInput>) -> f64 {
    match rigor {
        Some(RigorInput::Level(level)) => level.score(),
        Some(RigorInput::Score(score)) => finite("rigor", Some(score))
            .map(|score| bounded("rigor", score, SCORE_MIN, SCORE_MAX))
            .unwrap_or(SCORE_MIN),
        None => SCORE_MIN,
    }
}

/// A 0-10 rating; absent or non-finite ratings contribute nothing.
fn slider(field: &'static str, value: Option<f64>) -> f64 {
    finite(field, value)
        .map(|value| bounded(field, value, SCORE_MIN, SCORE_MAX))
        .unwrap_or(SCORE_MIN)
}

fn finite(field: &'static str, value: Option<f64>) -> Option<f64> {
    match value {
        Some(value) if value.is_finite() => Some(value),
        Some(value) => {
            debug!(field, %value, "non-finite input treated as absent");
            None
        }
        None => None,
    }
}

fn bounded(field: &'static str, value: f64, lo: f64, hi: f64) -> f64 {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        debug!(field, %value, %clamped, "input clamped to valid range");
    }
    clamped
}

fn experience_record(submission: ExperienceSubmission) -> ExperienceRecord {
    ExperienceRecord {
        top_first_author: counter("experience.top_first_author", submission.top_first_author),
        top_co_author: counter("experience.top_co_author", submission.top_co_author),
        good_first_author: counter("experience.good_first_author", submission.good_first_author),
        good_co_author: counter("experience.good_co_author", submission.good_co_author),
        thesis_honours: submission.thesis_honours,
        ra_months: counter("experience.ra_months", submission.ra_months),
        awards: counter("experience.awards", submission.awards),
    }
}

/// Whole, non-negative count. Fractions round down, NaN and negatives become
/// zero, and anything past `u32::MAX` saturates.
fn counter(field: &'static str, value: f64) -> u32 {
    if value.is_nan() || value < 0.0 {
        debug!(field, %value, "invalid count floored at zero");
        return 0;
    }

    let whole = value.floor();
    if whole > f64::from(u32::MAX) {
        debug!(field, %value, "count saturated");
        return u32::MAX;
    }
    if whole != value {
        debug!(field, %value, "fractional count rounded down");
    }
    whole as u32
}
