use super::config::RubricConfig;
use super::domain::{
    AdjustmentFlags, AssessmentProfile, ExperienceRecord, ProposalScores, RecommendationScores,
};
use super::prestige::{relative_advantage, resolve_history};
use super::scales::{clamp_score, combined_grade, grade_score};
use super::{DerivedScores, SubScores};

const GRADE_SHARE: f64 = 0.55;
const PRESTIGE_SHARE: f64 = 0.25;
const RIGOR_SHARE: f64 = 0.10;

const TOP_FIRST_AUTHOR_POINTS: f64 = 4.0;
const TOP_CO_AUTHOR_POINTS: f64 = 2.0;
const GOOD_FIRST_AUTHOR_POINTS: f64 = 3.0;
const GOOD_CO_AUTHOR_POINTS: f64 = 1.0;
const THESIS_HONOURS_POINTS: f64 = 1.0;
const AWARD_POINTS_CAP: u32 = 2;

const FUNDING_BONUS: f64 = 0.5;
const SUPERVISOR_BONUS: f64 = 0.5;
pub const SUPERVISOR_PROPOSAL_THRESHOLD: f64 = 8.0;

/// Everything the weighted composition needs from one profile.
pub(crate) struct ProfileScores {
    pub derived: DerivedScores,
    pub subscores: SubScores,
    pub delta: f64,
}

pub(crate) fn score_profile(profile: &AssessmentProfile, config: &RubricConfig) -> ProfileScores {
    let undergraduate_grade = grade_score(profile.undergraduate.as_ref());
    let postgraduate_grade = grade_score(profile.postgraduate.as_ref());
    let combined = combined_grade(undergraduate_grade, postgraduate_grade);

    let (source_prestige, target_prestige) = resolve_history(&profile.institutions);
    let relative = relative_advantage(source_prestige, target_prestige);

    let proposal = proposal_score(&profile.proposal);
    let subscores = SubScores {
        academic: academic_score(
            combined,
            source_prestige,
            profile.rigor,
            relative,
            config.academic_headroom,
        ),
        proposal,
        experience: experience_score(&profile.experience),
        recommendation: recommendation_score(&profile.recommendations),
        interview: interview_score(profile.interview),
    };

    ProfileScores {
        derived: DerivedScores {
            undergraduate_grade,
            postgraduate_grade,
            combined_grade: combined,
            source_prestige,
            target_prestige,
            relative_advantage: relative,
        },
        subscores,
        delta: adjustment_delta(&profile.adjustments, proposal),
    }
}

/// Academic background score. A missing source prestige counts as 0 here.
pub fn academic_score(
    combined_grade: f64,
    source_prestige: Option<f64>,
    rigor: f64,
    relative_advantage: f64,
    headroom: f64,
) -> f64 {
    let inner = GRADE_SHARE * combined_grade
        + PRESTIGE_SHARE * source_prestige.unwrap_or(0.0)
        + RIGOR_SHARE * rigor
        + relative_advantage;
    clamp_score(inner * headroom)
}

/// Equal-weight mean of the four proposal components.
pub fn proposal_score(scores: &ProposalScores) -> f64 {
    clamp_score((scores.innovation + scores.feasibility + scores.fit + scores.writing) / 4.0)
}

/// Capped point accumulation over publications, thesis, RA time, and awards.
pub fn experience_score(record: &ExperienceRecord) -> f64 {
    let mut points = 0.0;
    points += f64::from(record.top_first_author) * TOP_FIRST_AUTHOR_POINTS;
    points += f64::from(record.top_co_author) * TOP_CO_AUTHOR_POINTS;
    points += f64::from(record.good_first_author) * GOOD_FIRST_AUTHOR_POINTS;
    points += f64::from(record.good_co_author) * GOOD_CO_AUTHOR_POINTS;
    if record.thesis_honours {
        points += THESIS_HONOURS_POINTS;
    }
    points += research_assistant_points(record.ra_months);
    points += f64::from(record.awards.min(AWARD_POINTS_CAP));
    clamp_score(points)
}

fn research_assistant_points(months: u32) -> f64 {
    match months {
        6.. => 2.0,
        3..=5 => 1.0,
        _ => 0.0,
    }
}

pub fn recommendation_score(scores: &RecommendationScores) -> f64 {
    clamp_score((scores.first + scores.second) / 2.0)
}

pub fn interview_score(rating: f64) -> f64 {
    clamp_score(rating)
}

/// Bonus for verified advantages. Supervisor intent only counts once the
/// proposal reaches `SUPERVISOR_PROPOSAL_THRESHOLD`.
pub fn adjustment_delta(flags: &AdjustmentFlags, proposal_score: f64) -> f64 {
    let mut delta = 0.0;
    if flags.external_funding {
        delta += FUNDING_BONUS;
    }
    if flags.supervisor_intent && proposal_score >= SUPERVISOR_PROPOSAL_THRESHOLD {
        delta += SUPERVISOR_BONUS;
    }
    delta
}
