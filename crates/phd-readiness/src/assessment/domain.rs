use serde::{Deserialize, Serialize};

use super::weights::WeightScheme;

/// Undergraduate degree classification on the UK honours scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndergraduateClass {
    First,
    #[serde(alias = "upper")]
    UpperSecond,
    #[serde(alias = "lower")]
    LowerSecond,
    Third,
    Other,
}

impl UndergraduateClass {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::First,
            Self::UpperSecond,
            Self::LowerSecond,
            Self::Third,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "First",
            Self::UpperSecond => "Upper Second (2:1)",
            Self::LowerSecond => "Lower Second (2:2)",
            Self::Third => "Third",
            Self::Other => "Other",
        }
    }
}

/// Taught postgraduate award classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostgraduateClass {
    Distinction,
    Merit,
    Pass,
    Other,
}

impl PostgraduateClass {
    pub const fn ordered() -> [Self; 4] {
        [Self::Distinction, Self::Merit, Self::Pass, Self::Other]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Distinction => "Distinction",
            Self::Merit => "Merit",
            Self::Pass => "Pass",
            Self::Other => "Other",
        }
    }
}

/// Band in the QS world university ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QsTier {
    #[serde(rename = "qs_top10")]
    Top10,
    #[serde(rename = "qs_11_20")]
    Rank11To20,
    #[serde(rename = "qs_21_50")]
    Rank21To50,
    #[serde(rename = "qs_51_100")]
    Rank51To100,
    #[serde(rename = "qs_101_200")]
    Rank101To200,
    #[serde(rename = "qs_201_300")]
    Rank201To300,
    #[serde(rename = "qs_301_500")]
    Rank301To500,
    #[serde(rename = "qs_501_800")]
    Rank501To800,
    #[serde(rename = "qs_800_plus")]
    Beyond800,
}

impl QsTier {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Top10,
            Self::Rank11To20,
            Self::Rank21To50,
            Self::Rank51To100,
            Self::Rank101To200,
            Self::Rank201To300,
            Self::Rank301To500,
            Self::Rank501To800,
            Self::Beyond800,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Top10 => "QS Top 10",
            Self::Rank11To20 => "QS 11-20",
            Self::Rank21To50 => "QS 21-50",
            Self::Rank51To100 => "QS 51-100",
            Self::Rank101To200 => "QS 101-200",
            Self::Rank201To300 => "QS 201-300",
            Self::Rank301To500 => "QS 301-500",
            Self::Rank501To800 => "QS 501-800",
            Self::Beyond800 => "QS 800+ / unranked",
        }
    }
}

/// Band in the mainland China domestic university classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomesticTier {
    #[serde(rename = "cn_c9")]
    C9,
    #[serde(rename = "cn_985")]
    Project985,
    #[serde(rename = "cn_211")]
    Project211,
    #[serde(rename = "cn_first_tier", alias = "cn_1ben")]
    FirstTier,
    #[serde(rename = "cn_below")]
    BelowFirstTier,
}

impl DomesticTier {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::C9,
            Self::Project985,
            Self::Project211,
            Self::FirstTier,
            Self::BelowFirstTier,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::C9 => "C9 / top 985",
            Self::Project985 => "Other 985",
            Self::Project211 => "211 / Double First-Class",
            Self::FirstTier => "First-tier (non-211)",
            Self::BelowFirstTier => "Below first tier",
        }
    }
}

/// Which of the two grade inputs is authoritative for a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeMethod {
    #[default]
    Class,
    Percent,
}

/// Raw grade entry as captured by a form: a method selector plus both candidate values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeSubmission<C> {
    #[serde(default)]
    pub method: GradeMethod,
    pub class: Option<C>,
    pub percent: Option<f64>,
}

impl<C> Default for GradeSubmission<C> {
    fn default() -> Self {
        Self {
            method: GradeMethod::Class,
            class: None,
            percent: None,
        }
    }
}

impl<C> GradeSubmission<C> {
    pub fn class(class: C) -> Self {
        Self {
            method: GradeMethod::Class,
            class: Some(class),
            percent: None,
        }
    }

    pub fn percent(percent: f64) -> Self {
        Self {
            method: GradeMethod::Percent,
            class: None,
            percent: Some(percent),
        }
    }
}

/// Sanitized grade: exactly one representation is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "value", rename_all = "snake_case")]
pub enum GradeRecord<C> {
    Class(C),
    Percent(f64),
}

/// Ranking selections for one institution. Both systems may be set at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstitutionSelection {
    #[serde(default)]
    pub qs: Option<QsTier>,
    #[serde(default)]
    pub domestic: Option<DomesticTier>,
}

impl InstitutionSelection {
    pub fn qs(tier: QsTier) -> Self {
        Self {
            qs: Some(tier),
            domestic: None,
        }
    }

    pub fn domestic(tier: DomesticTier) -> Self {
        Self {
            qs: None,
            domestic: Some(tier),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.qs.is_none() && self.domestic.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstitutionHistory {
    pub undergraduate: InstitutionSelection,
    pub postgraduate: InstitutionSelection,
    pub target: InstitutionSelection,
}

/// Named curriculum intensity levels offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigorLevel {
    Standard,
    Moderate,
    Intensive,
}

impl RigorLevel {
    pub const fn score(self) -> f64 {
        match self {
            Self::Standard => 5.0,
            Self::Moderate => 7.0,
            Self::Intensive => 9.0,
        }
    }
}

/// Curriculum rigor as either a named level or a free 0-10 score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RigorInput {
    Level(RigorLevel),
    Score(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalSubmission {
    pub innovation: Option<f64>,
    pub feasibility: Option<f64>,
    pub fit: Option<f64>,
    pub writing: Option<f64>,
}

/// Publication and research counters as typed into a form. Any JSON number is
/// accepted; the intake guard floors fractions and negatives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceSubmission {
    pub top_first_author: f64,
    pub top_co_author: f64,
    pub good_first_author: f64,
    pub good_co_author: f64,
    pub thesis_honours: bool,
    pub ra_months: f64,
    pub awards: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSubmission {
    pub first: Option<f64>,
    pub second: Option<f64>,
}

/// Externally verified advantages feeding the adjustment delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentFlags {
    pub external_funding: bool,
    pub supervisor_intent: bool,
}

/// Input record supplied by a presentation layer. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentSubmission {
    pub english_gate_passed: bool,
    pub scheme: WeightScheme,
    pub undergraduate: GradeSubmission<UndergraduateClass>,
    pub postgraduate: GradeSubmission<PostgraduateClass>,
    pub institutions: InstitutionHistory,
    pub rigor: Option<RigorInput>,
    pub proposal: ProposalSubmission,
    pub experience: ExperienceSubmission,
    pub recommendations: RecommendationSubmission,
    pub interview: Option<f64>,
    pub adjustments: AdjustmentFlags,
}

impl Default for AssessmentSubmission {
    fn default() -> Self {
        Self {
            english_gate_passed: true,
            scheme: WeightScheme::Default,
            undergraduate: GradeSubmission::default(),
            postgraduate: GradeSubmission::default(),
            institutions: InstitutionHistory::default(),
            rigor: None,
            proposal: ProposalSubmission::default(),
            experience: ExperienceSubmission::default(),
            recommendations: RecommendationSubmission::default(),
            interview: None,
            adjustments: AdjustmentFlags::default(),
        }
    }
}

impl AssessmentSubmission {
    /// Starting state of a blank self-assessment form: sliders at 8 and moderate rigor.
    pub fn form_defaults() -> Self {
        const SLIDER_START: f64 = 8.0;

        Self {
            rigor: Some(RigorInput::Level(RigorLevel::Moderate)),
            proposal: ProposalSubmission {
                innovation: Some(SLIDER_START),
                feasibility: Some(SLIDER_START),
                fit: Some(SLIDER_START),
                writing: Some(SLIDER_START),
            },
            recommendations: RecommendationSubmission {
                first: Some(SLIDER_START),
                second: Some(SLIDER_START),
            },
            interview: Some(SLIDER_START),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProposalScores {
    pub innovation: f64,
    pub feasibility: f64,
    pub fit: f64,
    pub writing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub top_first_author: u32,
    pub top_co_author: u32,
    pub good_first_author: u32,
    pub good_co_author: u32,
    pub thesis_honours: bool,
    pub ra_months: u32,
    pub awards: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationScores {
    pub first: f64,
    pub second: f64,
}

/// Boundary-checked snapshot consumed by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentProfile {
    pub english_gate_passed: bool,
    pub scheme: WeightScheme,
    pub undergraduate: Option<GradeRecord<UndergraduateClass>>,
    pub postgraduate: Option<GradeRecord<PostgraduateClass>>,
    pub institutions: InstitutionHistory,
    pub rigor: f64,
    pub proposal: ProposalScores,
    pub experience: ExperienceRecord,
    pub recommendations: RecommendationScores,
    pub interview: f64,
    pub adjustments: AdjustmentFlags,
}
