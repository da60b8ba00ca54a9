use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::screening::errors::ScreeningError;

// ────────────────────────────────────────────────────────────────────────────
// Education scale
// ────────────────────────────────────────────────────────────────────────────

/// Ordered education scale. Declaration order is rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    None,
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::None,
        EducationLevel::HighSchool,
        EducationLevel::Associate,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Doctorate,
    ];

    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::None => 0,
            EducationLevel::HighSchool => 1,
            EducationLevel::Associate => 2,
            EducationLevel::Bachelor => 3,
            EducationLevel::Master => 4,
            EducationLevel::Doctorate => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::None => "none",
            EducationLevel::HighSchool => "high_school",
            EducationLevel::Associate => "associate",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Doctorate => "doctorate",
        }
    }

    /// Human label used in screening notes.
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::None => "no formal education",
            EducationLevel::HighSchool => "high school",
            EducationLevel::Associate => "associate degree",
            EducationLevel::Bachelor => "bachelor's degree",
            EducationLevel::Master => "master's degree",
            EducationLevel::Doctorate => "doctorate",
        }
    }

    /// Parses an optional free-form education field.
    ///
    /// Missing, blank and "not specified" style values yield `Ok(None)`;
    /// anything that is present but not on the scale is malformed.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, ScreeningError> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let folded = raw.trim().to_lowercase();
        if matches!(
            folded.as_str(),
            "" | "not specified" | "unspecified" | "n/a" | "na" | "unknown"
        ) {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl FromStr for EducationLevel {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '\'' | '.' | '’'))
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        let key = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

        let level = match key.as_str() {
            "none" | "no degree" => EducationLevel::None,
            "high school" | "highschool" | "secondary" | "ged" => EducationLevel::HighSchool,
            "associate" | "associates" | "associate degree" | "diploma" => {
                EducationLevel::Associate
            }
            "bachelor" | "bachelors" | "bachelor degree" | "bachelors degree" | "bs" | "ba"
            | "bsc" | "undergraduate" => EducationLevel::Bachelor,
            "master" | "masters" | "master degree" | "masters degree" | "ms" | "msc" | "ma"
            | "mba" => EducationLevel::Master,
            "doctorate" | "doctoral" | "phd" => EducationLevel::Doctorate,
            _ => {
                let expected: Vec<&str> = EducationLevel::ALL.iter().map(|l| l.as_str()).collect();
                return Err(ScreeningError::MalformedInput(format!(
                    "unknown education level '{}', expected one of: {}",
                    s.trim(),
                    expected.join(", ")
                )));
            }
        };
        Ok(level)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendation
// ────────────────────────────────────────────────────────────────────────────

/// Categorical verdict. Declaration order is rank order (worst first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Not Recommended")]
    NotRecommended,
    #[serde(rename = "Maybe")]
    Maybe,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::NotRecommended => "Not Recommended",
            Recommendation::Maybe => "Maybe",
            Recommendation::Recommended => "Recommended",
            Recommendation::HighlyRecommended => "Highly Recommended",
        }
    }
}

impl FromStr for Recommendation {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Recommended" => Ok(Recommendation::NotRecommended),
            "Maybe" => Ok(Recommendation::Maybe),
            "Recommended" => Ok(Recommendation::Recommended),
            "Highly Recommended" => Ok(Recommendation::HighlyRecommended),
            other => Err(ScreeningError::MalformedInput(format!(
                "unknown recommendation '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine inputs
// ────────────────────────────────────────────────────────────────────────────

/// An already-extracted resume. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub candidate_phone: Option<String>,
    pub experience_years: f64,
    pub education_level: Option<EducationLevel>,
    /// Display order as supplied by the extractor; matching treats it as a set.
    pub skills_found: Vec<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub min_experience: f64,
    pub education_required: Option<EducationLevel>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine output
// ────────────────────────────────────────────────────────────────────────────

/// Four-way partition of a job's skills, in canonical token form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub required_matched: Vec<String>,
    pub required_missing: Vec<String>,
    pub preferred_matched: Vec<String>,
    pub preferred_missing: Vec<String>,
}

/// Every score field of a screening. Pure function of the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub skill_match_score: f64,
    pub text_similarity_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_gap_analysis: SkillGapAnalysis,
    pub notes: String,
}

/// Immutable result of screening one resume against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screening {
    pub resume_id: Uuid,
    pub job_id: Uuid,
    #[serde(flatten)]
    pub scores: ScoreCard,
    pub screened_at: DateTime<Utc>,
}
