use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::screening::errors::ScreeningError;
use crate::screening::normalizer::SkillNormalizer;
use crate::screening::types::{EducationLevel, Resume};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub candidate_phone: Option<String>,
    pub experience_years: f64,
    /// Canonical `EducationLevel::as_str` form, NULL when unspecified.
    pub education_level: Option<String>,
    pub skills_found: Vec<String>,
    pub raw_text: String,
    pub uploaded_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Converts a stored row into the engine's input type.
    pub fn to_resume(&self) -> Result<Resume, ScreeningError> {
        Ok(Resume {
            id: self.id,
            candidate_name: self.candidate_name.clone(),
            candidate_email: self.candidate_email.clone(),
            candidate_phone: self.candidate_phone.clone(),
            experience_years: self.experience_years,
            education_level: EducationLevel::parse_optional(self.education_level.as_deref())?,
            skills_found: self.skills_found.clone(),
            raw_text: self.raw_text.clone(),
        })
    }
}

/// Structured fields produced by the resume extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct NewResume {
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub candidate_phone: Option<String>,
    #[serde(default)]
    pub experience_years: f64,
    pub education_level: Option<String>,
    #[serde(default)]
    pub skills_found: Vec<String>,
    #[serde(default)]
    pub raw_text: String,
}

impl NewResume {
    /// Validates the submission and assigns an id and upload timestamp.
    pub fn into_row(self, normalizer: &SkillNormalizer) -> Result<ResumeRow, ScreeningError> {
        if !self.experience_years.is_finite() || self.experience_years < 0.0 {
            return Err(ScreeningError::MalformedInput(format!(
                "experience_years must be a non-negative number, got {}",
                self.experience_years
            )));
        }
        let education = EducationLevel::parse_optional(self.education_level.as_deref())?;

        Ok(ResumeRow {
            id: Uuid::new_v4(),
            candidate_name: non_blank(self.candidate_name),
            candidate_email: non_blank(self.candidate_email),
            candidate_phone: non_blank(self.candidate_phone),
            experience_years: self.experience_years,
            education_level: education.map(|level| level.as_str().to_string()),
            skills_found: normalizer.dedup_display(&self.skills_found),
            raw_text: self.raw_text,
            uploaded_at: Utc::now(),
        })
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
