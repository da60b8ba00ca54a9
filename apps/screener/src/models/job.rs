use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::resume::non_blank;
use crate::screening::errors::ScreeningError;
use crate::screening::normalizer::SkillNormalizer;
use crate::screening::types::{EducationLevel, JobDescription};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience: f64,
    pub education_required: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    pub fn to_job(&self) -> Result<JobDescription, ScreeningError> {
        Ok(JobDescription {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            min_experience: self.min_experience,
            education_required: EducationLevel::parse_optional(
                self.education_required.as_deref(),
            )?,
            required_skills: self.required_skills.clone(),
            preferred_skills: self.preferred_skills.clone(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub min_experience: Option<f64>,
    pub education_required: Option<String>,
}

impl NewJob {
    pub fn into_row(self, normalizer: &SkillNormalizer) -> Result<JobRow, ScreeningError> {
        let title = non_blank(Some(self.title))
            .ok_or_else(|| ScreeningError::MalformedInput("title cannot be empty".to_string()))?;
        if self.description.trim().is_empty() {
            return Err(ScreeningError::MalformedInput(
                "description cannot be empty".to_string(),
            ));
        }
        let min_experience = self.min_experience.unwrap_or(0.0);
        if !min_experience.is_finite() || min_experience < 0.0 {
            return Err(ScreeningError::MalformedInput(format!(
                "min_experience must be a non-negative number, got {min_experience}"
            )));
        }
        let education = EducationLevel::parse_optional(self.education_required.as_deref())?;

        Ok(JobRow {
            id: Uuid::new_v4(),
            title,
            description: self.description,
            required_skills: normalizer.dedup_display(&self.required_skills),
            preferred_skills: normalizer.dedup_display(&self.preferred_skills),
            min_experience,
            education_required: education.map(|level| level.as_str().to_string()),
            created_at: Utc::now(),
        })
    }
}
