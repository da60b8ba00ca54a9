use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::round2;
use crate::screening::types::{Screening, SkillGapAnalysis};

/// Persisted screening. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ScreeningRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub overall_score: f64,
    pub skill_match_score: f64,
    pub text_similarity_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_gap_analysis: Json<SkillGapAnalysis>,
    pub recommendation: String,
    pub notes: String,
    pub screened_at: DateTime<Utc>,
}

impl ScreeningRow {
    pub fn from_screening(id: Uuid, screening: Screening) -> Self {
        let Screening {
            resume_id,
            job_id,
            scores,
            screened_at,
        } = screening;

        Self {
            id,
            resume_id,
            job_id,
            overall_score: scores.overall_score,
            skill_match_score: scores.skill_match_score,
            text_similarity_score: scores.text_similarity_score,
            experience_score: scores.experience_score,
            education_score: scores.education_score,
            matched_skills: scores.matched_skills,
            missing_skills: scores.missing_skills,
            skill_gap_analysis: Json(scores.skill_gap_analysis),
            recommendation: scores.recommendation.as_str().to_string(),
            notes: scores.notes,
            screened_at,
        }
    }

    /// Copy with scores rounded to two decimals. Stored values keep full precision.
    pub fn for_display(&self) -> Self {
        Self {
            overall_score: round2(self.overall_score),
            skill_match_score: round2(self.skill_match_score),
            text_similarity_score: round2(self.text_similarity_score),
            experience_score: round2(self.experience_score),
            education_score: round2(self.education_score),
            ..self.clone()
        }
    }
}
