use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::analytics::AnalyticsSummary;
use crate::errors::AppError;
use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::models::screening::ScreeningRow;
use crate::store::Store;

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_resume(&self, row: &ResumeRow) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO resumes
                (id, candidate_name, candidate_email, candidate_phone, experience_years,
                 education_level, skills_found, raw_text, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(row.id)
        .bind(&row.candidate_name)
        .bind(&row.candidate_email)
        .bind(&row.candidate_phone)
        .bind(row.experience_years)
        .bind(&row.education_level)
        .bind(&row.skills_found)
        .bind(&row.raw_text)
        .bind(row.uploaded_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_resumes(&self) -> Result<Vec<ResumeRow>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes ORDER BY uploaded_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        // screenings go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_job(&self, row: &JobRow) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO job_descriptions
                (id, title, description, required_skills, preferred_skills,
                 min_experience, education_required, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(row.id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(&row.required_skills)
        .bind(&row.preferred_skills)
        .bind(row.min_experience)
        .bind(&row.education_required)
        .bind(row.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_jobs(&self) -> Result<Vec<JobRow>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT * FROM job_descriptions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobRow>, AppError> {
        let row = sqlx::query_as::<_, JobRow>("SELECT * FROM job_descriptions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_job(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM job_descriptions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_screening(&self, row: &ScreeningRow) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO screenings
                (id, resume_id, job_id, overall_score, skill_match_score,
                 text_similarity_score, experience_score, education_score,
                 matched_skills, missing_skills, skill_gap_analysis,
                 recommendation, notes, screened_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(row.id)
        .bind(row.resume_id)
        .bind(row.job_id)
        .bind(row.overall_score)
        .bind(row.skill_match_score)
        .bind(row.text_similarity_score)
        .bind(row.experience_score)
        .bind(row.education_score)
        .bind(&row.matched_skills)
        .bind(&row.missing_skills)
        .bind(&row.skill_gap_analysis)
        .bind(&row.recommendation)
        .bind(&row.notes)
        .bind(row.screened_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_screenings(&self) -> Result<Vec<ScreeningRow>, AppError> {
        let rows = sqlx::query_as::<_, ScreeningRow>(
            "SELECT * FROM screenings ORDER BY screened_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_screening(&self, id: Uuid) -> Result<Option<ScreeningRow>, AppError> {
        let row = sqlx::query_as::<_, ScreeningRow>("SELECT * FROM screenings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn analytics(&self) -> Result<AnalyticsSummary, AppError> {
        let (total_resumes, total_jobs, total_screenings, avg_overall, avg_skill): (
            i64,
            i64,
            i64,
            Option<f64>,
            Option<f64>,
        ) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM resumes),
                (SELECT COUNT(*) FROM job_descriptions),
                (SELECT COUNT(*) FROM screenings),
                (SELECT AVG(overall_score) FROM screenings),
                (SELECT AVG(skill_match_score) FROM screenings)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let distribution: Vec<(String, i64)> = sqlx::query_as(
            "SELECT recommendation, COUNT(*) FROM screenings GROUP BY recommendation",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(AnalyticsSummary {
            total_resumes,
            total_jobs,
            total_screenings,
            average_overall_score: avg_overall.unwrap_or(0.0),
            average_skill_score: avg_skill.unwrap_or(0.0),
            recommendations: distribution.into_iter().collect::<BTreeMap<_, _>>(),
        })
    }
}
