//! Axum route handlers for the Screening API.
//!
//! Records are resolved through the store before the engine runs; a missing
//! resume or job is a 404 here and never reaches the engine.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::models::screening::ScreeningRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub resume_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub screening: ScreeningRow,
    pub resume: ResumeRow,
    pub job: JobRow,
}

/// A screening with the records it was computed from, when they still exist.
#[derive(Debug, Serialize)]
pub struct ScreeningDetail {
    #[serde(flatten)]
    pub screening: ScreeningRow,
    pub resume: Option<ResumeRow>,
    pub job: Option<JobRow>,
}

#[derive(Debug, Serialize)]
pub struct ScreeningListResponse {
    pub screenings: Vec<ScreeningDetail>,
    pub total: usize,
}

/// POST /api/v1/screen
///
/// Scores one resume against one job and persists the result as a new row.
/// Re-screening the same pair adds another row; earlier rows are untouched.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<(StatusCode, Json<ScreenResponse>), AppError> {
    let (Some(resume_id), Some(job_id)) = (request.resume_id, request.job_id) else {
        return Err(AppError::Validation(
            "resume_id and job_id are required".to_string(),
        ));
    };

    let resume = state
        .store
        .get_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
    let job = state
        .store
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let screening = state.screener.screen(&resume.to_resume()?, &job.to_job()?)?;
    let row = ScreeningRow::from_screening(Uuid::new_v4(), screening);
    state.store.insert_screening(&row).await?;

    info!(
        screening_id = %row.id,
        resume_id = %resume_id,
        job_id = %job_id,
        overall = row.overall_score,
        recommendation = %row.recommendation,
        "Resume screened"
    );

    Ok((
        StatusCode::CREATED,
        Json(ScreenResponse {
            screening: row.for_display(),
            resume,
            job,
        }),
    ))
}

/// GET /api/v1/screenings
pub async fn handle_list_screenings(
    State(state): State<AppState>,
) -> Result<Json<ScreeningListResponse>, AppError> {
    let screenings = state.store.list_screenings().await?;
    let resumes: HashMap<Uuid, ResumeRow> = state
        .store
        .list_resumes()
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();
    let jobs: HashMap<Uuid, JobRow> = state
        .store
        .list_jobs()
        .await?
        .into_iter()
        .map(|j| (j.id, j))
        .collect();

    let screenings: Vec<ScreeningDetail> = screenings
        .into_iter()
        .map(|s| ScreeningDetail {
            resume: resumes.get(&s.resume_id).cloned(),
            job: jobs.get(&s.job_id).cloned(),
            screening: s.for_display(),
        })
        .collect();
    let total = screenings.len();

    Ok(Json(ScreeningListResponse { screenings, total }))
}

/// GET /api/v1/screenings/:id
pub async fn handle_get_screening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningDetail>, AppError> {
    let screening = state
        .store
        .get_screening(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Screening {id} not found")))?;
    let resume = state.store.get_resume(screening.resume_id).await?;
    let job = state.store.get_job(screening.job_id).await?;

    Ok(Json(ScreeningDetail {
        screening: screening.for_display(),
        resume,
        job,
    }))
}
