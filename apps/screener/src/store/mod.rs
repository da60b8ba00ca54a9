//! Record stores. The engine never touches these; handlers load inputs before
//! scoring and persist the result afterwards.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::analytics::AnalyticsSummary;
use crate::errors::AppError;
use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::models::screening::ScreeningRow;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence seam for resumes, jobs and screenings.
///
/// Carried in `AppState` as `Arc<dyn Store>`. Lists are newest first.
/// Deleting a resume or job deletes its screenings.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_resume(&self, row: &ResumeRow) -> Result<(), AppError>;
    async fn list_resumes(&self) -> Result<Vec<ResumeRow>, AppError>;
    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError>;
    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError>;

    async fn insert_job(&self, row: &JobRow) -> Result<(), AppError>;
    async fn list_jobs(&self) -> Result<Vec<JobRow>, AppError>;
    async fn get_job(&self, id: Uuid) -> Result<Option<JobRow>, AppError>;
    async fn delete_job(&self, id: Uuid) -> Result<bool, AppError>;

    async fn insert_screening(&self, row: &ScreeningRow) -> Result<(), AppError>;
    async fn list_screenings(&self) -> Result<Vec<ScreeningRow>, AppError>;
    async fn get_screening(&self, id: Uuid) -> Result<Option<ScreeningRow>, AppError>;

    async fn analytics(&self) -> Result<AnalyticsSummary, AppError>;
}
