use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analytics::{summarize, AnalyticsSummary};
use crate::errors::AppError;
use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::models::screening::ScreeningRow;
use crate::store::Store;

#[derive(Default)]
struct Tables {
    resumes: Vec<ResumeRow>,
    jobs: Vec<JobRow>,
    screenings: Vec<ScreeningRow>,
}

/// Process-local store for development and tests. Rows are kept in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T: Clone>(rows: &[T]) -> Vec<T> {
    rows.iter().rev().cloned().collect()
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_resume(&self, row: &ResumeRow) -> Result<(), AppError> {
        self.tables.write().await.resumes.push(row.clone());
        Ok(())
    }

    async fn list_resumes(&self) -> Result<Vec<ResumeRow>, AppError> {
        Ok(newest_first(&self.tables.read().await.resumes))
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        let before = tables.resumes.len();
        tables.resumes.retain(|r| r.id != id);
        let removed = tables.resumes.len() != before;
        if removed {
            tables.screenings.retain(|s| s.resume_id != id);
        }
        Ok(removed)
    }

    async fn insert_job(&self, row: &JobRow) -> Result<(), AppError> {
        self.tables.write().await.jobs.push(row.clone());
        Ok(())
    }

    async fn list_jobs(&self) -> Result<Vec<JobRow>, AppError> {
        Ok(newest_first(&self.tables.read().await.jobs))
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobRow>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn delete_job(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        let before = tables.jobs.len();
        tables.jobs.retain(|j| j.id != id);
        let removed = tables.jobs.len() != before;
        if removed {
            tables.screenings.retain(|s| s.job_id != id);
        }
        Ok(removed)
    }

    async fn insert_screening(&self, row: &ScreeningRow) -> Result<(), AppError> {
        self.tables.write().await.screenings.push(row.clone());
        Ok(())
    }

    async fn list_screenings(&self) -> Result<Vec<ScreeningRow>, AppError> {
        Ok(newest_first(&self.tables.read().await.screenings))
    }

    async fn get_screening(&self, id: Uuid) -> Result<Option<ScreeningRow>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.screenings.iter().find(|s| s.id == id).cloned())
    }

    async fn analytics(&self) -> Result<AnalyticsSummary, AppError> {
        let tables = self.tables.read().await;
        Ok(summarize(
            tables.resumes.len(),
            tables.jobs.len(),
            &tables.screenings,
        ))
    }
}
