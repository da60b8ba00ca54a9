//! Analytics: counts and averages over persisted screenings.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::round2;
use crate::models::screening::ScreeningRow;
use crate::state::AppState;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_resumes: i64,
    pub total_jobs: i64,
    pub total_screenings: i64,
    /// 0 when there are no screenings.
    pub average_overall_score: f64,
    pub average_skill_score: f64,
    /// Recommendation label → count. Only labels that occur are present.
    pub recommendations: BTreeMap<String, i64>,
}

impl AnalyticsSummary {
    /// Averages rounded to two decimals for presentation.
    pub fn for_display(mut self) -> Self {
        self.average_overall_score = round2(self.average_overall_score);
        self.average_skill_score = round2(self.average_skill_score);
        self
    }
}

/// Aggregates in-process screenings. Mirrors the SQL aggregation in the Postgres store.
pub fn summarize(
    total_resumes: usize,
    total_jobs: usize,
    screenings: &[ScreeningRow],
) -> AnalyticsSummary {
    let mut recommendations = BTreeMap::new();
    for screening in screenings {
        *recommendations
            .entry(screening.recommendation.clone())
            .or_insert(0) += 1;
    }

    AnalyticsSummary {
        total_resumes: total_resumes as i64,
        total_jobs: total_jobs as i64,
        total_screenings: screenings.len() as i64,
        average_overall_score: mean(screenings.iter().map(|s| s.overall_score)),
        average_skill_score: mean(screenings.iter().map(|s| s.skill_match_score)),
        recommendations,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// GET /api/v1/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let summary = state.store.analytics().await?;
    Ok(Json(summary.for_display()))
}
