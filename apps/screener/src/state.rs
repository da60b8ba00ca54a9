use std::sync::Arc;

use crate::screening::engine::Screener;
use crate::screening::normalizer::SkillNormalizer;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres when DATABASE_URL is set, in-memory otherwise.
    pub store: Arc<dyn Store>,
    /// Pluggable screener. Default: ScreeningEngine built from ScoringConfig at startup.
    pub screener: Arc<dyn Screener>,
    /// Same alias table the screener uses; dedups skills on intake.
    pub normalizer: Arc<SkillNormalizer>,
}
