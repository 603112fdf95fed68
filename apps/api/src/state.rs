use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::rate_limit::RateLimiter;
use crate::recommend::orchestrator::Orchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Data access and scoring sit behind trait objects so handlers and the
/// orchestrator can be exercised against in-memory collaborators in tests.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    /// Direct catalog access for the similar-jobs endpoint, which bypasses
    /// scoring entirely.
    pub catalog: Arc<dyn JobCatalog>,
    pub rate_limiter: Arc<RateLimiter>,
}
