use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobType};
use crate::recommend::selector::{similar_jobs, CandidateFilter};
use crate::recommend::types::RecommendationResult;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 10;
const DEFAULT_SIMILAR_LIMIT: usize = 5;
const MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsQuery {
    pub user_id: Uuid,
    /// Comma-separated skill list.
    pub skills: Option<String>,
    pub experience_level: Option<u32>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SimilarJobsQuery {
    pub limit: Option<usize>,
}

/// GET /api/v1/recommendations
///
/// Always 200 on the recommendation path, including fallback states; only
/// quota, validation, and store failures surface as errors. The quota check
/// runs before any candidate selection or scoring work.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationResult>, AppError> {
    state.rate_limiter.check(query.user_id)?;

    let limit = validate_limit(query.limit, DEFAULT_LIMIT)?;
    let filter = build_filter(&query)?;

    let mut result = state
        .orchestrator
        .get_recommendations(query.user_id, &filter)
        .await?;
    result.jobs.truncate(limit);

    Ok(Json(result))
}

/// GET /api/v1/recommendations/similar/:job_id
///
/// Pure Candidate Selector reuse: active postings sharing at least one
/// required skill with the given job. No scoring call is made.
pub async fn handle_similar_jobs(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(query): Query<SimilarJobsQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let limit = validate_limit(query.limit, DEFAULT_SIMILAR_LIMIT)?;

    let job = state
        .catalog
        .find_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let similar = similar_jobs(state.catalog.as_ref(), &job, limit).await?;
    Ok(Json(similar))
}

fn build_filter(query: &RecommendationsQuery) -> Result<CandidateFilter, AppError> {
    if let (Some(min), Some(max)) = (query.min_salary, query.max_salary) {
        if min > max {
            return Err(AppError::Validation(
                "minSalary must not exceed maxSalary".to_string(),
            ));
        }
    }

    let skills = query.skills.as_deref().map(parse_skill_list);

    Ok(CandidateFilter {
        skills,
        experience_level: query.experience_level,
        location: query.location.clone(),
        job_type: query.job_type,
        min_salary: query.min_salary,
        max_salary: query.max_salary,
    })
}

fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_limit(limit: Option<usize>, default: usize) -> Result<usize, AppError> {
    match limit {
        None => Ok(default),
        Some(n) if (1..=MAX_LIMIT).contains(&n) => Ok(n),
        Some(_) => Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        ))),
    }
}
