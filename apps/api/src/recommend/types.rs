//! Shared shapes of the recommendation core: the canonical wire request sent
//! to the scoring backend, its expected response, and the ranked output
//! returned to callers.
//!
//! Match scores are canonically a fraction in `[0, 1]`. The scoring backend
//! historically reported percentages on some paths; `scorer` normalizes those
//! before results reach the orchestrator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::{JobPosting, JobRequirements};
use crate::models::profile::UserProfile;

/// Advisory attached when the user has no stored profile.
pub const ADVISORY_PROFILE_MISSING: &str =
    "Complete your profile to get personalized job recommendations.";

/// Advisory attached when no active postings pass the filters.
pub const ADVISORY_NO_ACTIVE_JOBS: &str = "No active jobs found.";

/// Advisory attached when the scoring backend could not be used.
pub const ADVISORY_SCORING_UNAVAILABLE: &str =
    "Scoring service unavailable; showing unranked results.";

/// The canonical request body for the scoring backend. Built only by
/// `normalize`, which guarantees every job carries a fully-shaped
/// requirements object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub user_profile: UserProfile,
    pub jobs: Vec<MatchRequestJob>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequestJob {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: JobRequirements,
}

/// One scored job as returned by the scoring backend. Extra response fields
/// are ignored; the optional skill lists default to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub job_id: Uuid,
    pub match_score: f64,
    #[serde(default)]
    pub skill_match: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

/// A posting merged with its score. The only score the orchestrator ever
/// fabricates itself is the fallback value of 0.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: f64,
    pub skill_match: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl RankedJob {
    /// A posting with no score: the fallback and missing-profile shape.
    pub fn unscored(job: JobPosting) -> Self {
        Self {
            job,
            match_score: 0.0,
            skill_match: Vec::new(),
            missing_skills: Vec::new(),
        }
    }
}

/// The response envelope for `GET /api/v1/recommendations`. Degraded states
/// carry an advisory string but are still HTTP 200.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub jobs: Vec<RankedJob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}
