//! Recommendation Orchestrator — the top-level "get ranked matches"
//! operation.
//!
//! The scoring backend is an independently-deployed dependency with no uptime
//! guarantee. The defining property here is that this component's
//! availability never depends on the backend's: every scorer failure
//! (timeout, transport, non-2xx, malformed payload) downgrades to the full
//! unscored candidate set with an advisory, never an error to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::catalog::JobCatalog;
use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::profiles::ProfileStore;
use crate::recommend::normalize::normalize;
use crate::recommend::scorer::Scorer;
use crate::recommend::selector::{select_candidates, CandidateFilter};
use crate::recommend::types::{
    MatchResult, RankedJob, RecommendationResult, ADVISORY_NO_ACTIVE_JOBS,
    ADVISORY_PROFILE_MISSING, ADVISORY_SCORING_UNAVAILABLE,
};

pub struct Orchestrator {
    catalog: Arc<dyn JobCatalog>,
    profiles: Arc<dyn ProfileStore>,
    scorer: Arc<dyn Scorer>,
}

impl Orchestrator {
    pub fn new(
        catalog: Arc<dyn JobCatalog>,
        profiles: Arc<dyn ProfileStore>,
        scorer: Arc<dyn Scorer>,
    ) -> Self {
        Self {
            catalog,
            profiles,
            scorer,
        }
    }

    /// Ranked matches for one user. Errors only on catalog or profile-store
    /// failure; there is no meaningful fallback without candidate data.
    pub async fn get_recommendations(
        &self,
        user_id: Uuid,
        filter: &CandidateFilter,
    ) -> Result<RecommendationResult, AppError> {
        let profile = self.profiles.fetch(user_id).await?;
        let candidates = select_candidates(self.catalog.as_ref(), filter).await?;

        // ProfileMissing: nothing to score against. Everything the filters
        // admit comes back unscored, with a nudge to finish the profile.
        let Some(profile) = profile else {
            return Ok(RecommendationResult {
                jobs: candidates.into_iter().map(RankedJob::unscored).collect(),
                advisory: Some(ADVISORY_PROFILE_MISSING.to_string()),
            });
        };

        if candidates.is_empty() {
            return Ok(RecommendationResult {
                jobs: Vec::new(),
                advisory: Some(ADVISORY_NO_ACTIVE_JOBS.to_string()),
            });
        }

        let request = normalize(&profile, &candidates);
        match self.scorer.score(&request).await {
            Ok(results) => Ok(RecommendationResult {
                jobs: merge_and_rank(candidates, results),
                advisory: None,
            }),
            Err(e) => {
                warn!("scoring backend unavailable, serving unranked results: {e}");
                Ok(RecommendationResult {
                    jobs: candidates.into_iter().map(RankedJob::unscored).collect(),
                    advisory: Some(ADVISORY_SCORING_UNAVAILABLE.to_string()),
                })
            }
        }
    }
}

/// Merges scorer results onto the candidate set by job id and sorts by
/// descending score. Candidates the backend skipped stay in the output at
/// score 0; results for unknown ids are dropped. The sort is stable, so ties
/// keep the candidate set's original relative order.
fn merge_and_rank(candidates: Vec<JobPosting>, results: Vec<MatchResult>) -> Vec<RankedJob> {
    let mut by_id: HashMap<Uuid, MatchResult> =
        results.into_iter().map(|r| (r.job_id, r)).collect();

    let mut ranked: Vec<RankedJob> = candidates
        .into_iter()
        .map(|job| match by_id.remove(&job.id) {
            Some(result) => RankedJob {
                match_score: result.match_score,
                skill_match: result.skill_match,
                missing_skills: result.missing_skills,
                job,
            },
            None => RankedJob::unscored(job),
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    ranked
}
