//! Scorer — the single point of contact with the external scoring backend.
//!
//! ARCHITECTURAL RULE: no other module may call the scoring backend directly.
//! Every call site goes through the `Scorer` trait so all of them share one
//! failure mode, and the orchestrator applies one fallback policy.
//!
//! No retries: the call runs under a user-facing latency budget, and a single
//! failed or timed-out attempt goes straight to the fallback path.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::recommend::types::{MatchRequest, MatchResult};

#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("scoring request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("scoring backend returned status {0}")]
    Status(u16),

    #[error("malformed scoring response: {0}")]
    Malformed(String),
}

/// The scoring seam. Carried in the orchestrator as an `Arc<dyn Scorer>` so
/// tests can substitute a canned backend.
///
/// Implementations return canonical results: match scores are fractions in
/// `[0, 1]` and every result refers to a job id from the request.
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn score(&self, request: &MatchRequest) -> Result<Vec<MatchResult>, ScorerError>;
}

/// HTTP client for the scoring backend's `POST /recommend` endpoint.
pub struct HttpScorer {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpScorer {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/recommend", base_url.trim_end_matches('/')),
            timeout,
        }
    }
}

#[async_trait]
impl Scorer for HttpScorer {
    async fn score(&self, request: &MatchRequest) -> Result<Vec<MatchResult>, ScorerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScorerError::Status(status.as_u16()));
        }

        let raw: Vec<MatchResult> = response
            .json()
            .await
            .map_err(|e| ScorerError::Malformed(e.to_string()))?;

        debug!("scoring backend returned {} results", raw.len());

        raw.into_iter()
            .map(|mut result| {
                result.match_score = canonicalize_score(result.match_score)?;
                Ok(result)
            })
            .collect()
    }
}

fn classify_reqwest_error(e: reqwest::Error) -> ScorerError {
    if e.is_timeout() {
        ScorerError::Timeout
    } else {
        ScorerError::Transport(e)
    }
}

/// Normalizes a backend score to the canonical `[0, 1]` fraction. The backend
/// reports percentages on some paths, so values above 1 are divided by 100.
pub(crate) fn canonicalize_score(raw: f64) -> Result<f64, ScorerError> {
    if !raw.is_finite() {
        return Err(ScorerError::Malformed(format!(
            "non-finite match score {raw}"
        )));
    }
    let score = if raw > 1.0 { raw / 100.0 } else { raw };
    Ok(score.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_pass_through() {
        assert_eq!(canonicalize_score(0.42).unwrap(), 0.42);
        assert_eq!(canonicalize_score(1.0).unwrap(), 1.0);
        assert_eq!(canonicalize_score(0.0).unwrap(), 0.0);
    }

    #[test]
    fn percentages_are_rescaled() {
        assert_eq!(canonicalize_score(85.0).unwrap(), 0.85);
        assert_eq!(canonicalize_score(100.0).unwrap(), 1.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(canonicalize_score(-0.3).unwrap(), 0.0);
        assert_eq!(canonicalize_score(250.0).unwrap(), 1.0);
    }

    #[test]
    fn non_finite_scores_are_malformed() {
        assert!(canonicalize_score(f64::NAN).is_err());
        assert!(canonicalize_score(f64::INFINITY).is_err());
    }

    #[test]
    fn extra_response_fields_are_tolerated() {
        let body = r#"[{
            "jobId": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "matchScore": 66.67,
            "skillMatch": ["rust"],
            "title": "Backend Engineer",
            "message": "Medium match - Some skills need improvement"
        }]"#;

        let results: Vec<MatchResult> = serde_json::from_str(body).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].missing_skills.is_empty());
    }

    #[test]
    fn wrong_types_fail_deserialization() {
        let body = r#"[{"jobId": "not-a-uuid", "matchScore": "high"}]"#;
        assert!(serde_json::from_str::<Vec<MatchResult>>(body).is_err());
    }
}
