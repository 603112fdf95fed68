//! Candidate Selector — picks the active postings a scoring pass will rank.
//!
//! Filters are conjunctive across fields; the multi-valued skills field is a
//! disjunction (a posting matches if it requires at least one of the supplied
//! skills). An empty result is a normal outcome, never an error.

use crate::catalog::JobCatalog;
use crate::errors::AppError;
use crate::models::job::{JobPosting, JobStatus, JobType};

#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub skills: Option<Vec<String>>,
    /// Maximum years of required experience the seeker is willing to meet.
    pub experience_level: Option<u32>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
}

/// Active postings passing all supplied filters, in catalog order
/// (newest first). Absent filter fields impose no constraint.
pub async fn select_candidates(
    catalog: &dyn JobCatalog,
    filter: &CandidateFilter,
) -> Result<Vec<JobPosting>, AppError> {
    let jobs = catalog.active_jobs().await?;
    Ok(jobs
        .into_iter()
        .filter(|job| matches_filter(job, filter))
        .collect())
}

/// Active postings sharing at least one required skill with `job`, excluding
/// `job` itself. Used by the similar-jobs endpoint; no scoring involved.
pub async fn similar_jobs(
    catalog: &dyn JobCatalog,
    job: &JobPosting,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let skills = job
        .requirements
        .as_ref()
        .map(|r| r.skills.clone())
        .unwrap_or_default();
    if skills.is_empty() {
        return Ok(Vec::new());
    }

    let filter = CandidateFilter {
        skills: Some(skills),
        ..CandidateFilter::default()
    };

    let mut similar: Vec<JobPosting> = select_candidates(catalog, &filter)
        .await?
        .into_iter()
        .filter(|candidate| candidate.id != job.id)
        .collect();
    similar.truncate(limit);
    Ok(similar)
}

pub fn matches_filter(job: &JobPosting, filter: &CandidateFilter) -> bool {
    // Only active postings are ever eligible, whatever the catalog returned.
    if job.status != JobStatus::Active {
        return false;
    }

    if let Some(skills) = &filter.skills {
        if !skills.is_empty() && !requires_any_skill(job, skills) {
            return false;
        }
    }

    if let Some(max_years) = filter.experience_level {
        let required = job
            .requirements
            .as_ref()
            .map(|r| r.experience)
            .unwrap_or(0);
        if required > max_years {
            return false;
        }
    }

    if let Some(location) = &filter.location {
        if !job.location.eq_ignore_ascii_case(location) {
            return false;
        }
    }

    if let Some(job_type) = filter.job_type {
        if job.job_type != job_type {
            return false;
        }
    }

    // Salary filters match on band overlap, not containment.
    if let Some(min) = filter.min_salary {
        if job.salary.max < min {
            return false;
        }
    }
    if let Some(max) = filter.max_salary {
        if job.salary.min > max {
            return false;
        }
    }

    true
}

fn requires_any_skill(job: &JobPosting, wanted: &[String]) -> bool {
    let Some(requirements) = &job.requirements else {
        return false;
    };
    requirements.skills.iter().any(|required| {
        wanted
            .iter()
            .any(|w| required.trim().eq_ignore_ascii_case(w.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{JobRequirements, SalaryRange};
    use chrono::Utc;
    use uuid::Uuid;

    fn make_job(title: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{title} role"),
            requirements: Some(JobRequirements {
                skills: skills.iter().map(|s| s.to_string()).collect(),
                experience: 2,
                education: "Bachelor's".to_string(),
                credential_type: "required".to_string(),
                certifications: vec![],
            }),
            location: "Berlin".to_string(),
            job_type: JobType::Remote,
            salary: SalaryRange {
                min: 60_000,
                max: 90_000,
                currency: "USD".to_string(),
            },
            status: JobStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_filter_matches_any_active_posting() {
        let job = make_job("Backend Engineer", &["rust", "postgres"]);
        assert!(matches_filter(&job, &CandidateFilter::default()));
    }

    #[test]
    fn closed_postings_never_match() {
        let mut job = make_job("Backend Engineer", &["rust"]);
        job.status = JobStatus::Closed;
        assert!(!matches_filter(&job, &CandidateFilter::default()));
    }

    #[test]
    fn skills_filter_is_a_disjunction() {
        let job = make_job("Backend Engineer", &["rust", "postgres"]);
        let filter = CandidateFilter {
            skills: Some(vec!["go".to_string(), "postgres".to_string()]),
            ..CandidateFilter::default()
        };
        assert!(matches_filter(&job, &filter));

        let filter = CandidateFilter {
            skills: Some(vec!["go".to_string(), "kubernetes".to_string()]),
            ..CandidateFilter::default()
        };
        assert!(!matches_filter(&job, &filter));
    }

    #[test]
    fn skill_comparison_ignores_case_and_whitespace() {
        let job = make_job("Backend Engineer", &[" Rust "]);
        let filter = CandidateFilter {
            skills: Some(vec!["rust".to_string()]),
            ..CandidateFilter::default()
        };
        assert!(matches_filter(&job, &filter));
    }

    #[test]
    fn filters_are_conjunctive_across_fields() {
        let job = make_job("Backend Engineer", &["rust"]);
        let filter = CandidateFilter {
            skills: Some(vec!["rust".to_string()]),
            location: Some("Berlin".to_string()),
            job_type: Some(JobType::Remote),
            ..CandidateFilter::default()
        };
        assert!(matches_filter(&job, &filter));

        let filter = CandidateFilter {
            skills: Some(vec!["rust".to_string()]),
            location: Some("Tokyo".to_string()),
            ..CandidateFilter::default()
        };
        assert!(!matches_filter(&job, &filter));
    }

    #[test]
    fn experience_filter_is_an_upper_bound_on_required_years() {
        let job = make_job("Backend Engineer", &["rust"]);
        let filter = CandidateFilter {
            experience_level: Some(1),
            ..CandidateFilter::default()
        };
        assert!(!matches_filter(&job, &filter));

        let filter = CandidateFilter {
            experience_level: Some(3),
            ..CandidateFilter::default()
        };
        assert!(matches_filter(&job, &filter));
    }

    #[test]
    fn missing_requirements_default_to_zero_experience() {
        let mut job = make_job("Backend Engineer", &[]);
        job.requirements = None;
        let filter = CandidateFilter {
            experience_level: Some(0),
            ..CandidateFilter::default()
        };
        assert!(matches_filter(&job, &filter));
    }

    #[test]
    fn salary_filters_match_on_band_overlap() {
        let job = make_job("Backend Engineer", &["rust"]);

        let filter = CandidateFilter {
            min_salary: Some(85_000),
            ..CandidateFilter::default()
        };
        assert!(matches_filter(&job, &filter));

        let filter = CandidateFilter {
            min_salary: Some(95_000),
            ..CandidateFilter::default()
        };
        assert!(!matches_filter(&job, &filter));

        let filter = CandidateFilter {
            max_salary: Some(55_000),
            ..CandidateFilter::default()
        };
        assert!(!matches_filter(&job, &filter));
    }
}
