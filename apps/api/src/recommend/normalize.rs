//! Match Request Normalizer — the single place where defaulting happens.
//!
//! The scoring backend must never receive a partially-shaped record, so every
//! candidate's requirements sub-fields are filled here (skills and
//! certifications to empty sets, experience to 0, education and credential
//! type to empty strings). Pure and total: every input field has a
//! well-defined default, so this can never fail.

use crate::models::job::JobPosting;
use crate::models::profile::UserProfile;
use crate::recommend::types::{MatchRequest, MatchRequestJob};

pub fn normalize(profile: &UserProfile, candidates: &[JobPosting]) -> MatchRequest {
    MatchRequest {
        user_profile: profile.clone(),
        jobs: candidates
            .iter()
            .map(|job| MatchRequestJob {
                id: job.id,
                title: job.title.clone(),
                description: job.description.clone(),
                requirements: job.requirements.clone().unwrap_or_default(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{JobRequirements, JobStatus, JobType, SalaryRange};
    use chrono::Utc;
    use uuid::Uuid;

    fn bare_job() -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: "Data Engineer".to_string(),
            description: "Pipelines".to_string(),
            requirements: None,
            location: "Remote".to_string(),
            job_type: JobType::Remote,
            salary: SalaryRange {
                min: 50_000,
                max: 70_000,
                currency: "USD".to_string(),
            },
            status: JobStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn missing_requirements_are_fully_defaulted() {
        let request = normalize(&UserProfile::default(), &[bare_job()]);

        let requirements = &request.jobs[0].requirements;
        assert!(requirements.skills.is_empty());
        assert_eq!(requirements.experience, 0);
        assert_eq!(requirements.education, "");
        assert_eq!(requirements.credential_type, "");
        assert!(requirements.certifications.is_empty());
    }

    #[test]
    fn present_requirements_pass_through_unchanged() {
        let mut job = bare_job();
        job.requirements = Some(JobRequirements {
            skills: vec!["python".to_string()],
            experience: 4,
            education: "Master's".to_string(),
            credential_type: "required".to_string(),
            certifications: vec!["AWS SAA".to_string()],
        });

        let request = normalize(&UserProfile::default(), &[job]);
        let requirements = &request.jobs[0].requirements;
        assert_eq!(requirements.skills, vec!["python"]);
        assert_eq!(requirements.experience, 4);
    }

    #[test]
    fn wire_format_always_carries_all_requirement_fields() {
        let request = normalize(&UserProfile::default(), &[bare_job()]);
        let body = serde_json::to_value(&request).unwrap();

        let requirements = &body["jobs"][0]["requirements"];
        for field in ["skills", "experience", "education", "type", "certifications"] {
            assert!(
                !requirements[field].is_null(),
                "field '{field}' missing from wire format"
            );
        }
        assert!(!body["userProfile"]["skills"].is_null());
        assert!(!body["userProfile"]["experience"].is_null());
        assert!(!body["userProfile"]["education"].is_null());
    }

    #[test]
    fn candidate_order_is_preserved() {
        let jobs = vec![bare_job(), bare_job(), bare_job()];
        let request = normalize(&UserProfile::default(), &jobs);
        let ids: Vec<_> = request.jobs.iter().map(|j| j.id).collect();
        let expected: Vec<_> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, expected);
    }
}
