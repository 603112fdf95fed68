use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "job_type", rename_all = "lowercase")]
pub enum JobType {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
}

/// Hard requirements attached to a posting. Every field is defaulted so a
/// partially-filled document deserializes to a fully-shaped value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobRequirements {
    pub skills: Vec<String>,
    /// Years of experience required.
    pub experience: u32,
    pub education: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
    pub currency: String,
}

/// A posting as stored in the catalog. The recommendation core only reads
/// these; the employer-facing CRUD surface owns their lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Absent on legacy postings; the normalizer fills defaults before the
    /// scoring backend ever sees the job.
    pub requirements: Option<JobRequirements>,
    pub location: String,
    pub job_type: JobType,
    pub salary: SalaryRange,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}
