use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRequirements, JobStatus, JobType, SalaryRange};

/// Read-only view of the job catalog. Carried in `AppState` as an
/// `Arc<dyn JobCatalog>` so the recommendation core can be exercised against
/// an in-memory catalog in tests.
#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// All active postings, newest first. An empty catalog is not an error;
    /// only an unreachable store is.
    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError>;

    /// A single posting by id regardless of status, or `None` if unknown.
    async fn find_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError>;
}

/// Database row shape; JSONB columns decode through `Json` wrappers.
#[derive(FromRow)]
struct JobRow {
    id: Uuid,
    title: String,
    description: String,
    requirements: Option<Json<JobRequirements>>,
    location: String,
    job_type: JobType,
    salary: Json<SalaryRange>,
    status: JobStatus,
    created_at: DateTime<Utc>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        JobPosting {
            id: row.id,
            title: row.title,
            description: row.description,
            requirements: row.requirements.map(|Json(r)| r),
            location: row.location,
            job_type: row.job_type,
            salary: row.salary.0,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

const JOB_COLUMNS: &str =
    "id, title, description, requirements, location, job_type, salary, status, created_at";

pub struct PgJobCatalog {
    pool: PgPool,
}

impl PgJobCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobCatalog for PgJobCatalog {
    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE status = 'active' ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(JobPosting::from))
    }
}
