use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserProfile;

/// Read-only access to stored jobseeker profiles. The identity subsystem
/// writes them; the recommendation core only fetches a snapshot per request.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The stored profile, or `None` when the user has not completed one.
    async fn fetch(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn fetch(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError> {
        let row: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT profile FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(doc) => {
                // Sparse documents are fine; every profile field defaults.
                let profile: UserProfile = serde_json::from_value(doc)
                    .with_context(|| format!("stored profile for user {user_id} is not valid"))?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }
}
