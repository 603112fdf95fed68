use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::errors::AppError;

/// Per-user sliding-window request quota, checked at the HTTP entry point
/// before any candidate selection or scoring work runs.
///
/// In-process only: each API instance enforces its own window.
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    hits: Mutex<HashMap<Uuid, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Records one request for `user_id`, or rejects it if the quota for the
    /// current window is already spent.
    pub fn check(&self, user_id: Uuid) -> Result<(), AppError> {
        self.check_at(user_id, Instant::now())
    }

    fn check_at(&self, user_id: Uuid, now: Instant) -> Result<(), AppError> {
        let mut hits = self.hits.lock().unwrap_or_else(|e| e.into_inner());
        let window = self.window;
        let user_hits = hits.entry(user_id).or_default();

        while let Some(front) = user_hits.front() {
            if now.duration_since(*front) >= window {
                user_hits.pop_front();
            } else {
                break;
            }
        }

        if user_hits.len() >= self.max_requests {
            return Err(AppError::RateLimited);
        }

        user_hits.push_back(now);
        Ok(())
    }
}
