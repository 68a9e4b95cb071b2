//! Staff sessions held in an in-memory moka cache
//!
//! A successful login issues a random bearer token. Handlers that need a
//! logged-in staff member take a [`StaffSession`] argument, which resolves the
//! token from the `Authorization` header for that request only.

use std::time::Duration;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use moka::future::Cache;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::AppState;

/// Sessions go stale after this long without a request.
const SESSION_IDLE: Duration = Duration::from_secs(60 * 60);

const MAX_SESSIONS: u64 = 1_000;

/// An authenticated staff member, scoped to one request
#[derive(Debug, Clone)]
pub struct StaffSession {
    pub token: String,
    pub username: String,
}

/// Live staff sessions (token -> session)
#[derive(Clone)]
pub struct SessionCache {
    sessions: Cache<String, StaffSession>,
    ttl: Duration,
}

impl SessionCache {
    /// Create a session cache whose entries live for at most `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_live(ttl)
                .time_to_idle(SESSION_IDLE.min(ttl))
                .build(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session and return it with its fresh token
    pub async fn create(&self, username: &str) -> StaffSession {
        let session = StaffSession {
            token: Uuid::new_v4().simple().to_string(),
            username: username.to_string(),
        };
        self.sessions
            .insert(session.token.clone(), session.clone())
            .await;
        info!(username, "Staff session started");
        session
    }

    pub async fn get(&self, token: &str) -> Option<StaffSession> {
        self.sessions.get(token).await
    }

    /// End a session
    pub async fn invalidate(&self, token: &str) {
        self.sessions.invalidate(token).await;
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for StaffSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;
        state.sessions.get(token).await.ok_or(AppError::Unauthorized)
    }
}
