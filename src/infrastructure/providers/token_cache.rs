//! # Bearer Token Cache
//!
//! Cached OAuth2 bearer credentials with single-flight refresh.
//!
//! Token exchanges are rate-limited upstream, so the token is fetched once
//! and reused until it is within a safety margin of expiry. The cache slot
//! is guarded by an async mutex that is held across the refresh call, so
//! concurrent callers wait on one in-flight refresh instead of racing.

use crate::infrastructure::providers::error::ProviderResult;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Safety margin before expiry at which a token is considered stale.
const EXPIRY_SLACK: Duration = Duration::from_secs(60);

/// A bearer token with its expiry deadline.
#[derive(Debug, Clone)]
pub struct BearerToken {
    token: String,
    expires_at: Instant,
}

impl BearerToken {
    /// Creates a token that expires `expires_in_secs` from now.
    #[must_use]
    pub fn new(token: impl Into<String>, expires_in_secs: u64) -> Self {
        Self {
            token: token.into(),
            expires_at: Instant::now() + Duration::from_secs(expires_in_secs),
        }
    }

    /// Returns the token string.
    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns true if the token is still outside the expiry slack.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        Instant::now() + EXPIRY_SLACK < self.expires_at
    }
}

/// Async cache for one provider's bearer token.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<BearerToken>>,
}

impl TokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token, refreshing it first if absent or stale.
    ///
    /// The slot lock is held across `refresh`, so at most one refresh is
    /// in flight at a time and waiters pick up its result.
    ///
    /// # Errors
    ///
    /// Propagates the error from `refresh`; the slot is left empty so the
    /// next caller retries.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> ProviderResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ProviderResult<BearerToken>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.is_fresh() {
                return Ok(cached.token().to_string());
            }
        }
        *slot = None;
        let fresh = refresh().await?;
        let token = fresh.token().to_string();
        *slot = Some(fresh);
        Ok(token)
    }

    /// Drops the cached token so the next call re-authenticates.
    ///
    /// Called after an upstream 401 on a request that used the token.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}
