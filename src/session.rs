//! In-memory registry of extraction results, keyed by session id.
//!
//! Values are stored and returned whole. Expiry is decided by an
//! [`ExpiryPolicy`]; expired sessions read as absent and are dropped the
//! next time they are looked up or swept.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use uuid::Uuid;

use crate::core::ResultBundle;

/// Fresh session id (UUID v4, hyphenated).
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// True if `id` has the shape of an id from [`new_session_id`].
pub fn is_session_id(id: &str) -> bool {
    Uuid::try_parse(id).is_ok()
}

/// Decides whether a session stored at some instant is still live.
pub trait ExpiryPolicy: Send + Sync {
    fn is_expired(&self, stored_at: Instant, now: Instant) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverExpire;

impl ExpiryPolicy for NeverExpire {
    fn is_expired(&self, _stored_at: Instant, _now: Instant) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExpireAfter(pub Duration);

impl ExpiryPolicy for ExpireAfter {
    fn is_expired(&self, stored_at: Instant, now: Instant) -> bool {
        now.saturating_duration_since(stored_at) >= self.0
    }
}

struct StoredSession {
    bundle: Arc<ResultBundle>,
    stored_at: Instant,
}

pub struct SessionStore {
    sessions: Mutex<HashMap<String, StoredSession>>,
    policy: Box<dyn ExpiryPolicy>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(NeverExpire)
    }
}

impl SessionStore {
    pub fn new(policy: impl ExpiryPolicy + 'static) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            policy: Box::new(policy),
        }
    }

    /// Store with a TTL when one is given, otherwise forever.
    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        match ttl {
            Some(ttl) => Self::new(ExpireAfter(ttl)),
            None => Self::default(),
        }
    }

    /// Insert or replace the bundle for `session_id`.
    pub fn put(&self, session_id: &str, bundle: ResultBundle) -> Arc<ResultBundle> {
        let bundle = Arc::new(bundle);
        self.sessions.lock().insert(
            session_id.to_string(),
            StoredSession {
                bundle: Arc::clone(&bundle),
                stored_at: Instant::now(),
            },
        );
        bundle
    }

    pub fn get(&self, session_id: &str) -> Option<Arc<ResultBundle>> {
        let mut sessions = self.sessions.lock();
        let stored = sessions.get(session_id)?;

        if self.policy.is_expired(stored.stored_at, Instant::now()) {
            sessions.remove(session_id);
            return None;
        }
        Some(Arc::clone(&stored.bundle))
    }

    /// Remove a session. Returns whether a live one existed.
    pub fn delete(&self, session_id: &str) -> bool {
        match self.sessions.lock().remove(session_id) {
            Some(stored) => !self.policy.is_expired(stored.stored_at, Instant::now()),
            None => false,
        }
    }

    /// Number of stored sessions, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    /// Drop every expired session, returning their ids.
    pub fn evict_expired(&self) -> Vec<String> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock();
        let expired: Vec<String> = sessions
            .iter()
            .filter(|(_, stored)| self.policy.is_expired(stored.stored_at, now))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            sessions.remove(id);
        }
        expired
    }
}
