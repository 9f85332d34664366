//!
//! # Session Management
//!
//! An explicit in-process session store, keyed by a random session id that
//! travels in the `user-session` cookie. Sessions are created on successful
//! login or signup, destroyed on logout, and expire after a fixed TTL.
//! Expired entries are dropped on access and swept periodically by a
//! background task.
//!
//! The store is injected into handlers via `web::Data<SessionStore>` rather
//! than hidden behind middleware state, so the authentication gate is visible
//! in every handler signature that needs it.

use actix_web::cookie::{time, Cookie};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "user-session";

/// Server-side state associated with one authenticated client.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub user_id: i32,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionData {
    fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// In-memory session store with TTL-based eviction.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, SessionData>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Creates a session for the given user and returns its id.
    pub fn create(&self, user_id: i32, username: &str) -> Uuid {
        let id = Uuid::new_v4();
        let data = SessionData {
            user_id,
            username: username.to_string(),
            expires_at: Utc::now() + self.ttl,
        };

        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        sessions.insert(id, data);
        id
    }

    /// Looks up a session by id. An expired session is removed and treated
    /// as absent.
    pub fn get(&self, id: Uuid) -> Option<SessionData> {
        {
            let sessions = self.sessions.read().expect("session store lock poisoned");
            match sessions.get(&id) {
                Some(data) if !data.is_expired() => return Some(data.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // The entry exists but has expired; evict it.
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        sessions.remove(&id);
        None
    }

    /// Destroys a session. Returns whether a live entry was removed.
    pub fn destroy(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        sessions.remove(&id).is_some()
    }

    /// Removes every expired session and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let before = sessions.len();
        sessions.retain(|_, data| !data.is_expired());
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().expect("session store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the session cookie for a freshly created session.
///
/// httpOnly keeps the id away from client scripts; the secure flag stays off
/// until the deployment fronts the API with HTTPS.
pub fn session_cookie(id: Uuid, ttl: Duration) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .secure(false)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .finish()
}

/// Builds the expired cookie sent on logout to clear the client's copy.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();
    cookie
}
