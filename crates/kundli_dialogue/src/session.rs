//! Per-user acquisition sessions and the store that holds them.
//!
//! One session per user at a time. Sessions expire after ten minutes of
//! inactivity; expiry is checked lazily on access, so an expired session
//! reads as absent. The store is a trait so the flow can run against an
//! in-memory map in tests and a shared cache in a larger deployment.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use serde::Serialize;

use crate::intent::Language;

/// Inactivity timeout after which a session reads as absent.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(600);

/// Which birth detail the flow is currently asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Step {
    AskName,
    AskDate,
    AskTime,
    AskPlace,
}

/// One in-flight acquisition conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct KundliSession {
    pub step: Step,
    pub name: Option<String>,
    /// Canonical `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Canonical 24-hour `HH:MM`.
    pub time: Option<String>,
    pub place: Option<String>,
    pub language: Language,
    pub last_active: SystemTime,
}

impl KundliSession {
    /// Fresh session at the first step.
    pub fn new(language: Language) -> Self {
        Self {
            step: Step::AskName,
            name: None,
            date: None,
            time: None,
            place: None,
            language,
            last_active: SystemTime::now(),
        }
    }

    /// Whether the inactivity timeout has elapsed. A clock stepped
    /// backwards reads as not expired.
    pub fn is_expired(&self) -> bool {
        self.last_active
            .elapsed()
            .map(|idle| idle > SESSION_TIMEOUT)
            .unwrap_or(false)
    }

    pub fn touch(&mut self) {
        self.last_active = SystemTime::now();
    }
}

/// Session storage keyed by user id.
///
/// `get` must treat expired sessions as absent and is free to drop them.
pub trait SessionStore {
    fn get(&self, user_id: &str) -> Option<KundliSession>;
    fn put(&self, user_id: &str, session: KundliSession);
    fn delete(&self, user_id: &str);
    /// Drop every expired session. Optional eager cleanup; `get` already
    /// handles expiry lazily.
    fn sweep(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn get(&self, user_id: &str) -> Option<KundliSession> {
        (**self).get(user_id)
    }

    fn put(&self, user_id: &str, session: KundliSession) {
        (**self).put(user_id, session)
    }

    fn delete(&self, user_id: &str) {
        (**self).delete(user_id)
    }

    fn sweep(&self) {
        (**self).sweep()
    }
}

/// Process-local store backed by a mutex-guarded map.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, KundliSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, user_id: &str) -> Option<KundliSession> {
        let mut sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match sessions.get(user_id) {
            Some(session) if session.is_expired() => {
                sessions.remove(user_id);
                None
            }
            Some(session) => Some(session.clone()),
            None => None,
        }
    }

    fn put(&self, user_id: &str, session: KundliSession) {
        let mut sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.insert(user_id.to_string(), session);
    }

    fn delete(&self, user_id: &str) {
        let mut sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.remove(user_id);
    }

    fn sweep(&self) {
        let mut sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.retain(|_, session| !session.is_expired());
    }
}
