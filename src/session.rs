use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an end user as reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-user memory of the last city that resolved successfully.
pub trait SessionStore: Send + Sync {
    fn last_city(&self, user: UserId) -> Option<String>;
    fn remember_city(&self, user: UserId, city: String);
}

/// Process-lifetime store. Entries are never evicted.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    cities: DashMap<UserId, String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn last_city(&self, user: UserId) -> Option<String> {
        self.cities.get(&user).map(|entry| entry.value().clone())
    }

    fn remember_city(&self, user: UserId, city: String) {
        self.cities.insert(user, city);
    }
}
