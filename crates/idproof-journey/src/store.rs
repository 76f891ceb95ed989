//! In-memory session store on DashMap, for tests and demos. Real
//! deployments supply their own [`ISessionStore`] over durable storage.

use dashmap::DashMap;

use idproof_core::errors::StoreError;
use idproof_core::traits::ISessionStore;
use idproof_core::Session;

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Seed a session directly, outside the store trait.
    pub fn insert(&self, session: Session) {
        self.sessions.insert(session.session_id.clone(), session);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl ISessionStore for InMemorySessionStore {
    fn get(&self, session_id: &str) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.get(session_id).map(|r| r.clone()))
    }

    fn put(&self, session: Session) -> Result<(), StoreError> {
        self.sessions.insert(session.session_id.clone(), session);
        Ok(())
    }
}
