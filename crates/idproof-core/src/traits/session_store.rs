use crate::errors::StoreError;
use crate::models::Session;

/// Session persistence. The orchestrator reads once at the start of a call
/// and writes once at the end; at-most-one-concurrent-event-per-session is
/// guaranteed by the surrounding system, not here.
pub trait ISessionStore: Send + Sync {
    /// Fetch a session by id. `Ok(None)` when the session does not exist.
    fn get(&self, session_id: &str) -> Result<Option<Session>, StoreError>;

    /// Write back a session. Last writer wins.
    fn put(&self, session: Session) -> Result<(), StoreError>;
}
