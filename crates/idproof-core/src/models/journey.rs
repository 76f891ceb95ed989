use std::fmt;

use serde::{Deserialize, Serialize};

/// Names the state-machine definition currently governing a session.
///
/// Journey types are defined externally (one definition file per type),
/// so this is a case-sensitive name rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyType(String);

impl JourneyType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JourneyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JourneyType {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// One incoming journey event, as received by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyRequest {
    pub session_id: String,
    /// Event name to feed to the state machine.
    pub event: String,
    /// Page the caller believes it is on. Only consulted by the
    /// `OnPage` guard; never required.
    pub current_page: Option<String>,
    /// Optional feature-set name carried per request.
    pub feature_set: Option<String>,
    /// Caller IP, recorded on audit events.
    pub ip_address: Option<String>,
}

impl JourneyRequest {
    pub fn new(session_id: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            event: event.into(),
            current_page: None,
            feature_set: None,
            ip_address: None,
        }
    }

    pub fn with_current_page(mut self, page: impl Into<String>) -> Self {
        self.current_page = Some(page.into());
        self
    }
}
