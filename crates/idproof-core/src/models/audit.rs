use serde::{Deserialize, Serialize};

/// Identifies the user a journey audit event concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventUser {
    pub user_id: String,
    pub session_id: String,
    pub ip_address: Option<String>,
}

/// Audit notifications emitted by the journey engine. These are for the
/// audit transport only; the state machine never reads them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditEventKind {
    /// A basic state's chosen branch began a remedial sub-journey.
    MitigationStart { mitigation_type: String },
    /// A journey-change was taken into a named sub-journey.
    SubjourneyStart { journey_type: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub user: AuditEventUser,
    #[serde(flatten)]
    pub kind: AuditEventKind,
}
