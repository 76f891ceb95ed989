use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::journey::JourneyType;
use super::mitigation::MitigationDetails;

/// Vector-of-trust level achieved by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vot {
    #[default]
    None,
    Medium,
    Strong,
}

/// Per-issuer success/failure snapshot, refreshed after each scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcStatus {
    pub issuer: String,
    pub is_successful: bool,
}

/// Mutable per-user journey record.
///
/// Read once at the start of an orchestration call and written back once at
/// the end. `user_state` must always name a state that exists in the
/// definition for `journey_type`; a violation is a fatal configuration error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    /// Subject the journey is proving.
    pub user_id: String,
    pub journey_type: JourneyType,
    pub user_state: String,
    pub creation_timestamp: DateTime<Utc>,
    /// OAuth-style error recorded by the session-timeout override.
    pub error_code: Option<String>,
    pub error_description: Option<String>,
    /// One record per unmitigated risk signal first seen in this session.
    pub mitigation_details: Vec<MitigationDetails>,
    pub vc_statuses: Vec<VcStatus>,
    pub vot: Vot,
    pub feature_set: Option<String>,
}

impl Session {
    pub fn new(
        session_id: impl Into<String>,
        user_id: impl Into<String>,
        journey_type: JourneyType,
        initial_state: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            user_id: user_id.into(),
            journey_type,
            user_state: initial_state.into(),
            creation_timestamp: Utc::now(),
            error_code: None,
            error_description: None,
            mitigation_details: Vec::new(),
            vc_statuses: Vec::new(),
            vot: Vot::None,
            feature_set: None,
        }
    }

    /// Age of the session at `now`, in whole seconds.
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.creation_timestamp).num_seconds()
    }
}
