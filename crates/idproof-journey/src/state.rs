//! State kinds in a journey definition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::guard::Guard;
use crate::response::StepResponse;
use idproof_core::JourneyType;

/// One outgoing edge of a basic state. Branches for an event are tried in
/// listed order; the first whose guard passes (or which is unconditional)
/// wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default)]
    pub guard: Option<Guard>,
    /// Name of the state this branch transitions to.
    pub target: String,
    /// Remedial sub-journey id this branch begins, surfaced to the caller
    /// as a mitigation-started signal for audit.
    #[serde(default)]
    pub mitigation_start: Option<String>,
}

/// A state that is terminal for one orchestration pass: it has a response
/// to emit and guarded edges keyed by incoming event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicState {
    pub response: StepResponse,
    #[serde(default)]
    pub events: HashMap<String, Vec<Branch>>,
}

/// A state that switches the session into a named sub-journey instead of
/// emitting a response. Never returned to the caller; the orchestrator
/// always follows it within the same call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyChangeState {
    pub journey_type: JourneyType,
    pub initial_state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum State {
    Basic(BasicState),
    JourneyChange(JourneyChangeState),
}
