use serde::{Deserialize, Serialize};

/// Progress of one remedial sub-journey offered for a risk signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitigationJourneyDetails {
    /// Event identifier of the remedial sub-journey.
    pub journey_id: String,
    pub complete: bool,
}

impl MitigationJourneyDetails {
    pub fn new(journey_id: impl Into<String>) -> Self {
        Self {
            journey_id: journey_id.into(),
            complete: false,
        }
    }
}

/// Tracks mitigation of one risk signal within the active session.
///
/// Created the first time a previously-unseen breaching signal is observed;
/// never recreated for a signal already tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitigationDetails {
    /// The risk-signal code being mitigated.
    pub code: String,
    /// Remedial sub-journeys offered so far, in offer order.
    pub mitigation_journeys: Vec<MitigationJourneyDetails>,
}

impl MitigationDetails {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            mitigation_journeys: Vec::new(),
        }
    }

    /// Whether any offered remedial sub-journey is still incomplete.
    pub fn in_progress(&self) -> bool {
        self.mitigation_journeys.iter().any(|mj| !mj.complete)
    }
}
