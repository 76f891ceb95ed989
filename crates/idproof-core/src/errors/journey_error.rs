/// State-machine and orchestration errors.
#[derive(Debug, thiserror::Error)]
pub enum JourneyError {
    #[error("session '{session_id}' not found or malformed")]
    InvalidSession { session_id: String },

    #[error("unknown state '{state}' in journey '{journey_type}'")]
    UnknownState { journey_type: String, state: String },

    #[error("unknown event '{event}' for state '{state}'")]
    UnknownEvent { state: String, event: String },

    #[error("no branch matched for event '{event}' in state '{state}'")]
    NoMatchingBranch { state: String, event: String },

    #[error("no journey definition loaded for journey type '{journey_type}'")]
    MissingJourneyDefinition { journey_type: String },

    #[error("journey-change limit of {limit} exceeded starting from state '{start_state}'")]
    JourneyChangeLimitExceeded { start_state: String, limit: usize },
}
