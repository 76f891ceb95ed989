/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed configuration: {reason}")]
    Malformed { reason: String },

    #[error("journey '{journey_type}' state '{state}' targets undefined state '{target}'")]
    DanglingTarget {
        journey_type: String,
        state: String,
        target: String,
    },

    #[error("journey '{journey_type}' has no initial state '{initial_state}'")]
    MissingInitialState {
        journey_type: String,
        initial_state: String,
    },
}
