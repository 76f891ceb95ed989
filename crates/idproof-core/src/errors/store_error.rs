/// Failures from external collaborators (session store, credential store,
/// risk-signal store, audit transport). Possibly transient, unlike the
/// engine errors, so callers may choose to retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session store failure: {message}")]
    Session { message: String },

    #[error("credential store failure: {message}")]
    Credential { message: String },

    #[error("risk-signal store failure: {message}")]
    RiskSignal { message: String },

    #[error("failed to send audit event: {message}")]
    Audit { message: String },
}
