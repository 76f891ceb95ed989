//! Error types for the idproof engines.
//!
//! Each engine has its own error enum; `IdproofError` unifies them for
//! callers that cross engine boundaries. All engine errors are
//! non-retryable: they indicate a logic, data, or configuration defect.
//! Collaborator (store) failures are kept distinguishable via
//! [`StoreError`] so the orchestrator can decide retry vs. surface.

mod cimit_error;
mod config_error;
mod gpg45_error;
mod journey_error;
mod store_error;

pub use cimit_error::CimitError;
pub use config_error::ConfigError;
pub use gpg45_error::Gpg45Error;
pub use journey_error::JourneyError;
pub use store_error::StoreError;

/// Result alias used across the workspace.
pub type IdproofResult<T> = Result<T, IdproofError>;

/// Unified error for the journey core.
#[derive(Debug, thiserror::Error)]
pub enum IdproofError {
    #[error(transparent)]
    Journey(#[from] JourneyError),

    #[error(transparent)]
    Gpg45(#[from] Gpg45Error),

    #[error(transparent)]
    Cimit(#[from] CimitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
