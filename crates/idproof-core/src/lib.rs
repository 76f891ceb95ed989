//! # idproof-core
//!
//! Foundation crate for the idproof identity-proofing journey engine.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CoreConfig;
pub use errors::{IdproofError, IdproofResult};
pub use models::{ContraIndicator, EvidenceItem, JourneyType, Session};
