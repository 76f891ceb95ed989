//! # idproof-gpg45
//!
//! Evidence scoring against the GPG45 standard: converts credential
//! evidence blocks into a score vector and matches it against accepted
//! identity-strength profiles.

pub mod evaluator;
pub mod evidence;
pub mod profile;
pub mod requirements;
pub mod scores;

pub use evaluator::Gpg45Evaluator;
pub use profile::Gpg45Profile;
pub use requirements::EvidenceRequirement;
pub use scores::{Evidence, Gpg45Scores};
