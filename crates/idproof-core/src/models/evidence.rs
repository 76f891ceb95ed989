use serde::{Deserialize, Serialize};

use crate::errors::Gpg45Error;

/// Which scoring rule an evidence item feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    /// Document-based check carrying a strength/validity pair.
    Evidence,
    /// Document check that also carries activity and verification scores
    /// (app-based document + biometric checks).
    CombinedIdentityCheck,
    ActivityHistory,
    IdentityFraud,
    Verification,
}

/// One scored fact extracted from a credential. Immutable once derived.
///
/// Sub-scores are optional because each credential type populates only the
/// components it checks; the populated set determines the [`EvidenceKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub issuer: String,
    #[serde(default)]
    pub strength: Option<u32>,
    #[serde(default)]
    pub validity: Option<u32>,
    #[serde(default)]
    pub activity_history: Option<u32>,
    #[serde(default)]
    pub identity_fraud: Option<u32>,
    #[serde(default)]
    pub verification: Option<u32>,
    /// Risk-signal codes attached to this item.
    #[serde(default)]
    pub ci: Vec<String>,
}

impl EvidenceItem {
    /// Derive the scoring rule for this item from its populated sub-scores.
    ///
    /// An item whose populated set maps to no known rule fails the whole
    /// scoring batch.
    pub fn kind(&self) -> Result<EvidenceKind, Gpg45Error> {
        match (
            self.strength.is_some() && self.validity.is_some(),
            self.activity_history.is_some(),
            self.identity_fraud.is_some(),
            self.verification.is_some(),
        ) {
            (true, false, false, false) => Ok(EvidenceKind::Evidence),
            (true, _, false, _) => Ok(EvidenceKind::CombinedIdentityCheck),
            (false, true, false, false) => Ok(EvidenceKind::ActivityHistory),
            (false, _, true, false) => Ok(EvidenceKind::IdentityFraud),
            (false, false, false, true) => Ok(EvidenceKind::Verification),
            _ => Err(Gpg45Error::UnknownEvidenceType {
                issuer: self.issuer.clone(),
            }),
        }
    }

    /// Whether the underlying check passed. A zero validity score is a
    /// failed document check regardless of strength.
    pub fn is_successful(&self) -> bool {
        match self.kind() {
            Ok(EvidenceKind::Evidence) | Ok(EvidenceKind::CombinedIdentityCheck) => {
                self.validity.unwrap_or(0) != 0
            }
            Ok(EvidenceKind::ActivityHistory) => self.activity_history.unwrap_or(0) != 0,
            Ok(EvidenceKind::IdentityFraud) => self.identity_fraud.unwrap_or(0) != 0,
            Ok(EvidenceKind::Verification) => self.verification.unwrap_or(0) != 0,
            Err(_) => false,
        }
    }
}
