//! Derivation of the evidence strength to request from a new credential
//! issuer, given a target profile family.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::Gpg45Profile;

/// The minimum document check a new credential issuer would need to
/// perform for the journey to still reach an accepted profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRequirement {
    pub strength: u32,
    pub validity: u32,
}

/// Select the lowest-strength viable evidence request across the target
/// profiles.
///
/// A profile is viable for a fresh evidence request only if it needs at
/// most one document check, tolerates zero activity and fraud scoring, and
/// its verification requirement is within `verification_ceiling`. Among
/// viable profiles the lowest strength wins, tie-broken by lowest validity.
///
/// `None` means no viable evidence request exists. That is a valid
/// negative result, not a failure.
pub fn minimal_evidence_request(
    target_profiles: &[Gpg45Profile],
    verification_ceiling: u32,
) -> Option<EvidenceRequirement> {
    let viable = target_profiles
        .iter()
        .filter(|p| p.evidences.len() <= 1)
        .filter(|p| p.activity == 0 && p.fraud == 0)
        .filter(|p| p.verification <= verification_ceiling)
        .map(|p| match p.evidences.first() {
            Some(evidence) => EvidenceRequirement {
                strength: evidence.strength,
                validity: evidence.validity,
            },
            None => EvidenceRequirement {
                strength: 0,
                validity: 0,
            },
        })
        .min_by_key(|req| (req.strength, req.validity));

    if viable.is_none() {
        debug!("no viable evidence request for target profiles");
    }
    viable
}
