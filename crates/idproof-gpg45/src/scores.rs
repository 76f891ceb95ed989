//! The GPG45 score vector and its combination rules.

use serde::{Deserialize, Serialize};

use crate::profile::Gpg45Profile;

/// A strength/validity pair from one document check.
///
/// The pairing is load-bearing: a failed (zero-validity) check must never
/// lend its strength to a passing check from another item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub strength: u32,
    pub validity: u32,
}

impl Evidence {
    pub const fn new(strength: u32, validity: u32) -> Self {
        Self { strength, validity }
    }

    /// Whether this pair meets a required pair.
    pub fn satisfies(&self, required: &Evidence) -> bool {
        self.strength >= required.strength && self.validity >= required.validity
    }
}

/// Aggregate of evidence across a credential set.
///
/// Document checks are kept as per-item pairs; activity is summed across
/// items carrying one; fraud and verification take the maximum seen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gpg45Scores {
    pub evidences: Vec<Evidence>,
    pub activity: u32,
    pub fraud: u32,
    pub verification: u32,
}

impl Gpg45Scores {
    pub fn new(evidences: Vec<Evidence>, activity: u32, fraud: u32, verification: u32) -> Self {
        Self {
            evidences,
            activity,
            fraud,
            verification,
        }
    }

    /// Whether this vector meets every component of `profile`.
    ///
    /// Evidence pairs are matched one-to-one: each required pair must be
    /// covered by a distinct scored pair satisfying both components.
    pub fn satisfies(&self, profile: &Gpg45Profile) -> bool {
        self.activity >= profile.activity
            && self.fraud >= profile.fraud
            && self.verification >= profile.verification
            && Self::evidences_cover(&self.evidences, &profile.evidences)
    }

    /// One-to-one cover check between scored and required pairs. The lists
    /// are tiny, so an exhaustive search is fine.
    fn evidences_cover(scored: &[Evidence], required: &[Evidence]) -> bool {
        fn cover(scored: &[Evidence], used: &mut [bool], required: &[Evidence]) -> bool {
            let Some((first, rest)) = required.split_first() else {
                return true;
            };
            for (i, candidate) in scored.iter().enumerate() {
                if !used[i] && candidate.satisfies(first) {
                    used[i] = true;
                    if cover(scored, used, rest) {
                        return true;
                    }
                    used[i] = false;
                }
            }
            false
        }

        let mut used = vec![false; scored.len()];
        cover(scored, &mut used, required)
    }
}
