//! Gpg45Evaluator — builds score vectors from evidence items and matches
//! them against accepted profiles.

use idproof_core::errors::Gpg45Error;
use idproof_core::models::{EvidenceItem, EvidenceKind};
use tracing::info;

use crate::profile::Gpg45Profile;
use crate::scores::{Evidence, Gpg45Scores};

/// The GPG45 evidence scoring engine. Stateless; every call is a pure
/// function of its inputs.
#[derive(Debug, Default)]
pub struct Gpg45Evaluator;

impl Gpg45Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate evidence items into a score vector.
    ///
    /// Document checks keep their strength/validity pairing; activity is
    /// summed; fraud and verification take the maximum. An item that maps
    /// to no known scoring rule aborts the whole batch.
    pub fn build_score(&self, items: &[EvidenceItem]) -> Result<Gpg45Scores, Gpg45Error> {
        let mut scores = Gpg45Scores::default();
        for item in items {
            match item.kind()? {
                EvidenceKind::Evidence => {
                    scores.evidences.push(Evidence::new(
                        item.strength.unwrap_or(0),
                        item.validity.unwrap_or(0),
                    ));
                }
                EvidenceKind::CombinedIdentityCheck => {
                    scores.evidences.push(Evidence::new(
                        item.strength.unwrap_or(0),
                        item.validity.unwrap_or(0),
                    ));
                    scores.activity += item.activity_history.unwrap_or(0);
                    scores.verification = scores.verification.max(item.verification.unwrap_or(0));
                }
                EvidenceKind::ActivityHistory => {
                    scores.activity += item.activity_history.unwrap_or(0);
                }
                EvidenceKind::IdentityFraud => {
                    scores.fraud = scores.fraud.max(item.identity_fraud.unwrap_or(0));
                    scores.activity += item.activity_history.unwrap_or(0);
                }
                EvidenceKind::Verification => {
                    scores.verification = scores.verification.max(item.verification.unwrap_or(0));
                }
            }
        }
        // Canonical order: equal evidence sets compare equal regardless of
        // input order.
        scores
            .evidences
            .sort_unstable_by_key(|e| std::cmp::Reverse((e.strength, e.validity)));
        Ok(scores)
    }

    /// Whether `scores` meets every component of `profile`.
    pub fn matches_profile(&self, scores: &Gpg45Scores, profile: &Gpg45Profile) -> bool {
        scores.satisfies(profile)
    }

    /// First satisfied profile in caller-supplied order, or `None`.
    pub fn first_matching_profile<'a>(
        &self,
        scores: &Gpg45Scores,
        profiles: &'a [Gpg45Profile],
    ) -> Option<&'a Gpg45Profile> {
        let matched = profiles.iter().find(|p| scores.satisfies(p));
        if let Some(profile) = matched {
            info!(profile = %profile.name, "GPG45 profile matched");
        }
        matched
    }
}
