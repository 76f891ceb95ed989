//! Named minimum-score requirements from the GPG45 standard.

use serde::{Deserialize, Serialize};

use crate::scores::Evidence;

/// A named minimum-score requirement. Static configuration, never mutated
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gpg45Profile {
    pub name: String,
    /// Required strength/validity pairs, one per document check.
    pub evidences: Vec<Evidence>,
    pub activity: u32,
    pub fraud: u32,
    pub verification: u32,
}

impl Gpg45Profile {
    pub fn new(
        name: impl Into<String>,
        evidences: Vec<Evidence>,
        activity: u32,
        fraud: u32,
        verification: u32,
    ) -> Self {
        Self {
            name: name.into(),
            evidences,
            activity,
            fraud,
            verification,
        }
    }

    /// Medium confidence via one strong document (e.g. passport) plus
    /// fraud and verification checks.
    pub fn m1a() -> Self {
        Self::new("M1A", vec![Evidence::new(4, 2)], 0, 1, 2)
    }

    /// Medium confidence via an app-based document check carrying activity
    /// history, plus fraud and verification checks.
    pub fn m1b() -> Self {
        Self::new("M1B", vec![Evidence::new(3, 2)], 1, 1, 2)
    }

    /// Medium confidence via a fully validated medium-strength document.
    pub fn m1c() -> Self {
        Self::new("M1C", vec![Evidence::new(3, 3)], 1, 1, 2)
    }

    /// Accepted medium-confidence profiles, coarse-to-fine. Order matters:
    /// profiles are not totally ordered by strictness, and callers rely on
    /// first-match precedence.
    pub fn accepted_medium() -> Vec<Self> {
        vec![Self::m1a(), Self::m1b(), Self::m1c()]
    }
}
