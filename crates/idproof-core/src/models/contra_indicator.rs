use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded fraud/risk flag against a user.
///
/// Contra-indicators accumulate over a user's lifetime and arrive here as an
/// immutable snapshot per invocation; the core never deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContraIndicator {
    /// Stable signal code, e.g. `"X01"`.
    pub code: String,
    /// Issuer that raised the signal.
    pub issuer: String,
    pub issued_at: DateTime<Utc>,
    /// Document context the signal was raised against,
    /// e.g. `"passport/GB/123456789"`.
    pub document: Option<String>,
    /// Mitigation identifiers already recorded against this signal.
    pub mitigations: Vec<String>,
}

impl ContraIndicator {
    pub fn is_mitigated(&self) -> bool {
        !self.mitigations.is_empty()
    }

    /// Document type prefix (text before the first `/`), used to filter
    /// mitigation routes.
    pub fn document_type(&self) -> Option<&str> {
        self.document
            .as_deref()
            .map(|d| d.split('/').next().unwrap_or(d))
    }
}

/// Scoring configuration for one signal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContraIndicatorConfig {
    pub code: String,
    /// Penalty while the signal is unmitigated.
    pub detected_score: u32,
    /// Reduced penalty once the signal is mitigated.
    pub checked_score: u32,
    /// External reporting code.
    pub return_code: Option<String>,
}

/// Maps a risk-signal code to a remedial journey event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitigationRoute {
    /// Remedial journey event to emit.
    pub event: String,
    /// Optional document-type filter. A route with no filter is a
    /// catch-all, chosen only if no more specific route matches.
    #[serde(default)]
    pub document: Option<String>,
}
