//! Read-only decision context threaded into guard evaluation.

use idproof_cimit::NextMitigation;
use idproof_core::CoreConfig;

/// Snapshot of the engine outputs a single orchestration call computed
/// before entering the state machine. Guards read it; nothing writes it.
#[derive(Debug)]
pub struct DecisionContext<'a> {
    /// Name of the first accepted GPG45 profile the user's evidence
    /// satisfies, if any.
    pub matched_profile: Option<String>,
    /// Whether accumulated risk signals breach the scoring threshold.
    pub ci_breaching: bool,
    /// Remedial route selected for the breach, when one exists.
    pub mitigation: Option<NextMitigation>,
    pub config: &'a CoreConfig,
}

impl<'a> DecisionContext<'a> {
    /// A context with no engine findings, for states whose guards only
    /// consult configuration.
    pub fn empty(config: &'a CoreConfig) -> Self {
        Self {
            matched_profile: None,
            ci_breaching: false,
            mitigation: None,
            config,
        }
    }
}
