//! Guard predicates on state-machine branches.
//!
//! A closed vocabulary of named boolean checks over the decision context,
//! rather than an open-ended expression language, so every guard can be
//! evaluated and tested in isolation.

use serde::{Deserialize, Serialize};

use crate::context::DecisionContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Guard {
    /// The user's evidence satisfies an accepted GPG45 profile.
    ProfileMatched,
    /// Accumulated risk signals breach the scoring threshold.
    CiThresholdBreached,
    /// A remedial mitigation route was selected for the breach.
    MitigationAvailable,
    /// The named credential issuer or feature is enabled.
    Enabled { id: String },
    Disabled { id: String },
    /// The caller reports being on the expected page.
    OnPage { page_id: String },
}

impl Guard {
    pub fn evaluate(&self, ctx: &DecisionContext<'_>, current_page: Option<&str>) -> bool {
        match self {
            Guard::ProfileMatched => ctx.matched_profile.is_some(),
            Guard::CiThresholdBreached => ctx.ci_breaching,
            Guard::MitigationAvailable => ctx.mitigation.is_some(),
            Guard::Enabled { id } => ctx.config.is_enabled(id),
            Guard::Disabled { id } => !ctx.config.is_enabled(id),
            Guard::OnPage { page_id } => current_page == Some(page_id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idproof_core::CoreConfig;

    #[test]
    fn on_page_requires_an_exact_hint() {
        let config = CoreConfig::default();
        let ctx = DecisionContext::empty(&config);
        let guard = Guard::OnPage {
            page_id: "identity-start".to_string(),
        };

        assert!(guard.evaluate(&ctx, Some("identity-start")));
        assert!(!guard.evaluate(&ctx, Some("another-page")));
        assert!(!guard.evaluate(&ctx, None));
    }

    #[test]
    fn enablement_defaults_to_enabled() {
        let mut config = CoreConfig::default();
        config.enabled.insert("kbv".to_string(), false);
        let ctx = DecisionContext::empty(&config);

        let enabled = Guard::Enabled {
            id: "kbv".to_string(),
        };
        let disabled = Guard::Disabled {
            id: "kbv".to_string(),
        };
        assert!(!enabled.evaluate(&ctx, None));
        assert!(disabled.evaluate(&ctx, None));

        let unconfigured = Guard::Enabled {
            id: "passport".to_string(),
        };
        assert!(unconfigured.evaluate(&ctx, None));
    }
}
