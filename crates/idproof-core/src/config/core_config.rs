use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::{ContraIndicatorConfig, MitigationRoute};

/// Configuration threaded explicitly into every engine call.
///
/// Loaded once per call; no ambient global state. Unknown risk-signal codes
/// at scoring time are an error, so `ci_config` must cover every code the
/// surrounding system can raise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub backend_session_timeout_secs: u64,
    pub ci_scoring_threshold: u32,
    /// Scoring configuration per signal code.
    pub ci_config: HashMap<String, ContraIndicatorConfig>,
    /// Remedial routes per signal code, in precedence order.
    pub mitigation_routes: HashMap<String, Vec<MitigationRoute>>,
    /// Credential-issuer / feature enablement. Ids absent from the map are
    /// treated as enabled.
    pub enabled: HashMap<String, bool>,
    pub component_id: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            backend_session_timeout_secs: defaults::DEFAULT_BACKEND_SESSION_TIMEOUT_SECS,
            ci_scoring_threshold: defaults::DEFAULT_CI_SCORING_THRESHOLD,
            ci_config: HashMap::new(),
            mitigation_routes: HashMap::new(),
            enabled: HashMap::new(),
            component_id: String::new(),
        }
    }
}

impl CoreConfig {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Malformed {
            reason: e.to_string(),
        })
    }

    /// Whether a credential issuer or feature id is enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.get(id).copied().unwrap_or(true)
    }
}
