//! CiMitEngine — scores accumulated risk signals and selects a remedial
//! route when a threshold breach can be resolved by mitigating one signal.

use std::collections::HashMap;

use idproof_core::errors::CimitError;
use idproof_core::models::{ContraIndicator, ContraIndicatorConfig, MitigationRoute};
use tracing::{debug, info};

/// Scoring configuration keyed by signal code.
pub type CiConfigMap = HashMap<String, ContraIndicatorConfig>;

/// A selected remedial route, tagged with the signal it resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextMitigation {
    /// Code of the signal whose solo mitigation resolves the breach.
    pub code: String,
    /// Remedial journey event to emit.
    pub event: String,
}

/// The contra-indicator mitigation engine. Stateless; configuration is
/// threaded into every call.
#[derive(Debug, Default)]
pub struct CiMitEngine;

impl CiMitEngine {
    pub fn new() -> Self {
        Self
    }

    /// Total risk score: `detected_score` for unmitigated signals,
    /// `checked_score` for mitigated ones. A signal code absent from the
    /// configuration is an error, never scored as zero.
    pub fn score(
        &self,
        signals: &[ContraIndicator],
        config: &CiConfigMap,
    ) -> Result<u32, CimitError> {
        signals.iter().try_fold(0u32, |total, signal| {
            let scores =
                config
                    .get(&signal.code)
                    .ok_or_else(|| CimitError::UnrecognisedRiskSignal {
                        code: signal.code.clone(),
                    })?;
            let contribution = if signal.is_mitigated() {
                scores.checked_score
            } else {
                scores.detected_score
            };
            Ok(total + contribution)
        })
    }

    /// Whether the total score strictly exceeds the threshold.
    pub fn is_breaching_threshold(
        &self,
        signals: &[ContraIndicator],
        config: &CiConfigMap,
        threshold: u32,
    ) -> Result<bool, CimitError> {
        Ok(self.score(signals, config)? > threshold)
    }

    /// Whether the threshold would still be breached if `target` alone
    /// were mitigated (its detected score replaced by its checked score).
    pub fn is_breaching_threshold_if_mitigated(
        &self,
        target: &ContraIndicator,
        signals: &[ContraIndicator],
        config: &CiConfigMap,
        threshold: u32,
    ) -> Result<bool, CimitError> {
        let base = self.score(signals, config)?;
        let scores =
            config
                .get(&target.code)
                .ok_or_else(|| CimitError::UnrecognisedRiskSignal {
                    code: target.code.clone(),
                })?;
        let adjusted = if target.is_mitigated() {
            base
        } else {
            base - scores.detected_score + scores.checked_score
        };
        Ok(adjusted > threshold)
    }

    /// Select the remedial journey event for the first unmitigated signal
    /// whose solo mitigation would resolve the breach.
    ///
    /// Signals are visited in their natural order; multi-signal
    /// combinations are never attempted. Within the chosen signal's routes
    /// a document-specific route beats the catch-all. `Ok(None)` means no
    /// mitigation is available, which is a valid outcome.
    pub fn next_mitigation_route(
        &self,
        signals: &[ContraIndicator],
        config: &CiConfigMap,
        routes: &HashMap<String, Vec<MitigationRoute>>,
        threshold: u32,
    ) -> Result<Option<NextMitigation>, CimitError> {
        for signal in signals {
            let Some(candidate_routes) = routes.get(&signal.code) else {
                continue;
            };
            if signal.is_mitigated() {
                continue;
            }
            if self.is_breaching_threshold_if_mitigated(signal, signals, config, threshold)? {
                debug!(code = %signal.code, "solo mitigation insufficient, skipping");
                continue;
            }
            let route = select_route(candidate_routes, signal.document_type());
            return match route {
                Some(route) => {
                    info!(code = %signal.code, event = %route.event, "mitigation route selected");
                    Ok(Some(NextMitigation {
                        code: signal.code.clone(),
                        event: route.event.clone(),
                    }))
                }
                None => {
                    info!(code = %signal.code, "no mitigation journey route event found");
                    Ok(None)
                }
            };
        }
        Ok(None)
    }
}

/// Document-specific routes win; a route with no document filter is a
/// catch-all, used only when no specific route matches.
fn select_route<'a>(
    routes: &'a [MitigationRoute],
    document_type: Option<&str>,
) -> Option<&'a MitigationRoute> {
    routes
        .iter()
        .find(|r| r.document.as_deref() == document_type && r.document.is_some())
        .or_else(|| routes.iter().find(|r| r.document.is_none()))
}
