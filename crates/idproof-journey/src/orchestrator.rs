//! Orchestrator — processes one journey event end to end.
//!
//! Each event is one synchronous unit of work: load the session, build
//! the decision context from the scoring engines, drive the state
//! machine until a step settles, write the session back once. The only
//! mutable shared resource is the session record; at-most-one-concurrent-
//! event-per-session is guaranteed by the surrounding system, so a
//! violation is a last-writer-wins lost update.

use chrono::Utc;
use serde_json::{json, Value};
use tracing::{info, warn};

use idproof_cimit::{progress, CiMitEngine};
use idproof_core::constants::{
    ACCESS_DENIED_CODE, ACCESS_DENIED_DESCRIPTION, END_SESSION_EVENT, MAX_JOURNEY_CHANGES,
    NEXT_EVENT, SESSION_TIMEOUT_JOURNEY, SESSION_TIMEOUT_STATE,
};
use idproof_core::errors::{CimitError, ConfigError, Gpg45Error, JourneyError, StoreError};
use idproof_core::models::{
    AuditEvent, AuditEventKind, AuditEventUser, ContraIndicator, JourneyRequest, VcStatus, Vot,
};
use idproof_core::traits::{IAuditSink, ICredentialStore, IRiskSignalStore, ISessionStore};
use idproof_core::{CoreConfig, IdproofError, IdproofResult, JourneyType, Session};
use idproof_gpg45::evidence::parse_credentials;
use idproof_gpg45::{Gpg45Evaluator, Gpg45Profile};

use crate::context::DecisionContext;
use crate::loader::JourneyMap;
use crate::machine::{StateMachine, Transition};
use crate::response::StepResponse;

/// Drives journey events through the state machine. Holds references to
/// the collaborators; all per-call state lives on the stack.
pub struct Orchestrator<'a> {
    sessions: &'a dyn ISessionStore,
    credentials: &'a dyn ICredentialStore,
    risk_signals: &'a dyn IRiskSignalStore,
    audit: &'a dyn IAuditSink,
    gpg45: Gpg45Evaluator,
    cimit: CiMitEngine,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        sessions: &'a dyn ISessionStore,
        credentials: &'a dyn ICredentialStore,
        risk_signals: &'a dyn IRiskSignalStore,
        audit: &'a dyn IAuditSink,
    ) -> Self {
        Self {
            sessions,
            credentials,
            risk_signals,
            audit,
            gpg45: Gpg45Evaluator::new(),
            cimit: CiMitEngine::new(),
        }
    }

    /// Process one journey event and return the settled response payload.
    pub fn process_event(
        &self,
        request: &JourneyRequest,
        config: &CoreConfig,
        journeys: &JourneyMap,
    ) -> IdproofResult<Value> {
        // The end-session event routes straight back to the relying party
        // without touching the state machine or the session.
        if request.event == END_SESSION_EVENT {
            info!(session_id = %request.session_id, "end-session event, short-circuiting");
            let response = StepResponse::Journey {
                journey_step_id: END_SESSION_EVENT.to_string(),
            };
            return Ok(response.value());
        }

        let mut session = self.sessions.get(&request.session_id)?.ok_or_else(|| {
            JourneyError::InvalidSession {
                session_id: request.session_id.clone(),
            }
        })?;
        if request.feature_set.is_some() {
            session.feature_set = request.feature_set.clone();
        }

        let mut event = request.event.clone();
        if self.apply_timeout_override(&mut session, config, request)? {
            event = NEXT_EVENT.to_string();
        }

        let ctx = self.build_decision_context(&mut session, config)?;
        let response = self.run_transitions(&mut session, &event, &ctx, request, journeys)?;

        self.sessions.put(session)?;
        Ok(response.value())
    }

    /// Mark a remedial sub-journey complete on the session that offered it.
    pub fn complete_mitigation(&self, session_id: &str, journey_id: &str) -> IdproofResult<()> {
        let mut session = self.sessions.get(session_id)?.ok_or_else(|| {
            JourneyError::InvalidSession {
                session_id: session_id.to_string(),
            }
        })?;
        let offered = session.mitigation_details.iter().any(|details| {
            details
                .mitigation_journeys
                .iter()
                .any(|mj| mj.journey_id == journey_id)
        });
        if !offered {
            return Err(CimitError::MitigationJourneyUnknown {
                journey_id: journey_id.to_string(),
            }
            .into());
        }
        progress::record_journey_outcome(&mut session, journey_id);
        self.sessions.put(session)?;
        Ok(())
    }

    /// Substitute the synthetic timeout transition when the session has
    /// outlived the backend window. Evaluated exactly once per call and
    /// never for sessions already in the timeout journey. Returns whether
    /// the incoming event must be replaced by the standard progression
    /// event.
    fn apply_timeout_override(
        &self,
        session: &mut Session,
        config: &CoreConfig,
        request: &JourneyRequest,
    ) -> Result<bool, StoreError> {
        if session.journey_type.as_str() == SESSION_TIMEOUT_JOURNEY {
            return Ok(false);
        }
        let age = session.age_secs(Utc::now());
        if age <= config.backend_session_timeout_secs as i64 {
            return Ok(false);
        }
        warn!(
            session_id = %session.session_id,
            age_secs = age,
            "session exceeded backend timeout, switching to timeout journey"
        );
        session.error_code = Some(ACCESS_DENIED_CODE.to_string());
        session.error_description = Some(ACCESS_DENIED_DESCRIPTION.to_string());
        session.journey_type = JourneyType::new(SESSION_TIMEOUT_JOURNEY);
        session.user_state = SESSION_TIMEOUT_STATE.to_string();
        self.send_audit(
            session,
            request,
            AuditEventKind::SubjourneyStart {
                journey_type: SESSION_TIMEOUT_JOURNEY.to_string(),
            },
        )?;
        Ok(true)
    }

    /// Run the scoring engines over the user's current credentials and
    /// risk signals, refreshing the session's per-issuer statuses and
    /// trust level along the way.
    fn build_decision_context<'c>(
        &self,
        session: &mut Session,
        config: &'c CoreConfig,
    ) -> IdproofResult<DecisionContext<'c>> {
        let raw = self
            .credentials
            .fetch_credentials(&session.session_id, &session.user_id)?;
        let items: Vec<_> = parse_credentials(&raw)?
            .into_iter()
            .filter(|item| config.is_enabled(&item.issuer))
            .collect();
        session.vc_statuses = items
            .iter()
            .map(|item| VcStatus {
                issuer: item.issuer.clone(),
                is_successful: item.is_successful(),
            })
            .collect();

        let scores = self.gpg45.build_score(&items)?;
        let profiles = Gpg45Profile::accepted_medium();
        let matched_profile = self
            .gpg45
            .first_matching_profile(&scores, &profiles)
            .map(|p| p.name.clone());
        if matched_profile.is_some() && session.vot == Vot::None {
            session.vot = Vot::Medium;
        }

        let signals = self.risk_signals.fetch_risk_signals(&session.user_id)?;
        let ci_breaching = self.cimit.is_breaching_threshold(
            &signals,
            &config.ci_config,
            config.ci_scoring_threshold,
        )?;
        let mitigation = if ci_breaching {
            let unmitigated: Vec<ContraIndicator> = signals
                .iter()
                .filter(|s| !s.is_mitigated())
                .cloned()
                .collect();
            progress::track_new_signals(session, &unmitigated);
            self.cimit.next_mitigation_route(
                &signals,
                &config.ci_config,
                &config.mitigation_routes,
                config.ci_scoring_threshold,
            )?
        } else {
            None
        };

        Ok(DecisionContext {
            matched_profile,
            ci_breaching,
            mitigation,
            config,
        })
    }

    /// Drive the state machine until a step settles, folding each
    /// journey-change back in as a re-entry at the sub-journey's initial
    /// state with the standard progression event. The iteration cap turns
    /// a cyclic definition into a defined error instead of a hang.
    fn run_transitions(
        &self,
        session: &mut Session,
        event: &str,
        ctx: &DecisionContext<'_>,
        request: &JourneyRequest,
        journeys: &JourneyMap,
    ) -> IdproofResult<StepResponse> {
        let start_state = session.user_state.clone();
        let mut event = event.to_string();
        // Only the caller-initiated transition sees the page hint; synthetic
        // re-entries into a sub-journey carry none.
        let mut current_page = request.current_page.as_deref();
        let mut changes = 0usize;
        loop {
            let definition = journeys.definition(&session.journey_type)?;
            let machine = StateMachine::new(definition);
            let transition =
                machine.transition(&session.user_state, &event, ctx, current_page)?;

            if let Some(journey_id) = transition.mitigation_start() {
                self.send_audit(
                    session,
                    request,
                    AuditEventKind::MitigationStart {
                        mitigation_type: journey_id.to_string(),
                    },
                )?;
                if let Some(mitigation) = &ctx.mitigation {
                    progress::offer_journey(session, &mitigation.code, journey_id);
                }
            }

            match transition {
                Transition::Step {
                    state_name,
                    response,
                    ..
                } => {
                    info!(
                        session_id = %session.session_id,
                        journey = %session.journey_type,
                        state = %state_name,
                        "journey step settled"
                    );
                    session.user_state = state_name;
                    return Ok(response);
                }
                Transition::ChangeJourney {
                    journey_type,
                    initial_state,
                    ..
                } => {
                    changes += 1;
                    if changes > MAX_JOURNEY_CHANGES {
                        return Err(JourneyError::JourneyChangeLimitExceeded {
                            start_state,
                            limit: MAX_JOURNEY_CHANGES,
                        }
                        .into());
                    }
                    self.send_audit(
                        session,
                        request,
                        AuditEventKind::SubjourneyStart {
                            journey_type: journey_type.to_string(),
                        },
                    )?;
                    session.journey_type = journey_type;
                    session.user_state = initial_state;
                    event = NEXT_EVENT.to_string();
                    current_page = None;
                }
            }
        }
    }

    fn send_audit(
        &self,
        session: &Session,
        request: &JourneyRequest,
        kind: AuditEventKind,
    ) -> Result<(), StoreError> {
        self.audit.send(AuditEvent {
            user: AuditEventUser {
                user_id: session.user_id.clone(),
                session_id: session.session_id.clone(),
                ip_address: request.ip_address.clone(),
            },
            kind,
        })
    }
}

/// Structured error payload for the caller: a status code plus a stable
/// error code and a human-readable message. Engine errors are defects
/// (500); a missing session is the caller's fault (400); collaborator
/// failures may be transient (503).
pub fn error_response(err: &IdproofError) -> Value {
    let (status, code) = match err {
        IdproofError::Journey(journey) => match journey {
            JourneyError::InvalidSession { .. } => (400, "invalid-session-id"),
            JourneyError::UnknownState { .. } => (500, "unknown-state"),
            JourneyError::UnknownEvent { .. } => (500, "unknown-event"),
            JourneyError::NoMatchingBranch { .. } => (500, "no-matching-branch"),
            JourneyError::MissingJourneyDefinition { .. } => (500, "missing-journey-definition"),
            JourneyError::JourneyChangeLimitExceeded { .. } => (500, "journey-change-limit"),
        },
        IdproofError::Gpg45(Gpg45Error::CredentialParseFailure { .. }) => {
            (500, "credential-parse-failure")
        }
        IdproofError::Gpg45(Gpg45Error::UnknownEvidenceType { .. }) => {
            (500, "unknown-evidence-type")
        }
        IdproofError::Cimit(CimitError::UnrecognisedRiskSignal { .. }) => {
            (500, "unrecognised-risk-signal")
        }
        IdproofError::Cimit(CimitError::MitigationJourneyUnknown { .. }) => {
            (500, "unknown-mitigation-journey")
        }
        IdproofError::Config(ConfigError::Malformed { .. })
        | IdproofError::Config(ConfigError::DanglingTarget { .. })
        | IdproofError::Config(ConfigError::MissingInitialState { .. }) => {
            (500, "configuration-malformed")
        }
        IdproofError::Store(_) => (503, "collaborator-unavailable"),
    };
    json!({
        "statusCode": status,
        "code": code,
        "message": err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payloads_carry_status_and_code() {
        let err = IdproofError::from(JourneyError::InvalidSession {
            session_id: "missing".to_string(),
        });
        let payload = error_response(&err);
        assert_eq!(payload["statusCode"], 400);
        assert_eq!(payload["code"], "invalid-session-id");

        let err = IdproofError::from(StoreError::Session {
            message: "connection reset".to_string(),
        });
        assert_eq!(error_response(&err)["statusCode"], 503);
    }
}
