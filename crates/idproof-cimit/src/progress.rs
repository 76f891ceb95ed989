//! Mitigation-progress bookkeeping on the session record.
//!
//! Tracking records live on the session, one per risk signal first seen
//! breaching. The remedial sub-journeys themselves run outside this core;
//! only their offer/completion state is recorded here.

use idproof_core::models::{ContraIndicator, MitigationDetails, MitigationJourneyDetails};
use idproof_core::Session;
use tracing::info;

/// Create tracking records for signals not yet tracked in the session.
///
/// A signal already tracked is never re-created; repeated observations of
/// the same code are no-ops. Returns true if any new record was added.
pub fn track_new_signals(session: &mut Session, signals: &[ContraIndicator]) -> bool {
    let mut added = false;
    for signal in signals {
        let already_tracked = session
            .mitigation_details
            .iter()
            .any(|d| d.code == signal.code);
        if !already_tracked {
            info!(code = %signal.code, "tracking new risk signal for mitigation");
            session
                .mitigation_details
                .push(MitigationDetails::new(signal.code.clone()));
            added = true;
        }
    }
    added
}

/// Record that a remedial sub-journey was offered for a tracked signal.
///
/// No-op if the signal is untracked or the journey is already recorded.
pub fn offer_journey(session: &mut Session, code: &str, journey_id: &str) {
    let Some(details) = session
        .mitigation_details
        .iter_mut()
        .find(|d| d.code == code)
    else {
        return;
    };
    if details
        .mitigation_journeys
        .iter()
        .any(|mj| mj.journey_id == journey_id)
    {
        return;
    }
    details
        .mitigation_journeys
        .push(MitigationJourneyDetails::new(journey_id));
}

/// Mark the remedial sub-journey with `journey_id` complete wherever it was
/// offered. Idempotent: re-processing a completed journey changes nothing
/// and never creates new records.
pub fn record_journey_outcome(session: &mut Session, journey_id: &str) {
    for details in &mut session.mitigation_details {
        for journey in &mut details.mitigation_journeys {
            if journey.journey_id == journey_id {
                journey.complete = true;
            }
        }
    }
}

/// Whether any tracked signal still has an incomplete remedial journey.
pub fn mitigation_in_progress(session: &Session) -> bool {
    session.mitigation_details.iter().any(|d| d.in_progress())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::builders::{risk_signal, session};

    #[test]
    fn repeated_observation_does_not_duplicate_tracking() {
        let mut session = session("initial", "START", 0);
        let signals = vec![risk_signal("X01")];

        assert!(track_new_signals(&mut session, &signals));
        assert!(!track_new_signals(&mut session, &signals));
        assert_eq!(session.mitigation_details.len(), 1);
    }

    #[test]
    fn completing_a_journey_twice_is_idempotent() {
        let mut session = session("initial", "START", 0);
        track_new_signals(&mut session, &[risk_signal("X01")]);
        offer_journey(&mut session, "X01", "alternate-doc-check");

        assert!(mitigation_in_progress(&session));
        record_journey_outcome(&mut session, "alternate-doc-check");
        record_journey_outcome(&mut session, "alternate-doc-check");

        assert!(!mitigation_in_progress(&session));
        assert_eq!(session.mitigation_details.len(), 1);
        assert_eq!(session.mitigation_details[0].mitigation_journeys.len(), 1);
    }

    #[test]
    fn offering_the_same_journey_twice_records_once() {
        let mut session = session("initial", "START", 0);
        track_new_signals(&mut session, &[risk_signal("X01")]);
        offer_journey(&mut session, "X01", "alternate-doc-check");
        offer_journey(&mut session, "X01", "alternate-doc-check");

        assert_eq!(session.mitigation_details[0].mitigation_journeys.len(), 1);
    }
}
