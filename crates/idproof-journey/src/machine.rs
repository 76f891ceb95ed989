//! StateMachine — guarded single-step transitions over one journey
//! definition.

use tracing::debug;

use idproof_core::errors::JourneyError;
use idproof_core::JourneyType;

use crate::context::DecisionContext;
use crate::loader::JourneyDefinition;
use crate::response::StepResponse;
use crate::state::State;

/// Outcome of one transition. A journey-change is never a final answer;
/// the orchestrator must keep resolving until a step settles.
#[derive(Debug, Clone)]
pub enum Transition {
    /// Settled on a basic state.
    Step {
        state_name: String,
        response: StepResponse,
        mitigation_start: Option<String>,
    },
    /// The chosen edge leads into a named sub-journey.
    ChangeJourney {
        journey_type: JourneyType,
        initial_state: String,
        mitigation_start: Option<String>,
    },
}

impl Transition {
    /// Remedial sub-journey begun by the chosen branch, if any.
    pub fn mitigation_start(&self) -> Option<&str> {
        match self {
            Transition::Step {
                mitigation_start, ..
            }
            | Transition::ChangeJourney {
                mitigation_start, ..
            } => mitigation_start.as_deref(),
        }
    }
}

/// Evaluates transitions against one journey definition. Stateless; the
/// session's position is passed in per call.
#[derive(Debug)]
pub struct StateMachine<'a> {
    definition: &'a JourneyDefinition,
}

impl<'a> StateMachine<'a> {
    pub fn new(definition: &'a JourneyDefinition) -> Self {
        Self { definition }
    }

    /// Resolve one transition from `state_name` on `event`.
    ///
    /// Branches for the event are tried in listed order; the first whose
    /// guard passes wins, and a guard-less branch always passes. An event
    /// with no passing branch is an error, never a silent default. A
    /// current state that is itself a journey-change resolves immediately
    /// without consuming the event.
    pub fn transition(
        &self,
        state_name: &str,
        event: &str,
        ctx: &DecisionContext<'_>,
        current_page: Option<&str>,
    ) -> Result<Transition, JourneyError> {
        let state = self
            .definition
            .state(state_name)
            .ok_or_else(|| self.unknown_state(state_name))?;

        let basic = match state {
            State::JourneyChange(change) => {
                return Ok(Transition::ChangeJourney {
                    journey_type: change.journey_type.clone(),
                    initial_state: change.initial_state.clone(),
                    mitigation_start: None,
                })
            }
            State::Basic(basic) => basic,
        };

        let branches = basic
            .events
            .get(event)
            .ok_or_else(|| JourneyError::UnknownEvent {
                state: state_name.to_string(),
                event: event.to_string(),
            })?;
        let branch = branches
            .iter()
            .find(|b| {
                b.guard
                    .as_ref()
                    .map_or(true, |g| g.evaluate(ctx, current_page))
            })
            .ok_or_else(|| JourneyError::NoMatchingBranch {
                state: state_name.to_string(),
                event: event.to_string(),
            })?;
        debug!(
            journey = %self.definition.name,
            state = state_name,
            event,
            target = %branch.target,
            "branch selected"
        );

        let target = self
            .definition
            .state(&branch.target)
            .ok_or_else(|| self.unknown_state(&branch.target))?;
        Ok(match target {
            State::Basic(basic) => Transition::Step {
                state_name: branch.target.clone(),
                response: basic.response.clone(),
                mitigation_start: branch.mitigation_start.clone(),
            },
            State::JourneyChange(change) => Transition::ChangeJourney {
                journey_type: change.journey_type.clone(),
                initial_state: change.initial_state.clone(),
                mitigation_start: branch.mitigation_start.clone(),
            },
        })
    }

    fn unknown_state(&self, state: &str) -> JourneyError {
        JourneyError::UnknownState {
            journey_type: self.definition.name.clone(),
            state: state.to_string(),
        }
    }
}
