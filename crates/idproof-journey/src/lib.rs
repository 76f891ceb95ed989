//! # idproof-journey
//!
//! The journey state machine and the orchestrator that drives it: loads
//! externally-defined journey state machines, evaluates guarded
//! transitions against decision context built from the scoring engines,
//! and folds journey-change states back in until a step response settles.

pub mod context;
pub mod guard;
pub mod loader;
pub mod machine;
pub mod orchestrator;
pub mod response;
pub mod state;
pub mod store;

pub use context::DecisionContext;
pub use guard::Guard;
pub use loader::{JourneyDefinition, JourneyMap};
pub use machine::{StateMachine, Transition};
pub use orchestrator::{error_response, Orchestrator};
pub use response::StepResponse;
pub use state::{BasicState, Branch, JourneyChangeState, State};
pub use store::InMemorySessionStore;
