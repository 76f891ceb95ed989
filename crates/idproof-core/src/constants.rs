//! Well-known event names, journey names, and engine limits.

/// The standard progression event fed to a state machine.
pub const NEXT_EVENT: &str = "next";

/// Event that routes straight back to the relying party without a transition.
pub const END_SESSION_EVENT: &str = "build-client-oauth-response";

/// Journey type entered when a session exceeds the backend timeout.
pub const SESSION_TIMEOUT_JOURNEY: &str = "session-timeout";

/// The state a timed-out session is placed in.
pub const SESSION_TIMEOUT_STATE: &str = "CORE_SESSION_TIMEOUT";

/// OAuth-style error recorded on a timed-out session.
pub const ACCESS_DENIED_CODE: &str = "access_denied";
pub const ACCESS_DENIED_DESCRIPTION: &str = "Access denied by resource owner or authorization server";

/// Upper bound on consecutive journey-change resolutions within one call.
/// Definitions must be acyclic; hitting this cap is a fatal engine error.
pub const MAX_JOURNEY_CHANGES: usize = 10;
