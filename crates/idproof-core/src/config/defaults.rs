//! Default configuration values.

/// Backend session timeout (seconds) before the timeout override fires.
pub const DEFAULT_BACKEND_SESSION_TIMEOUT_SECS: u64 = 3600;

/// Contra-indicator score above which a journey is breaching.
pub const DEFAULT_CI_SCORING_THRESHOLD: u32 = 3;
