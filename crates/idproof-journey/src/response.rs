//! Step responses emitted by basic states.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The instruction a settled basic state hands back to the caller.
/// Opaque to the state machine itself; only serialized into the output
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepResponse {
    /// Render a page, optionally with a display context variant.
    Page {
        page_id: String,
        #[serde(default)]
        context: Option<String>,
    },
    /// Forward to another journey step.
    Journey { journey_step_id: String },
    /// Invoke a named backend process.
    Process {
        lambda: String,
        #[serde(default)]
        params: HashMap<String, Value>,
    },
}

impl StepResponse {
    /// The output payload for this response.
    pub fn value(&self) -> Value {
        match self {
            StepResponse::Page { page_id, context } => match context {
                Some(context) => json!({ "page": page_id, "context": context }),
                None => json!({ "page": page_id }),
            },
            StepResponse::Journey { journey_step_id } => json!({ "journey": journey_step_id }),
            StepResponse::Process { lambda, params } => json!({ "lambda": lambda, "params": params }),
        }
    }
}
