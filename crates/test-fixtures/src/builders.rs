//! Typed builders for the domain objects tests construct repeatedly.

use chrono::{Duration, Utc};
use idproof_core::models::{ContraIndicator, ContraIndicatorConfig, EvidenceItem};
use idproof_core::{JourneyType, Session};
use serde_json::{json, Value};

/// A document-check evidence item with a strength/validity pair.
pub fn document_item(strength: u32, validity: u32) -> EvidenceItem {
    EvidenceItem {
        issuer: "https://document.example".to_string(),
        strength: Some(strength),
        validity: Some(validity),
        activity_history: None,
        identity_fraud: None,
        verification: None,
        ci: Vec::new(),
    }
}

/// A fraud-check item, optionally carrying an activity-history score.
pub fn fraud_item(fraud: u32, activity: u32) -> EvidenceItem {
    EvidenceItem {
        issuer: "https://fraud.example".to_string(),
        strength: None,
        validity: None,
        activity_history: (activity > 0).then_some(activity),
        identity_fraud: Some(fraud),
        verification: None,
        ci: Vec::new(),
    }
}

/// A knowledge-based-verification item.
pub fn kbv_item(verification: u32) -> EvidenceItem {
    EvidenceItem {
        issuer: "https://kbv.example".to_string(),
        strength: None,
        validity: None,
        activity_history: None,
        identity_fraud: None,
        verification: Some(verification),
        ci: Vec::new(),
    }
}

/// An app-based combined check (document + activity + biometric
/// verification in one item).
pub fn combined_item(strength: u32, validity: u32, activity: u32, verification: u32) -> EvidenceItem {
    EvidenceItem {
        issuer: "https://app.example".to_string(),
        strength: Some(strength),
        validity: Some(validity),
        activity_history: Some(activity),
        identity_fraud: None,
        verification: Some(verification),
        ci: Vec::new(),
    }
}

/// A credential claim set wrapping one document-check evidence block.
pub fn document_credential(issuer: &str, strength: u32, validity: u32) -> Value {
    json!({
        "iss": issuer,
        "sub": format!("urn:uuid:{}", uuid::Uuid::new_v4()),
        "vc": {
            "type": ["VerifiableCredential", "IdentityCheckCredential"],
            "evidence": [{
                "type": "IdentityCheck",
                "strengthScore": strength,
                "validityScore": validity,
                "ci": null
            }]
        }
    })
}

/// A credential claim set wrapping one fraud-check evidence block.
pub fn fraud_credential(issuer: &str, fraud: u32, activity: u32) -> Value {
    let mut block = json!({
        "type": "IdentityCheck",
        "identityFraudScore": fraud,
    });
    if activity > 0 {
        block["activityHistoryScore"] = json!(activity);
    }
    json!({
        "iss": issuer,
        "sub": format!("urn:uuid:{}", uuid::Uuid::new_v4()),
        "vc": {
            "type": ["VerifiableCredential", "IdentityCheckCredential"],
            "evidence": [block]
        }
    })
}

/// A credential claim set wrapping one verification evidence block.
pub fn verification_credential(issuer: &str, verification: u32) -> Value {
    json!({
        "iss": issuer,
        "sub": format!("urn:uuid:{}", uuid::Uuid::new_v4()),
        "vc": {
            "type": ["VerifiableCredential", "IdentityCheckCredential"],
            "evidence": [{
                "type": "IdentityCheck",
                "verificationScore": verification
            }]
        }
    })
}

/// A risk signal with the given code, unmitigated, issued now.
pub fn risk_signal(code: &str) -> ContraIndicator {
    ContraIndicator {
        code: code.to_string(),
        issuer: "https://cimit.example".to_string(),
        issued_at: Utc::now(),
        document: None,
        mitigations: Vec::new(),
    }
}

/// A risk signal raised against a document, e.g. `"passport/GB/1234"`.
pub fn risk_signal_for_document(code: &str, document: &str) -> ContraIndicator {
    ContraIndicator {
        document: Some(document.to_string()),
        ..risk_signal(code)
    }
}

/// Scoring config for one signal code.
pub fn signal_config(code: &str, detected: u32, checked: u32) -> ContraIndicatorConfig {
    ContraIndicatorConfig {
        code: code.to_string(),
        detected_score: detected,
        checked_score: checked,
        return_code: None,
    }
}

/// A session in the given journey and state, created `age_secs` ago.
pub fn session(journey_type: &str, state: &str, age_secs: i64) -> Session {
    let mut session = Session::new(
        uuid::Uuid::new_v4().to_string(),
        format!("urn:uuid:{}", uuid::Uuid::new_v4()),
        JourneyType::new(journey_type),
        state,
    );
    session.creation_timestamp = Utc::now() - Duration::seconds(age_secs);
    session
}
