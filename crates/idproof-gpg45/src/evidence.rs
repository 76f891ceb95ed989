//! Extraction of evidence items from verified credential claim sets.

use idproof_core::errors::Gpg45Error;
use idproof_core::models::EvidenceItem;
use serde_json::Value;
use tracing::debug;

/// Parse a batch of credential claim sets into evidence items.
///
/// Credentials without an evidence block (e.g. address credentials)
/// contribute no items. Any malformed credential aborts the whole batch.
pub fn parse_credentials(credentials: &[Value]) -> Result<Vec<EvidenceItem>, Gpg45Error> {
    let mut items = Vec::new();
    for credential in credentials {
        items.extend(parse_credential(credential)?);
    }
    debug!(count = items.len(), "extracted evidence items");
    Ok(items)
}

fn parse_credential(credential: &Value) -> Result<Vec<EvidenceItem>, Gpg45Error> {
    let issuer = credential
        .get("iss")
        .and_then(Value::as_str)
        .ok_or_else(|| Gpg45Error::CredentialParseFailure {
            reason: "credential has no 'iss' claim".to_string(),
        })?;

    let Some(evidence) = credential.pointer("/vc/evidence") else {
        return Ok(Vec::new());
    };
    let blocks = evidence
        .as_array()
        .ok_or_else(|| Gpg45Error::CredentialParseFailure {
            reason: format!("'vc.evidence' is not an array in credential from '{issuer}'"),
        })?;

    blocks
        .iter()
        .map(|block| parse_evidence_block(issuer, block))
        .collect()
}

fn parse_evidence_block(issuer: &str, block: &Value) -> Result<EvidenceItem, Gpg45Error> {
    let ci = match block.get("ci") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(codes)) => codes
            .iter()
            .map(|code| {
                code.as_str().map(str::to_string).ok_or_else(|| {
                    Gpg45Error::CredentialParseFailure {
                        reason: format!("non-string ci code in credential from '{issuer}'"),
                    }
                })
            })
            .collect::<Result<_, _>>()?,
        Some(_) => {
            return Err(Gpg45Error::CredentialParseFailure {
                reason: format!("'ci' is not an array in credential from '{issuer}'"),
            })
        }
    };

    Ok(EvidenceItem {
        issuer: issuer.to_string(),
        strength: score_field(issuer, block, "strengthScore")?,
        validity: score_field(issuer, block, "validityScore")?,
        activity_history: score_field(issuer, block, "activityHistoryScore")?,
        identity_fraud: score_field(issuer, block, "identityFraudScore")?,
        verification: score_field(issuer, block, "verificationScore")?,
        ci,
    })
}

/// Sub-scores arrive as JSON numbers from most issuers, but some emit them
/// as decimal strings. Both are accepted; anything else is a parse failure.
fn score_field(issuer: &str, block: &Value, field: &str) -> Result<Option<u32>, Gpg45Error> {
    match block.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|v| Some(v as u32))
            .ok_or_else(|| malformed_score(issuer, field)),
        Some(Value::String(s)) => s
            .parse::<u32>()
            .map(Some)
            .map_err(|_| malformed_score(issuer, field)),
        Some(_) => Err(malformed_score(issuer, field)),
    }
}

fn malformed_score(issuer: &str, field: &str) -> Gpg45Error {
    Gpg45Error::CredentialParseFailure {
        reason: format!("'{field}' is not a non-negative integer in credential from '{issuer}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_credential_contributes_nothing() {
        let credential = json!({
            "iss": "https://address.example",
            "vc": { "credentialSubject": { "address": [] } }
        });
        assert!(parse_credentials(&[credential]).unwrap().is_empty());
    }

    #[test]
    fn string_scores_are_accepted() {
        let credential = json!({
            "iss": "https://app.example",
            "vc": { "evidence": [{
                "strengthScore": 3,
                "validityScore": 2,
                "activityHistoryScore": "1",
                "verificationScore": 2
            }] }
        });
        let items = parse_credentials(&[credential]).unwrap();
        assert_eq!(items[0].activity_history, Some(1));
        assert_eq!(items[0].strength, Some(3));
    }

    #[test]
    fn missing_issuer_aborts_the_batch() {
        let good = json!({ "iss": "https://ok.example", "vc": { "evidence": [] } });
        let bad = json!({ "vc": { "evidence": [] } });
        let err = parse_credentials(&[good, bad]).unwrap_err();
        assert!(matches!(err, Gpg45Error::CredentialParseFailure { .. }));
    }
}
