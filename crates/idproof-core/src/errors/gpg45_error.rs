/// Evidence-scoring errors. Either aborts scoring for the whole batch:
/// partial score vectors are unsafe to act on.
#[derive(Debug, thiserror::Error)]
pub enum Gpg45Error {
    #[error("failed to parse credential payload: {reason}")]
    CredentialParseFailure { reason: String },

    #[error("evidence item from issuer '{issuer}' maps to no known scoring rule")]
    UnknownEvidenceType { issuer: String },
}
