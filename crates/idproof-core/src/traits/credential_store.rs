use crate::errors::StoreError;

/// Issued-credential retrieval. Payloads are already-verified claim sets;
/// signature and encryption handling live outside this core.
pub trait ICredentialStore: Send + Sync {
    fn fetch_credentials(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> Result<Vec<serde_json::Value>, StoreError>;
}
