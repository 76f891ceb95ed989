use crate::errors::StoreError;
use crate::models::ContraIndicator;

/// Contra-indicator retrieval. Signals are an immutable snapshot per
/// invocation; the core never deletes them.
pub trait IRiskSignalStore: Send + Sync {
    fn fetch_risk_signals(&self, user_id: &str) -> Result<Vec<ContraIndicator>, StoreError>;
}
