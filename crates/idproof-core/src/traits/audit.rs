use crate::errors::StoreError;
use crate::models::AuditEvent;

/// Audit-event transport.
pub trait IAuditSink: Send + Sync {
    fn send(&self, event: AuditEvent) -> Result<(), StoreError>;
}
