//! In-memory collaborator doubles for orchestrator tests.

use std::sync::Mutex;

use idproof_core::errors::StoreError;
use idproof_core::models::{AuditEvent, ContraIndicator};
use idproof_core::traits::{IAuditSink, ICredentialStore, IRiskSignalStore};

/// Serves a fixed credential batch for any session/user.
#[derive(Debug, Default)]
pub struct FixedCredentialStore {
    pub credentials: Vec<serde_json::Value>,
}

impl ICredentialStore for FixedCredentialStore {
    fn fetch_credentials(
        &self,
        _session_id: &str,
        _user_id: &str,
    ) -> Result<Vec<serde_json::Value>, StoreError> {
        Ok(self.credentials.clone())
    }
}

/// Serves a fixed risk-signal snapshot for any user.
#[derive(Debug, Default)]
pub struct FixedRiskSignalStore {
    pub signals: Vec<ContraIndicator>,
}

impl IRiskSignalStore for FixedRiskSignalStore {
    fn fetch_risk_signals(&self, _user_id: &str) -> Result<Vec<ContraIndicator>, StoreError> {
        Ok(self.signals.clone())
    }
}

/// Records every audit event it is asked to send.
#[derive(Debug, Default)]
pub struct RecordingAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingAuditSink {
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl IAuditSink for RecordingAuditSink {
    fn send(&self, event: AuditEvent) -> Result<(), StoreError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
