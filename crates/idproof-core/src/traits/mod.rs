mod audit;
mod credential_store;
mod risk_signal_store;
mod session_store;

pub use audit::IAuditSink;
pub use credential_store::ICredentialStore;
pub use risk_signal_store::IRiskSignalStore;
pub use session_store::ISessionStore;
