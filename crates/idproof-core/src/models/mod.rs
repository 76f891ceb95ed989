mod audit;
mod contra_indicator;
mod evidence;
mod journey;
mod mitigation;
mod session;

pub use audit::{AuditEvent, AuditEventKind, AuditEventUser};
pub use contra_indicator::{ContraIndicator, ContraIndicatorConfig, MitigationRoute};
pub use evidence::{EvidenceItem, EvidenceKind};
pub use journey::{JourneyRequest, JourneyType};
pub use mitigation::{MitigationDetails, MitigationJourneyDetails};
pub use session::{Session, VcStatus, Vot};
