/// Contra-indicator scoring and mitigation errors.
#[derive(Debug, thiserror::Error)]
pub enum CimitError {
    /// An observed signal code has no scoring configuration. Scoring it
    /// as zero would silently ignore a risk signal, so this is fatal.
    #[error("risk signal code '{code}' has no scoring configuration")]
    UnrecognisedRiskSignal { code: String },

    #[error("unknown mitigation journey id '{journey_id}'")]
    MitigationJourneyUnknown { journey_id: String },
}
