//! # idproof-cimit
//!
//! Contra-indicator (risk signal) scoring against a configured threshold,
//! and selection of remedial mitigation routes when a breach can be
//! resolved by mitigating a single signal.

pub mod engine;
pub mod progress;

pub use engine::{CiConfigMap, CiMitEngine, NextMitigation};
