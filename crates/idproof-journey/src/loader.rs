//! Journey definition loading and validation.
//!
//! Definitions are authored externally as TOML, one document per journey
//! type. Validation is load-time and fatal: a definition whose branches
//! target undefined states must never reach the state machine.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use idproof_core::errors::{ConfigError, JourneyError};
use idproof_core::JourneyType;

use crate::state::State;

/// The parsed state machine for one journey type.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyDefinition {
    /// Journey type this definition governs.
    pub name: String,
    /// State a fresh session enters this journey at.
    pub initial_state: String,
    pub states: HashMap<String, State>,
}

impl JourneyDefinition {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Malformed {
            reason: e.to_string(),
        })
    }

    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }
}

/// All loaded journey definitions, keyed by journey type and validated as
/// a set so cross-journey change targets are known to resolve.
#[derive(Debug, Clone)]
pub struct JourneyMap {
    journeys: HashMap<JourneyType, JourneyDefinition>,
}

impl JourneyMap {
    pub fn new(definitions: Vec<JourneyDefinition>) -> Result<Self, ConfigError> {
        let journeys: HashMap<JourneyType, JourneyDefinition> = definitions
            .into_iter()
            .map(|d| (JourneyType::new(&d.name), d))
            .collect();
        let map = Self { journeys };
        map.validate()?;
        info!(journeys = map.journeys.len(), "journey definitions loaded");
        Ok(map)
    }

    /// Parse and validate a set of TOML documents, one per journey type.
    pub fn from_toml_sources<'a>(
        sources: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ConfigError> {
        let definitions = sources
            .into_iter()
            .map(JourneyDefinition::from_toml_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(definitions)
    }

    pub fn definition(&self, journey_type: &JourneyType) -> Result<&JourneyDefinition, JourneyError> {
        self.journeys
            .get(journey_type)
            .ok_or_else(|| JourneyError::MissingJourneyDefinition {
                journey_type: journey_type.to_string(),
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for definition in self.journeys.values() {
            if !definition.states.contains_key(&definition.initial_state) {
                return Err(ConfigError::MissingInitialState {
                    journey_type: definition.name.clone(),
                    initial_state: definition.initial_state.clone(),
                });
            }
            for (state_name, state) in &definition.states {
                match state {
                    State::Basic(basic) => {
                        for branch in basic.events.values().flatten() {
                            if !definition.states.contains_key(&branch.target) {
                                return Err(ConfigError::DanglingTarget {
                                    journey_type: definition.name.clone(),
                                    state: state_name.clone(),
                                    target: branch.target.clone(),
                                });
                            }
                        }
                    }
                    State::JourneyChange(change) => {
                        let resolves = self
                            .journeys
                            .get(&change.journey_type)
                            .is_some_and(|j| j.states.contains_key(&change.initial_state));
                        if !resolves {
                            return Err(ConfigError::DanglingTarget {
                                journey_type: definition.name.clone(),
                                state: state_name.clone(),
                                target: format!("{}/{}", change.journey_type, change.initial_state),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        name = "initial"
        initial_state = "START"

        [states.START]
        kind = "basic"
        response = { type = "page", page_id = "identity-start" }

        [[states.START.events.next]]
        target = "DONE"

        [states.DONE]
        kind = "basic"
        response = { type = "journey", journey_step_id = "build-client-oauth-response" }
    "#;

    #[test]
    fn parses_and_validates_a_minimal_journey() {
        let map = JourneyMap::from_toml_sources([MINIMAL]).unwrap();
        let definition = map.definition(&JourneyType::new("initial")).unwrap();
        assert_eq!(definition.initial_state, "START");
        assert!(definition.state("DONE").is_some());
    }

    #[test]
    fn dangling_branch_target_is_fatal() {
        let raw = r#"
            name = "initial"
            initial_state = "START"

            [states.START]
            kind = "basic"
            response = { type = "page", page_id = "identity-start" }

            [[states.START.events.next]]
            target = "NOWHERE"
        "#;
        let err = JourneyMap::from_toml_sources([raw]).unwrap_err();
        assert!(matches!(err, ConfigError::DanglingTarget { target, .. } if target == "NOWHERE"));
    }

    #[test]
    fn journey_change_into_an_unloaded_journey_is_fatal() {
        let raw = r#"
            name = "initial"
            initial_state = "START"

            [states.START]
            kind = "journey_change"
            journey_type = "not-loaded"
            initial_state = "ENTRY"
        "#;
        let err = JourneyMap::from_toml_sources([raw]).unwrap_err();
        assert!(matches!(err, ConfigError::DanglingTarget { .. }));
    }

    #[test]
    fn missing_initial_state_is_fatal() {
        let raw = r#"
            name = "initial"
            initial_state = "ABSENT"

            [states.START]
            kind = "basic"
            response = { type = "page", page_id = "identity-start" }
        "#;
        let err = JourneyMap::from_toml_sources([raw]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInitialState { .. }));
    }
}
