//! Configuration shapes consumed from the host card.
//!
//! Parsing and validation of the host configuration file stay with the host;
//! this module only defines the fields the windowing engine consumes.

use serde::Deserialize;

const DEFAULT_NUMBER_OF_POINTS: usize = 512;

/// One charted entity.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityConfig {
    /// Entity identifier in the history store.
    pub entity: String,
    /// Display name; the identifier is used when absent.
    #[serde(default)]
    pub name: Option<String>,
}

/// Graph-level settings consumed by the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Charted entities, in series order.
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
    /// Render budget: desired maximum points per series.
    #[serde(default = "default_number_of_points")]
    pub number_of_points: usize,
    /// Whether the host chart applies its own decimation on top of the
    /// engine's output. Orthogonal to, and layered after, the engine's
    /// simplification.
    #[serde(default)]
    pub sampling: bool,
}

fn default_number_of_points() -> usize {
    DEFAULT_NUMBER_OF_POINTS
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            number_of_points: DEFAULT_NUMBER_OF_POINTS,
            sampling: false,
        }
    }
}

impl GraphConfig {
    /// Position of an entity identifier in series order.
    pub fn entity_index(&self, entity_id: &str) -> Option<usize> {
        self.entities
            .iter()
            .position(|entity| entity.entity == entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let config: GraphConfig =
            serde_json::from_str(r#"{"entities": [{"entity": "sensor.power"}]}"#).unwrap();
        assert_eq!(config.number_of_points, 512);
        assert!(!config.sampling);
        assert_eq!(config.entities[0].name, None);
    }

    #[test]
    fn entity_index_follows_series_order() {
        let config: GraphConfig = serde_json::from_str(
            r#"{"entities": [{"entity": "sensor.a"}, {"entity": "sensor.b", "name": "B"}]}"#,
        )
        .unwrap();
        assert_eq!(config.entity_index("sensor.b"), Some(1));
        assert_eq!(config.entity_index("sensor.c"), None);
    }
}
