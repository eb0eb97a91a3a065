use crate::model::{SensorModelKind, IMPLEMENTED_MODELS};

/// Error types for the configuration module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Error when the configured sensor model is not in the implemented set.
    #[error("Unknown sensor model '{0}'. Implemented models are: {models}", models = IMPLEMENTED_MODELS.join(", "))]
    UnknownModel(String),
}

/// Configuration for the sensor pipeline.
///
/// # Example
///
/// ```
/// use simsense_sensor::{SensorConfig, SensorModelKind};
///
/// let config = SensorConfig::default();
/// assert_eq!(config.model, SensorModelKind::GroundTruth);
/// assert_eq!(config.frame_id, "camera");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// The sensor model to run on each decoded frame pair.
    pub model: SensorModelKind,
    /// Coordinate frame stamped on outbound clouds.
    pub frame_id: String,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            model: SensorModelKind::default(),
            frame_id: "camera".to_string(),
        }
    }
}

impl SensorConfig {
    /// Build a configuration from a sensor model name.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::UnknownModel`] if the name is not in the
    /// implemented set; the pipeline treats this as fatal at startup.
    pub fn from_model_name(name: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            model: name.parse()?,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_model_name() {
        let config = SensorConfig::from_model_name("ground_truth").unwrap();
        assert_eq!(config.model, SensorModelKind::GroundTruth);

        let result = SensorConfig::from_model_name("lidar");
        assert_eq!(result, Err(ConfigError::UnknownModel("lidar".to_string())));
    }
}
