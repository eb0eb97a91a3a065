use std::str::FromStr;

use crate::config::ConfigError;
use simsense_image::{ColorImage, DepthImage};

/// The configuration names of the implemented sensor models.
pub const IMPLEMENTED_MODELS: &[&str] = &["ground_truth"];

/// A closed enumeration of the implemented sensor models.
///
/// Adding a model means adding a variant and its transform here, not
/// growing a runtime lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorModelKind {
    /// Pass the rendered frames through unchanged.
    #[default]
    GroundTruth,
}

impl SensorModelKind {
    /// The configuration name of the model.
    pub fn name(&self) -> &'static str {
        match self {
            SensorModelKind::GroundTruth => "ground_truth",
        }
    }

    /// Apply the sensor model to a decoded frame pair.
    ///
    /// The ground truth model is the identity: the rendered frames already
    /// are the sensor output.
    pub fn apply(&self, color: ColorImage, depth: DepthImage) -> (ColorImage, DepthImage) {
        match self {
            SensorModelKind::GroundTruth => (color, depth),
        }
    }
}

impl std::fmt::Display for SensorModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SensorModelKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ground_truth" => Ok(SensorModelKind::GroundTruth),
            _ => Err(ConfigError::UnknownModel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_implemented_models() {
        for name in IMPLEMENTED_MODELS {
            let model: SensorModelKind = name.parse().unwrap();
            assert_eq!(model.name(), *name);
        }
    }

    #[test]
    fn rejects_unknown_model() {
        let result = "gaussian_noise".parse::<SensorModelKind>();
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::UnknownModel(ref name) if name == "gaussian_noise"));
        assert!(err.to_string().contains("ground_truth"));
    }

    #[test]
    fn ground_truth_is_identity() {
        use simsense_image::ImageSize;

        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let color = ColorImage::new(size, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let depth = DepthImage::new(size, vec![0.5, 1.5]).unwrap();

        let (color_out, depth_out) = SensorModelKind::GroundTruth.apply(color.clone(), depth.clone());
        assert_eq!(color_out, color);
        assert_eq!(depth_out, depth);
    }
}
