use crate::config::ConfigError;
use crate::handshake::HandshakeError;
use crate::sink::SinkError;
use simsense_3d::camera::CameraError;
use simsense_3d::cloud::CloudError;
use simsense_3d::projection::ProjectionError;
use simsense_image::ImageError;

/// An error type for the sensor pipeline.
#[derive(thiserror::Error, Debug)]
pub enum SensorError {
    /// Error when the pipeline configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Error when the camera parameters are rejected.
    #[error("Invalid camera parameters. {0}")]
    Camera(#[from] CameraError),

    /// Error when the camera parameter handshake fails.
    #[error("Camera parameter handshake failed. {0}")]
    Handshake(#[from] HandshakeError),

    /// Error when an inbound buffer fails to decode.
    #[error("Failed to decode frame buffer. {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// Error when a decoded image is inconsistent.
    #[error("Failed to build image. {0}")]
    Image(#[from] ImageError),

    /// Error when the depth frame does not match the camera resolution.
    #[error("Failed to project depth. {0}")]
    Projection(#[from] ProjectionError),

    /// Error when the assembled cloud is inconsistent.
    #[error("Failed to assemble cloud. {0}")]
    Cloud(#[from] CloudError),

    /// Error when the color and depth frames of one message disagree in size.
    #[error("Color frame size ({0}x{1}) does not match depth frame size ({2}x{3})")]
    FrameMismatch(usize, usize, usize, usize),

    /// Error when publishing the cloud fails.
    #[error("Failed to publish cloud. {0}")]
    Sink(#[from] SinkError),
}
