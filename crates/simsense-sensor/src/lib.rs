#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pipeline configuration.
pub mod config;

/// Error types for the sensor pipeline.
pub mod error;

/// Camera parameter handshake.
pub mod handshake;

/// Sensor model selection.
pub mod model;

/// Inbound raw frame messages.
pub mod msg;

/// The per-frame transform pipeline.
pub mod pipeline;

/// Outbound cloud transport.
pub mod sink;

pub use crate::config::{ConfigError, SensorConfig};
pub use crate::error::SensorError;
pub use crate::handshake::{CameraParamsService, HandshakeError};
pub use crate::model::SensorModelKind;
pub use crate::msg::{FrameHeader, RawSensorFrame};
pub use crate::pipeline::SensorPipeline;
pub use crate::sink::{CloudSink, MemorySink, SinkError};
