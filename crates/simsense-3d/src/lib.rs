#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pinhole camera model and per-pixel ray geometry.
pub mod camera;

/// Organized point cloud container.
pub mod cloud;

/// Packed RGB color encoding for point cloud payloads.
pub mod color;

/// I/O utilities for shipping point clouds over the wire.
pub mod io;

/// Ray-length depth to camera-frame coordinates.
pub mod projection;
