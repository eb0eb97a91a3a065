#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Image representation for the sensor frames.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Self-describing binary codec for shipping frames as opaque buffers.
pub mod bincode;

pub use crate::bincode::{decode_image, encode_image};
pub use crate::error::ImageError;
pub use crate::image::{ColorImage, DepthImage, Image, ImageSize};
