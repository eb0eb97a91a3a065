#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use simsense_image as image;

#[doc(inline)]
pub use simsense_3d as s3d;

#[doc(inline)]
pub use simsense_sensor as sensor;
