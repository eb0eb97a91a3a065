use simsense_image::{encode_image, ColorImage, DepthImage};

/// Header carried on every raw sensor frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct FrameHeader {
    /// Acquisition time in nanoseconds.
    pub acq_time_ns: u64,
    /// Monotonic frame counter assigned by the producer.
    pub sequence: u64,
}

/// A raw color+depth frame pair as delivered by the simulated camera.
///
/// The two buffers are opaque to the transport; each holds a
/// self-describing encoded image (shape followed by elements, see
/// [`simsense_image::encode_image`]). Both buffers of one message come
/// from the same rendered frame.
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct RawSensorFrame {
    /// The frame header.
    pub header: FrameHeader,
    /// The encoded RGB image.
    pub color_data: Vec<u8>,
    /// The encoded ray-length depth image.
    pub depth_data: Vec<u8>,
}

impl RawSensorFrame {
    /// Build a raw frame message by encoding a color+depth image pair.
    pub fn from_images(
        header: FrameHeader,
        color: &ColorImage,
        depth: &DepthImage,
    ) -> Result<Self, bincode::error::EncodeError> {
        Ok(Self {
            header,
            color_data: encode_image(color)?,
            depth_data: encode_image(depth)?,
        })
    }
}
