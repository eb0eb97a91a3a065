use crate::cloud::PointCloud;

/// PointCloud2 datatype code for a 32-bit float field.
pub const FLOAT32: u8 = 7;

/// Bytes per point record: x, y, z and the packed color, each 4 bytes.
pub const POINT_STEP: u32 = 16;

/// Describes a single field in a point record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointField {
    /// Name of the field.
    pub name: &'static str,
    /// Byte offset from the start of the point record.
    pub offset: u32,
    /// Datatype code of the field elements.
    pub datatype: u8,
    /// Number of elements in the field.
    pub count: u32,
}

/// A serialized organized point cloud, compatible with the PointCloud2
/// wire format.
///
/// The payload is the row-major concatenation of 16-byte point records
/// `{x: f32, y: f32, z: f32, rgb: f32}` in little-endian byte order. The
/// `rgb` float carries a packed 24-bit color in its bit pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud2 {
    /// Acquisition time of the source frame in nanoseconds.
    pub stamp_ns: u64,
    /// Coordinate frame the points are expressed in.
    pub frame_id: String,
    /// Number of rows in the organized cloud.
    pub height: u32,
    /// Number of points per row.
    pub width: u32,
    /// The layout of one point record.
    pub fields: Vec<PointField>,
    /// Endianness of the payload; always little-endian here.
    pub is_bigendian: bool,
    /// Bytes per point record.
    pub point_step: u32,
    /// Bytes per row of point records.
    pub row_step: u32,
    /// The raw point records.
    pub data: Vec<u8>,
    /// Whether every grid cell holds a valid point.
    pub is_dense: bool,
}

/// The `[x, y, z, rgb]` field layout used for every outbound cloud.
pub fn xyzrgb_fields() -> Vec<PointField> {
    vec![
        PointField {
            name: "x",
            offset: 0,
            datatype: FLOAT32,
            count: 1,
        },
        PointField {
            name: "y",
            offset: 4,
            datatype: FLOAT32,
            count: 1,
        },
        PointField {
            name: "z",
            offset: 8,
            datatype: FLOAT32,
            count: 1,
        },
        PointField {
            name: "rgb",
            offset: 12,
            datatype: FLOAT32,
            count: 1,
        },
    ]
}

impl PointCloud2 {
    /// Serialize an organized cloud into a wire message.
    ///
    /// # Arguments
    ///
    /// * `stamp_ns` - Acquisition time copied from the source frame.
    /// * `frame_id` - Coordinate frame identifier.
    /// * `cloud` - The assembled cloud to serialize.
    pub fn from_cloud(stamp_ns: u64, frame_id: impl Into<String>, cloud: &PointCloud) -> Self {
        let size = cloud.size();
        let mut data = Vec::with_capacity(cloud.len() * POINT_STEP as usize);
        for (point, packed) in cloud.points().iter().zip(cloud.colors()) {
            data.extend_from_slice(&point[0].to_le_bytes());
            data.extend_from_slice(&point[1].to_le_bytes());
            data.extend_from_slice(&point[2].to_le_bytes());
            data.extend_from_slice(&packed.to_le_bytes());
        }

        Self {
            stamp_ns,
            frame_id: frame_id.into(),
            height: size.height as u32,
            width: size.width as u32,
            fields: xyzrgb_fields(),
            is_bigendian: false,
            point_step: POINT_STEP,
            row_step: POINT_STEP * size.width as u32,
            data,
            is_dense: true,
        }
    }

    /// Read back one point record from the payload.
    ///
    /// Returns the `[x, y, z, rgb]` floats at the given grid cell, or `None`
    /// if the cell is outside the cloud.
    pub fn point_at(&self, row: u32, col: u32) -> Option<[f32; 4]> {
        if row >= self.height || col >= self.width {
            return None;
        }

        let offset = (row * self.row_step + col * self.point_step) as usize;
        let record = self.data.get(offset..offset + self.point_step as usize)?;

        let mut point = [0.0f32; 4];
        for (value, bytes) in point.iter_mut().zip(record.chunks_exact(4)) {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(bytes);
            *value = f32::from_le_bytes(buf);
        }
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::pack_rgb;
    use simsense_image::ImageSize;

    fn sample_cloud() -> PointCloud {
        PointCloud::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                [0.0, 0.0, 1.0],
                [0.5, 0.0, 1.0],
                [0.0, 0.5, 1.0],
                [0.5, 0.5, 1.0],
            ],
            vec![
                pack_rgb(255, 0, 0),
                pack_rgb(0, 255, 0),
                pack_rgb(0, 0, 255),
                pack_rgb(255, 255, 255),
            ],
        )
        .unwrap()
    }

    #[test]
    fn message_layout() {
        let msg = PointCloud2::from_cloud(42, "camera", &sample_cloud());

        assert_eq!(msg.stamp_ns, 42);
        assert_eq!(msg.frame_id, "camera");
        assert_eq!(msg.width, 2);
        assert_eq!(msg.height, 2);
        assert_eq!(msg.point_step, 16);
        assert_eq!(msg.row_step, 32);
        assert!(!msg.is_bigendian);
        assert!(msg.is_dense);
        assert_eq!(msg.data.len(), 4 * 16);

        let offsets: Vec<u32> = msg.fields.iter().map(|f| f.offset).collect();
        assert_eq!(offsets, vec![0, 4, 8, 12]);
        assert!(msg.fields.iter().all(|f| f.datatype == FLOAT32));
    }

    #[test]
    fn payload_bytes_are_little_endian() {
        let msg = PointCloud2::from_cloud(0, "camera", &sample_cloud());

        // second record starts at byte 16 and holds x = 0.5
        assert_eq!(&msg.data[16..20], &0.5f32.to_le_bytes());
        // its rgb slot holds the green bit pattern
        assert_eq!(&msg.data[28..32], &0x0000FF00u32.to_le_bytes());
    }

    #[test]
    fn point_at_reads_back_records() {
        let msg = PointCloud2::from_cloud(0, "camera", &sample_cloud());

        let point = msg.point_at(1, 1).unwrap();
        assert_eq!(&point[..3], &[0.5, 0.5, 1.0]);
        assert_eq!(point[3].to_bits(), 0x00FFFFFF);

        assert!(msg.point_at(2, 0).is_none());
        assert!(msg.point_at(0, 2).is_none());
    }
}
