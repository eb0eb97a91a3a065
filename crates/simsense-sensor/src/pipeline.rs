use crate::config::SensorConfig;
use crate::error::SensorError;
use crate::handshake::CameraParamsService;
use crate::model::SensorModelKind;
use crate::msg::RawSensorFrame;
use crate::sink::CloudSink;
use simsense_3d::camera::PinholeCamera;
use simsense_3d::cloud::PointCloud;
use simsense_3d::color::pack_colors;
use simsense_3d::io::pointcloud2::PointCloud2;
use simsense_3d::projection::unproject_depth;
use simsense_image::{decode_image, ColorImage, DepthImage};

/// The sensor model pipeline, from raw frame pairs to published clouds.
///
/// A pipeline only exists in the ready state: [`SensorPipeline::bootstrap`]
/// performs the camera parameter handshake and builds the camera model
/// before the first frame can be processed, so no entry point can observe
/// an uninitialized pipeline. The camera parameters are read-only after
/// construction.
///
/// Each frame is an independent, synchronous transform: decode both
/// buffers, run the sensor model, project depth and pack color from the
/// same decoded pair, assemble, serialize, publish. No cross-frame state,
/// no queueing, no retries.
pub struct SensorPipeline<S: CloudSink> {
    camera: PinholeCamera,
    model: SensorModelKind,
    frame_id: String,
    sink: S,
}

impl<S: CloudSink> SensorPipeline<S> {
    /// Perform the startup handshake and build a ready pipeline.
    ///
    /// Blocks on the camera parameter service; any failure here is fatal
    /// to startup.
    ///
    /// # Example
    ///
    /// ```
    /// use simsense_3d::camera::CameraParams;
    /// use simsense_sensor::{MemorySink, SensorConfig, SensorPipeline};
    ///
    /// let params = CameraParams {
    ///     width: 4,
    ///     height: 2,
    ///     focal_length: 1.0,
    /// };
    /// let pipeline =
    ///     SensorPipeline::bootstrap(SensorConfig::default(), &params, MemorySink::new()).unwrap();
    /// assert_eq!(pipeline.camera().params().width, 4);
    /// ```
    pub fn bootstrap(
        config: SensorConfig,
        service: &impl CameraParamsService,
        sink: S,
    ) -> Result<Self, SensorError> {
        log::info!("Waiting for camera parameters ...");
        let params = service.get_camera_params()?;
        let camera = PinholeCamera::new(params)?;

        log::info!(
            "Sensor model '{}' ready: {}x{} at f={:.1}",
            config.model,
            params.width,
            params.height,
            params.focal_length
        );

        Ok(Self {
            camera,
            model: config.model,
            frame_id: config.frame_id,
            sink,
        })
    }

    /// Get the camera model the pipeline was bootstrapped with.
    pub fn camera(&self) -> &PinholeCamera {
        &self.camera
    }

    /// Get the publish sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Transform one raw frame pair into a point cloud message.
    ///
    /// # Errors
    ///
    /// Fails if either buffer does not decode, if the color and depth
    /// frames disagree in size, or if the depth frame does not match the
    /// camera resolution. Failures leave the pipeline untouched; the next
    /// frame starts from a clean slate.
    pub fn process_raw(&self, raw: &RawSensorFrame) -> Result<PointCloud2, SensorError> {
        let color: ColorImage = decode_image(&raw.color_data)?;
        let depth: DepthImage = decode_image(&raw.depth_data)?;

        if color.size() != depth.size() {
            return Err(SensorError::FrameMismatch(
                color.cols(),
                color.rows(),
                depth.cols(),
                depth.rows(),
            ));
        }

        let (color, depth) = self.model.apply(color, depth);

        // geometry and color come from the same decoded pair and have no
        // shared mutable state, so both halves can run concurrently
        let camera = &self.camera;
        let (points, colors) = rayon::join(
            || unproject_depth(camera, &depth),
            || pack_colors(&color),
        );

        let cloud = PointCloud::new(depth.size(), points?, colors)?;
        Ok(PointCloud2::from_cloud(
            raw.header.acq_time_ns,
            self.frame_id.as_str(),
            &cloud,
        ))
    }

    /// Process one raw frame and publish the result.
    ///
    /// Per-frame errors are caught here at the frame boundary: the frame
    /// is dropped and logged with its sequence and stamp, and the pipeline
    /// keeps accepting subsequent frames.
    pub fn handle_raw(&mut self, raw: &RawSensorFrame) {
        match self.process_raw(raw) {
            Ok(msg) => {
                if let Err(e) = self.sink.publish(msg) {
                    log::error!(
                        "Failed to publish cloud for frame seq {} ({} ns): {}",
                        raw.header.sequence,
                        raw.header.acq_time_ns,
                        e
                    );
                }
            }
            Err(e) => {
                log::error!(
                    "Dropping frame seq {} ({} ns): {}",
                    raw.header.sequence,
                    raw.header.acq_time_ns,
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::FrameHeader;
    use crate::sink::MemorySink;
    use simsense_3d::camera::CameraParams;
    use simsense_image::ImageSize;

    fn ready_pipeline(width: u32, height: u32) -> SensorPipeline<MemorySink> {
        let params = CameraParams {
            width,
            height,
            focal_length: 1.0,
        };
        SensorPipeline::bootstrap(SensorConfig::default(), &params, MemorySink::new()).unwrap()
    }

    fn raw_frame(size: ImageSize, depth_val: f32, rgb: [u8; 3]) -> RawSensorFrame {
        let color = ColorImage::new(size, rgb.repeat(size.width * size.height)).unwrap();
        let depth = DepthImage::from_size_val(size, depth_val).unwrap();
        RawSensorFrame::from_images(
            FrameHeader {
                acq_time_ns: 1_000,
                sequence: 1,
            },
            &color,
            &depth,
        )
        .unwrap()
    }

    #[test]
    fn processes_one_frame() -> Result<(), SensorError> {
        let pipeline = ready_pipeline(4, 2);
        let raw = raw_frame(
            ImageSize {
                width: 4,
                height: 2,
            },
            2.0,
            [255, 0, 0],
        );

        let msg = pipeline.process_raw(&raw)?;
        assert_eq!(msg.width, 4);
        assert_eq!(msg.height, 2);
        assert_eq!(msg.stamp_ns, 1_000);
        assert_eq!(msg.frame_id, "camera");

        Ok(())
    }

    #[test]
    fn rejects_mismatched_frame_pair() {
        let pipeline = ready_pipeline(4, 2);

        let color = ColorImage::from_size_val(
            ImageSize {
                width: 5,
                height: 2,
            },
            0,
        )
        .unwrap();
        let depth = DepthImage::from_size_val(
            ImageSize {
                width: 4,
                height: 2,
            },
            1.0,
        )
        .unwrap();
        let raw = RawSensorFrame::from_images(
            FrameHeader {
                acq_time_ns: 0,
                sequence: 0,
            },
            &color,
            &depth,
        )
        .unwrap();

        let result = pipeline.process_raw(&raw);
        assert!(matches!(
            result,
            Err(SensorError::FrameMismatch(5, 2, 4, 2))
        ));
    }

    #[test]
    fn rejects_malformed_buffer() {
        let pipeline = ready_pipeline(4, 2);
        let mut raw = raw_frame(
            ImageSize {
                width: 4,
                height: 2,
            },
            1.0,
            [0, 0, 0],
        );
        raw.depth_data.truncate(raw.depth_data.len() / 2);

        let result = pipeline.process_raw(&raw);
        assert!(matches!(result, Err(SensorError::Decode(_))));
    }

    #[test]
    fn dropped_frame_does_not_poison_the_pipeline() {
        let mut pipeline = ready_pipeline(4, 2);
        let size = ImageSize {
            width: 4,
            height: 2,
        };

        let mut bad = raw_frame(size, 1.0, [0, 0, 0]);
        bad.color_data.clear();
        pipeline.handle_raw(&bad);
        assert!(pipeline.sink().clouds().is_empty());

        let good = raw_frame(size, 2.0, [10, 20, 30]);
        pipeline.handle_raw(&good);
        assert_eq!(pipeline.sink().clouds().len(), 1);
    }
}
