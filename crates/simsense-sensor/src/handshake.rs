use simsense_3d::camera::CameraParams;

/// Error types for the camera parameter handshake.
#[derive(thiserror::Error, Debug)]
pub enum HandshakeError {
    /// Error when the camera parameter service cannot be reached.
    #[error("Camera parameter service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Synchronous access to the intrinsic parameters of the simulated camera.
///
/// The pipeline blocks on this once at startup, before accepting any
/// frames. A failure is fatal to initialization, never to an individual
/// frame.
pub trait CameraParamsService {
    /// Request the camera parameters.
    fn get_camera_params(&self) -> Result<CameraParams, HandshakeError>;
}

/// Known-ahead-of-time parameters double as a trivially available service.
impl CameraParamsService for CameraParams {
    fn get_camera_params(&self) -> Result<CameraParams, HandshakeError> {
        Ok(*self)
    }
}
