use simsense_image::ImageSize;

/// Error types for the camera module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CameraError {
    /// Error when an image dimension is zero.
    #[error("Image dimensions must be positive, got {0}x{1}")]
    InvalidImageSize(u32, u32),

    /// Error when the focal length is not a positive finite number.
    #[error("Focal length must be positive and finite, got {0}")]
    InvalidFocalLength(f64),
}

/// Intrinsic parameters of a simulated pinhole camera.
///
/// Obtained once from the camera parameter service at startup and immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// The image width in pixels
    pub width: u32,
    /// The image height in pixels
    pub height: u32,
    /// The focal length in pixels
    pub focal_length: f64,
}

/// Precomputed viewing-ray constants for one pixel.
///
/// For a pixel at offset (dx, dy) from the image center with radial pixel
/// distance r = sqrt(dx² + dy²) and focal length f:
///
/// * `inv_norm` = 1 / sqrt(1 + (r/f)²) converts ray length to axial depth
/// * `tan_x` = dx / f and `tan_y` = dy / f recover x and y by similar triangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRay {
    /// Ray length to axial depth conversion factor.
    pub inv_norm: f32,
    /// Horizontal offset from the optical axis per unit depth.
    pub tan_x: f32,
    /// Vertical offset from the optical axis per unit depth.
    pub tan_y: f32,
}

/// A pinhole camera with a precomputed per-pixel ray grid.
///
/// The grid depends only on the camera resolution and focal length and is
/// computed once at construction, in row-major pixel order.
///
/// # Example
///
/// ```
/// use simsense_3d::camera::{CameraParams, PinholeCamera};
///
/// let camera = PinholeCamera::new(CameraParams {
///     width: 4,
///     height: 2,
///     focal_length: 1.0,
/// })
/// .unwrap();
///
/// assert_eq!(camera.rays().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    params: CameraParams,
    rays: Vec<PixelRay>,
}

impl PinholeCamera {
    /// Create a camera model from validated intrinsic parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero or the focal length is not
    /// positive and finite.
    pub fn new(params: CameraParams) -> Result<Self, CameraError> {
        if params.width == 0 || params.height == 0 {
            return Err(CameraError::InvalidImageSize(params.width, params.height));
        }
        if !(params.focal_length.is_finite() && params.focal_length > 0.0) {
            return Err(CameraError::InvalidFocalLength(params.focal_length));
        }

        let center_x = params.width as f64 / 2.0;
        let center_y = params.height as f64 / 2.0;
        let f = params.focal_length;

        let mut rays = Vec::with_capacity(params.width as usize * params.height as usize);
        for row in 0..params.height {
            let dy = row as f64 - center_y;
            for col in 0..params.width {
                let dx = col as f64 - center_x;
                let r2 = dx * dx + dy * dy;
                rays.push(PixelRay {
                    inv_norm: (1.0 / (1.0 + r2 / (f * f)).sqrt()) as f32,
                    tan_x: (dx / f) as f32,
                    tan_y: (dy / f) as f32,
                });
            }
        }

        Ok(Self { params, rays })
    }

    /// Get the intrinsic parameters of the camera.
    pub fn params(&self) -> &CameraParams {
        &self.params
    }

    /// Get the camera resolution as an image size.
    pub fn image_size(&self) -> ImageSize {
        ImageSize {
            width: self.params.width as usize,
            height: self.params.height as usize,
        }
    }

    /// Get the per-pixel ray grid in row-major order.
    pub fn rays(&self) -> &[PixelRay] {
        &self.rays
    }
}
