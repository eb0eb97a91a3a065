use simsense_image::ImageSize;

/// Error types for the cloud module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CloudError {
    /// Error when the number of points does not match the cloud grid.
    #[error("Point count ({0}) does not match the cloud grid ({1})")]
    InvalidPointCount(usize, usize),

    /// Error when the number of colors does not match the number of points.
    #[error("Color count ({0}) does not match the point count ({1})")]
    InvalidColorCount(usize, usize),
}

/// An organized point cloud over a width×height pixel grid.
///
/// Every grid cell yields a valid point (the cloud is dense), laid out in
/// row-major order: the point for pixel (row=0, col=0) comes first. Each
/// point carries camera-frame coordinates and one packed color float.
#[derive(Debug, Clone)]
pub struct PointCloud {
    size: ImageSize,
    // The camera-frame points in row-major pixel order.
    points: Vec<[f32; 3]>,
    // One packed color per point, bit containers only.
    colors: Vec<f32>,
}

impl PointCloud {
    /// Create an organized point cloud from points and packed colors.
    ///
    /// # Errors
    ///
    /// Returns an error if the point or color count does not cover the grid.
    pub fn new(size: ImageSize, points: Vec<[f32; 3]>, colors: Vec<f32>) -> Result<Self, CloudError> {
        if points.len() != size.width * size.height {
            return Err(CloudError::InvalidPointCount(
                points.len(),
                size.width * size.height,
            ));
        }
        if colors.len() != points.len() {
            return Err(CloudError::InvalidColorCount(colors.len(), points.len()));
        }

        Ok(Self {
            size,
            points,
            colors,
        })
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the pixel grid the cloud is organized over.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    /// Get as reference the packed colors of the points.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }
}
