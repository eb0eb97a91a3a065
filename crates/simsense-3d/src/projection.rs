use rayon::prelude::*;

use crate::camera::PinholeCamera;
use simsense_image::DepthImage;

/// Error types for the projection module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProjectionError {
    /// Error when the depth image does not match the camera resolution.
    #[error("Depth image size ({0}x{1}) does not match the camera resolution ({2}x{3})")]
    ShapeMismatch(usize, usize, usize, usize),
}

/// Convert a ray-length depth image into camera-frame coordinates.
///
/// Depth values hold the Euclidean distance from the optical center to the
/// scene point along the viewing ray, not the distance to the image plane.
/// For each pixel the axial depth is recovered as
///
/// ```text
/// z = depth / sqrt(1 + (r / f)^2)
/// x = z * dx / f
/// y = z * dy / f
/// ```
///
/// so the output preserves the ray length: `sqrt(x² + y² + z²) == depth`.
/// A zero depth maps to the origin.
///
/// # Arguments
///
/// * `camera` - The camera model the depth image was rendered with.
/// * `depth` - The ray-length depth image.
///
/// # Returns
///
/// The camera-frame points `[x, y, z]` in row-major pixel order.
///
/// # Errors
///
/// Returns an error if the depth image shape does not exactly match the
/// camera resolution.
///
/// # Example
///
/// ```
/// use simsense_3d::camera::{CameraParams, PinholeCamera};
/// use simsense_3d::projection::unproject_depth;
/// use simsense_image::{DepthImage, ImageSize};
///
/// let camera = PinholeCamera::new(CameraParams {
///     width: 4,
///     height: 2,
///     focal_length: 1.0,
/// })
/// .unwrap();
///
/// let depth = DepthImage::from_size_val(camera.image_size(), 2.0).unwrap();
/// let points = unproject_depth(&camera, &depth).unwrap();
///
/// // the center pixel looks straight down the optical axis
/// assert_eq!(points[1 * 4 + 2], [0.0, 0.0, 2.0]);
/// ```
pub fn unproject_depth(
    camera: &PinholeCamera,
    depth: &DepthImage,
) -> Result<Vec<[f32; 3]>, ProjectionError> {
    let size = camera.image_size();
    if depth.size() != size {
        return Err(ProjectionError::ShapeMismatch(
            depth.cols(),
            depth.rows(),
            size.width,
            size.height,
        ));
    }

    let cols = size.width;
    let mut points = vec![[0.0f32; 3]; cols * size.height];

    // parallelize the unprojection by rows
    points
        .par_chunks_exact_mut(cols)
        .zip(depth.as_slice().par_chunks_exact(cols))
        .zip(camera.rays().par_chunks_exact(cols))
        .for_each(|((points_row, depth_row), rays_row)| {
            points_row
                .iter_mut()
                .zip(depth_row.iter().zip(rays_row.iter()))
                .for_each(|(point, (&d, ray))| {
                    let z = d * ray.inv_norm;
                    *point = [z * ray.tan_x, z * ray.tan_y, z];
                });
        });

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraParams;
    use approx::assert_relative_eq;
    use simsense_image::ImageSize;

    fn camera(width: u32, height: u32, focal_length: f64) -> PinholeCamera {
        PinholeCamera::new(CameraParams {
            width,
            height,
            focal_length,
        })
        .unwrap()
    }

    #[test]
    fn preserves_ray_length() -> Result<(), ProjectionError> {
        let camera = camera(8, 6, 2.5);
        let depth = DepthImage::new(
            camera.image_size(),
            (0..48).map(|i| i as f32 * 0.25).collect(),
        )
        .unwrap();

        let points = unproject_depth(&camera, &depth)?;
        for (point, &d) in points.iter().zip(depth.as_slice()) {
            let norm = (point[0] * point[0] + point[1] * point[1] + point[2] * point[2]).sqrt();
            assert_relative_eq!(norm, d, epsilon = 1e-4, max_relative = 1e-5);
        }

        Ok(())
    }

    #[test]
    fn center_pixel_is_exact() -> Result<(), ProjectionError> {
        let camera = camera(4, 2, 1.0);
        let depth = DepthImage::from_size_val(camera.image_size(), 7.5).unwrap();

        let points = unproject_depth(&camera, &depth)?;
        assert_eq!(points[1 * 4 + 2], [0.0, 0.0, 7.5]);

        Ok(())
    }

    #[test]
    fn zero_depth_maps_to_origin() -> Result<(), ProjectionError> {
        let camera = camera(4, 4, 0.5);
        let depth = DepthImage::from_size_val(camera.image_size(), 0.0).unwrap();

        let points = unproject_depth(&camera, &depth)?;
        assert!(points.iter().all(|p| *p == [0.0, 0.0, 0.0]));

        Ok(())
    }

    #[test]
    fn rejects_shape_mismatch() {
        let camera = camera(4, 2, 1.0);
        let depth = DepthImage::from_size_val(
            ImageSize {
                width: 5,
                height: 2,
            },
            1.0,
        )
        .unwrap();

        let result = unproject_depth(&camera, &depth);
        assert_eq!(result, Err(ProjectionError::ShapeMismatch(5, 2, 4, 2)));
    }
}
