use rayon::prelude::*;

use simsense_image::ColorImage;

/// Pack an 8-bit RGB triplet into the bit pattern of an `f32`.
///
/// The 24-bit code `(r << 16) | (g << 8) | b` is bit-reinterpreted into the
/// float, never numerically converted, so downstream consumers can recover
/// the exact channels from the float's bits. The result is a bit container
/// only and must not be used in arithmetic.
///
/// # Example
///
/// ```
/// use simsense_3d::color::pack_rgb;
///
/// let packed = pack_rgb(255, 0, 0);
/// assert_eq!(packed.to_bits(), 0x00FF0000);
/// ```
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> f32 {
    f32::from_bits(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
}

/// Recover the RGB triplet from a packed color float.
///
/// Inverse of [`pack_rgb`], reading the float's bits directly.
#[inline]
pub fn unpack_rgb(packed: f32) -> (u8, u8, u8) {
    let bits = packed.to_bits();
    (
        ((bits >> 16) & 0xFF) as u8,
        ((bits >> 8) & 0xFF) as u8,
        (bits & 0xFF) as u8,
    )
}

/// Pack every pixel of an RGB image into color floats, in row-major order.
pub fn pack_colors(src: &ColorImage) -> Vec<f32> {
    src.as_slice()
        .par_chunks_exact(3)
        .map(|pixel| pack_rgb(pixel[0], pixel[1], pixel[2]))
        .collect()
}
