/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images that must agree in size do not.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel coordinate is outside the image bounds.
    #[error("Pixel index ({0}, {1}) out of bounds for image of size ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}
