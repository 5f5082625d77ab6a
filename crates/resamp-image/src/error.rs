/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image size is not valid for the requested operation.
    #[error("Invalid image size: got ({2}, {3}), expected ({0}, {1})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the image has no pixels.
    #[error("Image has no pixels ({0}x{1})")]
    EmptyImage(usize, usize),

    /// Error when the scale factor is zero or too large for the image.
    #[error("Invalid scale factor {0}: must be >= 1 and keep the scaled size addressable")]
    InvalidScaleFactor(usize),

    /// Error when the pixel buffer of an image would not fit in memory.
    #[error("Image size ({0}x{1}) is too large to allocate")]
    ImageTooLarge(usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a transform description cannot be parsed.
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),
}
