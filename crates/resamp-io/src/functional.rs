use std::path::Path;

use resamp_image::{Image, ImageSize, PixelGrid};

use crate::error::IoError;

/// Reads an image from the given file path as rgb8.
///
/// The method tries to read from any image format supported by the image crate
/// and converts the result to 8-bit, three channel pixels. Alpha is dropped and
/// grayscale is replicated to the three channels.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<PixelGrid, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;

    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    if img.color() != image::ColorType::Rgb8 {
        log::debug!("converting {:?} to rgb8", img.color());
    }

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}
