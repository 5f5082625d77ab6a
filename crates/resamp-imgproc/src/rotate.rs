use std::fmt;

use resamp_image::{Image, ImageError};

/// Direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// 90 degrees clockwise.
    Clockwise,
    /// 90 degrees counter-clockwise.
    CounterClockwise,
}

impl RotationDirection {
    /// The direction undoing this one.
    pub fn inverse(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationDirection::Clockwise => f.write_str("cw"),
            RotationDirection::CounterClockwise => f.write_str("ccw"),
        }
    }
}

fn check_rotation_size<T, const C: usize>(
    src: &Image<T, C>,
    dst: &Image<T, C>,
) -> Result<(), ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::EmptyImage(src.width(), src.height()));
    }

    let expected = src.size().transposed();
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            expected.width,
            expected.height,
            dst.width(),
            dst.height(),
        ));
    }

    Ok(())
}

/// Rotate the input image 90 degrees clockwise.
///
/// The pixel at `(x, y)` moves to `(w - y, x)` with `w = dst.width() - 1`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (W, H, C).
///
/// # Errors
///
/// Returns an error if the source is empty or the destination is not the
/// transposed size of the source.
///
/// # Example
///
/// ```
/// use resamp_image::{Image, ImageSize};
/// use resamp_imgproc::rotate::rotate90_cw;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 2,
///     },
///     vec![0, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let mut rotated = Image::<u8, 1>::from_size_val(image.size().transposed(), 0).unwrap();
///
/// rotate90_cw(&image, &mut rotated).unwrap();
///
/// assert_eq!(rotated.size().width, 2);
/// assert_eq!(rotated.size().height, 3);
/// assert_eq!(rotated.as_slice(), &[3, 0, 4, 1, 5, 2]);
/// ```
pub fn rotate90_cw<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Copy,
{
    check_rotation_size(src, dst)?;
    log::debug!("rotate {} clockwise", src.size());

    let w = dst.width() - 1;

    for (y, row) in src.as_slice().chunks_exact(src.cols() * C).enumerate() {
        for (x, pixel) in row.chunks_exact(C).enumerate() {
            dst.pixel_mut(w - y, x).copy_from_slice(pixel);
        }
    }

    Ok(())
}

/// Rotate the input image 90 degrees counter-clockwise.
///
/// The pixel at `(x, y)` moves to `(y, w - x)` with `w = dst.height() - 1`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (W, H, C).
///
/// # Errors
///
/// Returns an error if the source is empty or the destination is not the
/// transposed size of the source.
///
/// # Example
///
/// ```
/// use resamp_image::{Image, ImageSize};
/// use resamp_imgproc::rotate::rotate90_ccw;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 2,
///     },
///     vec![0, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let mut rotated = Image::<u8, 1>::from_size_val(image.size().transposed(), 0).unwrap();
///
/// rotate90_ccw(&image, &mut rotated).unwrap();
///
/// assert_eq!(rotated.as_slice(), &[2, 5, 1, 4, 0, 3]);
/// ```
pub fn rotate90_ccw<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Copy,
{
    check_rotation_size(src, dst)?;
    log::debug!("rotate {} counter-clockwise", src.size());

    let w = dst.height() - 1;

    for (y, row) in src.as_slice().chunks_exact(src.cols() * C).enumerate() {
        for (x, pixel) in row.chunks_exact(C).enumerate() {
            dst.pixel_mut(y, w - x).copy_from_slice(pixel);
        }
    }

    Ok(())
}

/// Rotate the input image a quarter turn in the given direction.
pub fn rotate90<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    direction: RotationDirection,
) -> Result<(), ImageError>
where
    T: Copy,
{
    match direction {
        RotationDirection::Clockwise => rotate90_cw(src, dst),
        RotationDirection::CounterClockwise => rotate90_ccw(src, dst),
    }
}

/// Rotate the input image a quarter turn into a newly allocated image.
pub fn rotated<T, const C: usize>(
    src: &Image<T, C>,
    direction: RotationDirection,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default,
{
    let mut dst = Image::from_size_val(src.size().transposed(), T::default())?;
    rotate90(src, &mut dst, direction)?;
    Ok(dst)
}
