use resamp_image::{Image, ImageError};

/// Whether the destination coordinate `(x, y)` maps exactly onto a source pixel.
///
/// # Example
///
/// ```
/// use resamp_imgproc::grid::is_node;
///
/// assert!(is_node(3, 6, 3));
/// assert!(!is_node(3, 4, 3));
/// ```
#[inline]
pub fn is_node(x: usize, y: usize, scale: usize) -> bool {
    x % scale == 0 && y % scale == 0
}

/// Place the source pixels onto their node coordinates in the destination grid.
///
/// The pixel at `(sx, sy)` is copied to `(sx * scale, sy * scale)`. Every other
/// destination pixel keeps its current value.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H * scale, W * scale, C).
/// * `scale` - The integer upscaling factor.
///
/// # Errors
///
/// Returns an error if the scale is zero or the destination is not exactly
/// `scale` times the source size.
///
/// # Example
///
/// ```
/// use resamp_image::{Image, ImageSize};
/// use resamp_imgproc::grid::map_base_pixels;
///
/// let src = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![7, 9]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(src.size().scaled(2).unwrap(), 0).unwrap();
///
/// map_base_pixels(&src, &mut dst, 2).unwrap();
///
/// assert_eq!(dst.as_slice(), &[7, 0, 9, 0, 0, 0, 0, 0]);
/// ```
pub fn map_base_pixels<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    scale: usize,
) -> Result<(), ImageError>
where
    T: Copy,
{
    if scale == 0 {
        return Err(ImageError::InvalidScaleFactor(scale));
    }

    let expected = src.size().scaled(scale)?;
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            expected.width,
            expected.height,
            dst.width(),
            dst.height(),
        ));
    }

    if src.size().is_empty() {
        return Ok(());
    }

    for (sy, row) in src.as_slice().chunks_exact(src.cols() * C).enumerate() {
        for (sx, pixel) in row.chunks_exact(C).enumerate() {
            dst.pixel_mut(sx * scale, sy * scale).copy_from_slice(pixel);
        }
    }

    Ok(())
}
