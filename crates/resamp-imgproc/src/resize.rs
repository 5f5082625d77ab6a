use std::fmt;
use std::str::FromStr;

use resamp_image::{Image, ImageError};

use crate::grid::map_base_pixels;
use crate::interpolation::{cubic_pixel, linear_pixel};

/// Upscaling mode of the resampling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Only the node pixels are written; everything else keeps the blank value.
    Sparse,
    /// Separable linear interpolation between neighbouring nodes.
    Linear,
    /// Separable cubic interpolation, with linear interpolation at the borders.
    Cubic,
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleMode::Sparse => "sparse",
            ScaleMode::Linear => "linear",
            ScaleMode::Cubic => "cubic",
        };
        f.write_str(name)
    }
}

impl FromStr for ScaleMode {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sparse" | "simple" | "nearest" => Ok(ScaleMode::Sparse),
            "linear" | "bilinear" => Ok(ScaleMode::Linear),
            "cubic" | "bicubic" => Ok(ScaleMode::Cubic),
            _ => Err(ImageError::InvalidTransform(format!(
                "unknown scale mode '{s}'"
            ))),
        }
    }
}

// Kernel used to fill the gaps of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKernel {
    Linear,
    Cubic,
}

/// A strided view over one row or one column of an interleaved pixel buffer.
struct LineMut<'a, const C: usize> {
    data: &'a mut [u8],
    start: usize,
    stride: usize,
    len: usize,
}

impl<const C: usize> LineMut<'_, C> {
    #[inline]
    fn get(&self, i: usize) -> [u8; C] {
        let base = self.start + i * self.stride;
        std::array::from_fn(|c| self.data[base + c])
    }

    #[inline]
    fn set(&mut self, i: usize, pixel: [u8; C]) {
        let base = self.start + i * self.stride;
        self.data[base..base + C].copy_from_slice(&pixel);
    }

    /// Fill every non-node sample of the line from the nodes placed every `scale` samples.
    ///
    /// Interval `k` spans the nodes `k` and `k + 1`. The cubic kernel needs the nodes
    /// `k - 1` and `k + 2` as well, so the first and the last interval fall back to the
    /// linear kernel. Samples after the last node are clamped to it.
    ///
    /// The fallback is resolved here, per line, so the horizontal pass reads border
    /// columns that are already final. Overwriting the border bands with linear values
    /// after a complete cubic fill is not equivalent: in the border bands the two
    /// orders differ by a few levels once the cubic kernel saturates.
    fn fill(&mut self, scale: usize, kernel: LineKernel) {
        let num_nodes = (self.len - 1) / scale + 1;

        for k in 0..num_nodes - 1 {
            let left = self.get(k * scale);
            let right = self.get((k + 1) * scale);

            let outer = match kernel {
                LineKernel::Cubic if k >= 1 && k + 2 < num_nodes => {
                    Some((self.get((k - 1) * scale), self.get((k + 2) * scale)))
                }
                _ => None,
            };

            for pos in k * scale + 1..(k + 1) * scale {
                let pixel = match &outer {
                    Some((far_left, far_right)) => {
                        cubic_pixel(scale, pos, [far_left, &left, &right, far_right])
                    }
                    None => linear_pixel(scale, pos, &left, &right),
                };
                self.set(pos, pixel);
            }
        }

        // no node to the right: clamp to the last one
        let last_node = (num_nodes - 1) * scale;
        let last = self.get(last_node);
        for pos in last_node + 1..self.len {
            self.set(pos, last);
        }
    }
}

// Two-pass separable fill: node columns top to bottom, then every row left to right.
fn fill_separable<const C: usize>(dst: &mut Image<u8, C>, scale: usize, kernel: LineKernel) {
    let (cols, rows) = (dst.cols(), dst.rows());
    let row_stride = cols * C;

    // vertical pass: complete the columns holding nodes
    for x in (0..cols).step_by(scale) {
        LineMut::<C> {
            data: dst.as_slice_mut(),
            start: x * C,
            stride: row_stride,
            len: rows,
        }
        .fill(scale, kernel);
    }
    log::trace!("vertical pass done on {} node columns", cols.div_ceil(scale));

    // horizontal pass: the node columns are now dense anchors for every row
    for y in 0..rows {
        LineMut::<C> {
            data: dst.as_slice_mut(),
            start: y * row_stride,
            stride: C,
            len: cols,
        }
        .fill(scale, kernel);
    }
    log::trace!("horizontal pass done on {} rows", rows);
}

/// Upscale an image by an integer factor.
///
/// The source pixels are first placed on the node coordinates of the destination
/// (see [`map_base_pixels`]). Depending on the mode the remaining pixels are:
///
/// * [`ScaleMode::Sparse`]: left untouched.
/// * [`ScaleMode::Linear`]: filled by linear interpolation, first along the columns
///   that hold nodes, then along every row.
/// * [`ScaleMode::Cubic`]: filled the same way with the cubic kernel where four nodes
///   are available, and with the linear kernel in the first and last interval of
///   each line.
///
/// In the interpolating modes the band after the last node row/column is filled with
/// the value of that node (clamp to edge).
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (H * scale, W * scale, C).
/// * `scale` - The integer upscaling factor, >= 1.
/// * `mode` - The upscaling mode.
///
/// # Errors
///
/// Returns an error if the scale is zero, the source is empty or the destination
/// size is not `scale` times the source size.
///
/// # Example
///
/// ```
/// use resamp_image::{Image, ImageSize};
/// use resamp_imgproc::resize::{upscale, ScaleMode};
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0, 0, 0, 255, 255, 255],
/// )
/// .unwrap();
///
/// let mut scaled = Image::<u8, 3>::from_size_val(image.size().scaled(2).unwrap(), 0).unwrap();
///
/// upscale(&image, &mut scaled, 2, ScaleMode::Linear).unwrap();
///
/// assert_eq!(scaled.size().width, 4);
/// assert_eq!(scaled.size().height, 2);
/// assert_eq!(scaled.pixel(1, 0), &[127, 127, 127]);
/// ```
pub fn upscale<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    scale: usize,
    mode: ScaleMode,
) -> Result<(), ImageError> {
    if scale == 0 {
        return Err(ImageError::InvalidScaleFactor(scale));
    }

    if src.size().is_empty() {
        return Err(ImageError::EmptyImage(src.width(), src.height()));
    }

    log::debug!(
        "upscale {} x{} with {} interpolation",
        src.size(),
        scale,
        mode
    );

    map_base_pixels(src, dst, scale)?;

    if scale == 1 {
        return Ok(());
    }

    match mode {
        ScaleMode::Sparse => {}
        ScaleMode::Linear => fill_separable(dst, scale, LineKernel::Linear),
        ScaleMode::Cubic => {
            if src.width() < 4 || src.height() < 4 {
                log::warn!(
                    "{} is too small for a full cubic window on every axis, using linear fallback there",
                    src.size()
                );
            }
            fill_separable(dst, scale, LineKernel::Cubic)
        }
    }

    Ok(())
}

/// Upscale an image without interpolation, leaving blank space between the nodes.
///
/// See [`upscale`] with [`ScaleMode::Sparse`].
pub fn simple_scale<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    scale: usize,
) -> Result<(), ImageError> {
    upscale(src, dst, scale, ScaleMode::Sparse)
}

/// Upscale an image with separable linear interpolation.
///
/// See [`upscale`] with [`ScaleMode::Linear`].
pub fn linear_scale<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    scale: usize,
) -> Result<(), ImageError> {
    upscale(src, dst, scale, ScaleMode::Linear)
}

/// Upscale an image with separable cubic interpolation.
///
/// See [`upscale`] with [`ScaleMode::Cubic`].
pub fn cubic_scale<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    scale: usize,
) -> Result<(), ImageError> {
    upscale(src, dst, scale, ScaleMode::Cubic)
}

/// Upscale an image into a newly allocated, zero-filled destination.
///
/// # Example
///
/// ```
/// use resamp_image::{Image, ImageSize};
/// use resamp_imgproc::resize::{upscaled, ScaleMode};
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 3, height: 5 }, 9).unwrap();
/// let scaled = upscaled(&image, 4, ScaleMode::Cubic).unwrap();
///
/// assert_eq!(scaled.size(), ImageSize { width: 12, height: 20 });
/// assert!(scaled.as_slice().iter().all(|&v| v == 9));
/// ```
pub fn upscaled<const C: usize>(
    src: &Image<u8, C>,
    scale: usize,
    mode: ScaleMode,
) -> Result<Image<u8, C>, ImageError> {
    if scale == 0 {
        return Err(ImageError::InvalidScaleFactor(scale));
    }

    let mut dst = Image::from_size_val(src.size().scaled(scale)?, 0u8)?;
    upscale(src, &mut dst, scale, mode)?;

    Ok(dst)
}
