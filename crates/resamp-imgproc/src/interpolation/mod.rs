//! Pixel interpolation kernels for integer-factor upscaling.
//!
//! A kernel estimates one channel value between known samples ("nodes") that
//! sit every `scale` positions along a line of the destination grid. The
//! `position` argument is the destination coordinate along that line; only its
//! offset from the preceding node (`position % scale`) matters.
//!
//! # Interpolation Modes
//!
//! - **Linear**: weighted average of the two nodes around the position
//! - **Cubic**: Catmull-Rom curve through the four nearest nodes, saturated to `[0, 255]`

mod cubic;
mod linear;

pub use cubic::cubic_interpolation;
pub use linear::linear_interpolation;

/// Interpolate every channel of a pixel with the linear kernel.
#[inline]
pub(crate) fn linear_pixel<const C: usize>(
    scale: usize,
    position: usize,
    left: &[u8; C],
    right: &[u8; C],
) -> [u8; C] {
    std::array::from_fn(|c| linear_interpolation(scale, position, left[c], right[c]))
}

/// Interpolate every channel of a pixel with the cubic kernel.
#[inline]
pub(crate) fn cubic_pixel<const C: usize>(
    scale: usize,
    position: usize,
    window: [&[u8; C]; 4],
) -> [u8; C] {
    let [far_left, left, right, far_right] = window;
    std::array::from_fn(|c| {
        cubic_interpolation(
            scale,
            position,
            far_left[c],
            left[c],
            right[c],
            far_right[c],
        )
    })
}
