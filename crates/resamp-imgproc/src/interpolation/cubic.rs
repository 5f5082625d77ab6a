/// Kernel for cubic interpolation over a window of four consecutive nodes.
///
/// Evaluates the Catmull-Rom polynomial through `far_left`, `left`, `right` and
/// `far_right` at `t = (position % scale) / scale`, i.e. between `left` and `right`.
/// The curve may overshoot its control points; the result is saturated to
/// `[0, 255]` and then truncated.
///
/// # Arguments
///
/// * `scale` - The distance between two nodes. Must be >= 1.
/// * `position` - The destination coordinate being interpolated.
/// * `far_left` - The channel value two nodes before the position.
/// * `left` - The channel value at the node before the position.
/// * `right` - The channel value at the node after the position.
/// * `far_right` - The channel value two nodes after the position.
///
/// # Returns
///
/// The interpolated channel value.
///
/// # Example
///
/// ```
/// use resamp_imgproc::interpolation::cubic_interpolation;
///
/// assert_eq!(cubic_interpolation(2, 1, 0, 0, 255, 255), 127);
/// // overshoot is saturated instead of wrapping
/// assert_eq!(cubic_interpolation(2, 1, 0, 255, 255, 0), 255);
/// ```
#[inline]
pub fn cubic_interpolation(
    scale: usize,
    position: usize,
    far_left: u8,
    left: u8,
    right: u8,
    far_right: u8,
) -> u8 {
    let t = (position % scale) as f32 / scale as f32;

    let (p0, p1, p2, p3) = (
        far_left as f32,
        left as f32,
        right as f32,
        far_right as f32,
    );

    let value = p1
        + 0.5
            * t
            * (p2 - p0
                + t * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3 + t * (3.0 * (p1 - p2) + p3 - p0)));

    value.clamp(0.0, 255.0) as u8
}
