/// Kernel for linear interpolation between two nodes.
///
/// The weights are the integer distances to the opposite node, so the result is
/// exact at the left node and moves towards `right` as the position advances.
/// The division truncates.
///
/// # Arguments
///
/// * `scale` - The distance between two nodes. Must be >= 1.
/// * `position` - The destination coordinate being interpolated.
/// * `left` - The channel value at the node before the position.
/// * `right` - The channel value at the node after the position.
///
/// # Returns
///
/// The interpolated channel value.
///
/// # Example
///
/// ```
/// use resamp_imgproc::interpolation::linear_interpolation;
///
/// assert_eq!(linear_interpolation(2, 1, 0, 255), 127);
/// assert_eq!(linear_interpolation(4, 8, 10, 20), 10);
/// ```
#[inline]
pub fn linear_interpolation(scale: usize, position: usize, left: u8, right: u8) -> u8 {
    let frac = position % scale;
    let value = ((scale - frac) * left as usize + frac * right as usize) / scale;

    // weights sum to `scale`, so the value stays within [min(left, right), max(left, right)]
    value as u8
}
