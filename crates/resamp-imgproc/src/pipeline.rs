use std::fmt;
use std::str::FromStr;

use resamp_image::{Image, ImageError};

use crate::resize::{upscaled, ScaleMode};
use crate::rotate::{rotated, RotationDirection};

/// A single image transform.
///
/// The text form is `<mode>:<scale>` for upscaling (e.g. `linear:3`) and `cw` or
/// `ccw` for quarter turns.
///
/// # Example
///
/// ```
/// use resamp_imgproc::pipeline::Transform;
/// use resamp_imgproc::resize::ScaleMode;
///
/// let t: Transform = "cubic:4".parse().unwrap();
/// assert_eq!(t, Transform::Scale { mode: ScaleMode::Cubic, scale: 4 });
/// assert_eq!(t.to_string(), "cubic:4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Upscale by an integer factor.
    Scale {
        /// The upscaling mode.
        mode: ScaleMode,
        /// The integer upscaling factor.
        scale: usize,
    },
    /// Rotate a quarter turn.
    Rotate(RotationDirection),
}

impl Transform {
    /// Apply the transform, returning a new image.
    pub fn apply<const C: usize>(&self, src: &Image<u8, C>) -> Result<Image<u8, C>, ImageError> {
        match *self {
            Transform::Scale { mode, scale } => upscaled(src, scale, mode),
            Transform::Rotate(direction) => rotated(src, direction),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Scale { mode, scale } => write!(f, "{mode}:{scale}"),
            Transform::Rotate(direction) => write!(f, "{direction}"),
        }
    }
}

impl FromStr for Transform {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "cw" | "rotate-cw" => return Ok(Transform::Rotate(RotationDirection::Clockwise)),
            "ccw" | "rotate-ccw" => {
                return Ok(Transform::Rotate(RotationDirection::CounterClockwise))
            }
            _ => {}
        }

        let (mode, scale) = s.split_once(':').ok_or_else(|| {
            ImageError::InvalidTransform(format!(
                "expected '<mode>:<scale>', 'cw' or 'ccw', got '{s}'"
            ))
        })?;

        let mode = mode.parse::<ScaleMode>()?;
        let scale = scale
            .parse::<usize>()
            .map_err(|e| ImageError::InvalidTransform(format!("invalid scale '{scale}': {e}")))?;

        if scale == 0 {
            return Err(ImageError::InvalidScaleFactor(scale));
        }

        Ok(Transform::Scale { mode, scale })
    }
}

/// Apply a sequence of transforms, each output feeding the next transform.
///
/// An empty sequence returns a copy of the source.
///
/// # Example
///
/// ```
/// use resamp_image::{Image, ImageSize};
/// use resamp_imgproc::pipeline::{apply_all, Transform};
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 3, height: 2 }, 5).unwrap();
/// let transforms: Vec<Transform> = ["linear:2", "cw"]
///     .iter()
///     .map(|t| t.parse().unwrap())
///     .collect();
///
/// let out = apply_all(&image, &transforms).unwrap();
/// assert_eq!(out.size(), ImageSize { width: 4, height: 6 });
/// ```
pub fn apply_all<const C: usize>(
    src: &Image<u8, C>,
    transforms: &[Transform],
) -> Result<Image<u8, C>, ImageError> {
    transforms
        .iter()
        .enumerate()
        .try_fold(src.clone(), |image, (i, transform)| {
            log::debug!("step {}/{}: {}", i + 1, transforms.len(), transform);
            transform.apply(&image)
        })
}
