#![deny(missing_docs)]
//! Pixel grid types for integer-factor image resampling

/// image representation for resampling purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};

/// An 8-bit, three channel image. The channel order is opaque to the library.
pub type PixelGrid = Image<u8, 3>;
