#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// node placement of source pixels on the upscaled grid.
pub mod grid;

/// interpolation kernels for upscaling.
pub mod interpolation;

/// chained transforms.
pub mod pipeline;

/// integer-factor upscaling engine.
pub mod resize;

/// lossless quarter turn rotations.
pub mod rotate;
