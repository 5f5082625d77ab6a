#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../README.md"))]

#[doc(inline)]
pub use resamp_image as image;

#[doc(inline)]
pub use resamp_imgproc as imgproc;

#[doc(inline)]
pub use resamp_io as io;
