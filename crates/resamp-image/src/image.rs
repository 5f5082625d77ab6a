use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use resamp_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the size covers no pixel at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The size of a grid upscaled by an integer factor along both axes.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidScaleFactor`] if the scaled width, height or
    /// area does not fit in a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resamp_image::ImageSize;
    ///
    /// let size = ImageSize { width: 2, height: 3 }.scaled(4).unwrap();
    /// assert_eq!(size, ImageSize { width: 8, height: 12 });
    /// ```
    pub fn scaled(&self, scale: usize) -> Result<Self, ImageError> {
        let width = self.width.checked_mul(scale);
        let height = self.height.checked_mul(scale);
        match (width, height) {
            (Some(width), Some(height)) if width.checked_mul(height).is_some() => {
                Ok(ImageSize { width, height })
            }
            _ => Err(ImageError::InvalidScaleFactor(scale)),
        }
    }

    // number of samples for `channels` interleaved channels, bounded by what a Vec can hold
    fn checked_len(&self, channels: usize) -> Result<usize, ImageError> {
        self.width
            .checked_mul(self.height)
            .and_then(|area| area.checked_mul(channels))
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(ImageError::ImageTooLarge(self.width, self.height))
    }

    /// The size with width and height swapped, as produced by a 90 degree rotation.
    pub fn transposed(&self) -> Self {
        ImageSize {
            width: self.height,
            height: self.width,
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major in a single owned buffer, with the `CHANNELS`
/// samples of each pixel interleaved: the sample `ch` of pixel `(x, y)` lives at
/// `(y * width + x) * CHANNELS + ch`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use resamp_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        let expected = size.checked_len(CHANNELS)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Returns
    ///
    /// A new image with the given size and default pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use resamp_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   },
    ///   0u8,
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.checked_len(CHANNELS)?];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // offset of the first channel of pixel (x, y) in the flat buffer
    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.size.width + x) * CHANNELS
    }

    /// Get the channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[T] {
        let base = self.offset(x, y);
        &self.data[base..base + CHANNELS]
    }

    /// Get the channels of the pixel at `(x, y)` mutably.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [T] {
        let base = self.offset(x, y);
        &mut self.data[base..base + CHANNELS]
    }

    fn check_index(&self, x: usize, y: usize, ch: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }

        Ok(self.offset(x, y) + ch)
    }

    /// Get a single channel value of a pixel.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `ch` - The channel index of the pixel.
    ///
    /// # Returns
    ///
    /// The pixel value at the given coordinates.
    ///
    /// # Errors
    ///
    /// If the pixel or channel index is out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<T, ImageError>
    where
        T: Copy,
    {
        let idx = self.check_index(x, y, ch)?;
        Ok(self.data[idx])
    }

    /// Set a single channel value of a pixel.
    ///
    /// # Errors
    ///
    /// If the pixel or channel index is out of bounds, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, ch: usize, val: T) -> Result<(), ImageError> {
        let idx = self.check_index(x, y, ch)?;
        self.data[idx] = val;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), 200);
        assert!(!image_size.is_empty());
        assert!(ImageSize::from([0, 4]).is_empty());
    }

    #[test]
    fn image_size_scaled_transposed() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 5,
        };
        assert_eq!(size.scaled(1)?, size);
        assert_eq!(
            size.scaled(3)?,
            ImageSize {
                width: 9,
                height: 15
            }
        );
        assert_eq!(
            size.transposed(),
            ImageSize {
                width: 5,
                height: 3
            }
        );
        Ok(())
    }

    #[test]
    fn image_size_scaled_overflow() {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let scale = usize::MAX / 2 + 1;
        assert_eq!(size.scaled(scale), Err(ImageError::InvalidScaleFactor(scale)));

        // both sides fit, the area does not
        let scale = 1 << (usize::BITS / 2);
        assert_eq!(size.scaled(scale), Err(ImageError::InvalidScaleFactor(scale)));
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_wrong_data_length() {
        let res = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 11],
        );
        assert_eq!(res, Err(ImageError::InvalidChannelShape(11, 12)));
    }

    #[test]
    fn image_pixel_access() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            (0u8..12).collect(),
        )?;

        // row-major, interleaved channels
        assert_eq!(image.pixel(1, 0), &[3, 4, 5]);
        assert_eq!(image.pixel(0, 1), &[6, 7, 8]);
        assert_eq!(image.get_pixel(1, 1, 2)?, 11);

        image.pixel_mut(0, 0).copy_from_slice(&[9, 9, 9]);
        image.set_pixel(1, 1, 0, 42)?;
        assert_eq!(image.pixel(0, 0), &[9, 9, 9]);
        assert_eq!(image.get_pixel(1, 1, 0)?, 42);

        Ok(())
    }

    #[test]
    fn image_pixel_out_of_bounds() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([2, 3].into(), 0)?;
        assert_eq!(
            image.get_pixel(2, 0, 0),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 3))
        );
        assert_eq!(
            image.get_pixel(0, 3, 0),
            Err(ImageError::PixelIndexOutOfBounds(0, 3, 2, 3))
        );
        assert_eq!(
            image.get_pixel(0, 0, 3),
            Err(ImageError::ChannelIndexOutOfBounds(3, 3))
        );
        Ok(())
    }

    #[test]
    fn image_too_large() {
        let size = ImageSize {
            width: usize::MAX,
            height: 2,
        };
        assert_eq!(
            Image::<u8, 3>::from_size_val(size, 0),
            Err(ImageError::ImageTooLarge(usize::MAX, 2))
        );
        assert_eq!(
            Image::<u8, 3>::new(size, vec![]),
            Err(ImageError::ImageTooLarge(usize::MAX, 2))
        );
    }

    #[test]
    fn image_from_size_val() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val([4, 2].into(), 7)?;
        assert_eq!(image.as_slice(), &[7u8; 8]);
        assert_eq!(image.into_vec().len(), 8);
        Ok(())
    }
}
