//! Borrowed view over a packed source image.

use crate::color::{Rgb, expand_rgb332};
use crate::layout::Layout;
use crate::quadrant::Quadrant;

/// Error returned when an image buffer does not match its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSizeError {
    pub expected: usize,
    pub actual: usize,
}

/// Row-major grid of packed `RRRGGGBB` pixels, one byte per pixel.
///
/// Borrows the caller's buffer for the duration of an encode pass; the
/// buffer length is checked against the layout once, at construction.
#[derive(Debug, Clone, Copy)]
pub struct PackedImage<'a> {
    data: &'a [u8],
    layout: Layout,
}

impl<'a> PackedImage<'a> {
    pub fn new(data: &'a [u8], layout: Layout) -> Result<Self, ImageSizeError> {
        if data.len() != layout.pixel_count() {
            return Err(ImageSizeError {
                expected: layout.pixel_count(),
                actual: data.len(),
            });
        }
        Ok(Self { data, layout })
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Packed pixel at an image coordinate.
    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.layout.cols() + col]
    }

    /// Expanded color a strip's LED shows for one pattern index.
    ///
    /// Out-of-range `pattern` or `led` reads as black rather than
    /// failing; the mapper defines those as "no pixel".
    pub fn color_for_led(&self, pattern: usize, led: usize, quadrant: Quadrant) -> Rgb {
        quadrant
            .resolve(&self.layout, pattern, led)
            .map(|(row, col)| expand_rgb332(self.pixel(row, col)))
            .unwrap_or_default()
    }
}
