//! Matrix geometry, validated once at startup.

/// Output bytes emitted per 8-bit channel.
///
/// The one-wire duty-cycle encoding spends two half-bit slots per logical
/// bit, packed as nibbles: 8 bits become 4 bytes.
pub const BYTES_PER_CHANNEL: usize = 4;

/// Output bytes emitted per LED (3 channels).
pub const BYTES_PER_LED: usize = 3 * BYTES_PER_CHANNEL;

/// Geometry binding the source image to the attached strips.
///
/// Constructed once via [`Layout::new`]; everything downstream indexes
/// within these bounds by construction, so no further range checks are
/// needed past validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    leds_per_strip: usize,
    patterns: usize,
}

/// Error returned for a geometry that cannot drive the quadrant mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Rows or columns are zero.
    EmptyImage,
    /// Quadrant arithmetic needs an even number of rows and columns.
    OddDimension,
    /// A strip must hold between 1 and `rows / 2` LEDs.
    StripLength,
    /// Pattern count must be between 1 and `cols`.
    PatternCount,
}

impl Layout {
    pub const fn new(
        rows: usize,
        cols: usize,
        leds_per_strip: usize,
        patterns: usize,
    ) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyImage);
        }
        if !rows.is_multiple_of(2) || !cols.is_multiple_of(2) {
            return Err(LayoutError::OddDimension);
        }
        if leds_per_strip == 0 || leds_per_strip > rows / 2 {
            return Err(LayoutError::StripLength);
        }
        if patterns == 0 || patterns > cols {
            return Err(LayoutError::PatternCount);
        }
        Ok(Self {
            rows,
            cols,
            leds_per_strip,
            patterns,
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn leds_per_strip(&self) -> usize {
        self.leds_per_strip
    }

    pub const fn patterns(&self) -> usize {
        self.patterns
    }

    /// Number of pixels in the source image.
    pub const fn pixel_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Length of one encoded pattern's bitstream.
    pub const fn bitstream_len(&self) -> usize {
        self.leds_per_strip * BYTES_PER_LED
    }
}
