//! Quadrant coordinate mapping and strip assignment.
//!
//! Each physical strip renders one quadrant of the source image. LED 0 of
//! every strip sits nearest the image's horizontal centerline: top strips
//! count upward from it, bottom strips downward.

use heapless::Vec;

use crate::layout::Layout;

/// Lanes reserved per nibble by the multiplexed encoding.
pub const MAX_STRIPS: usize = 4;

/// One of the four fixed regions of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Quadrant {
    /// Map a `(pattern, led)` pair to an image coordinate.
    ///
    /// Returns `None` when either index is out of configured bounds; the
    /// caller treats that as "no pixel", not an error. Resolved
    /// coordinates always lie within the image by construction of the
    /// validated [`Layout`].
    pub fn resolve(self, layout: &Layout, pattern: usize, led: usize) -> Option<(usize, usize)> {
        if led >= layout.leds_per_strip() || pattern >= layout.patterns() {
            return None;
        }

        let col = match self {
            Self::TopLeft | Self::BottomLeft => pattern,
            // The right half reuses the same pattern-index range as the
            // left half, wrapping at the pattern count.
            Self::TopRight | Self::BottomRight => {
                (layout.cols() / 2 + pattern) % layout.patterns()
            }
        };
        let row = match self {
            Self::TopLeft | Self::TopRight => (layout.rows() / 2 - 1) - led,
            Self::BottomLeft | Self::BottomRight => layout.rows() / 2 + led,
        };

        Some((row, col))
    }
}

/// Error returned for an unusable strip assignment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentError {
    /// At least one strip is required.
    Empty,
    /// The encoding multiplexes at most [`MAX_STRIPS`] lanes per nibble.
    TooManyStrips,
}

/// Ordered strip-to-quadrant assignment, fixed for the program lifetime.
///
/// Index position is the physical output lane; the value is the quadrant
/// that lane renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripAssignment {
    quadrants: Vec<Quadrant, MAX_STRIPS>,
}

impl StripAssignment {
    pub fn new(quadrants: &[Quadrant]) -> Result<Self, AssignmentError> {
        if quadrants.is_empty() {
            return Err(AssignmentError::Empty);
        }
        let quadrants = Vec::from_slice(quadrants).map_err(|()| AssignmentError::TooManyStrips)?;
        Ok(Self { quadrants })
    }

    /// Assignment covering all four quadrants in lane order
    /// top-left, bottom-left, top-right, bottom-right.
    pub fn all_quadrants() -> Self {
        Self {
            quadrants: Vec::from_slice(&[
                Quadrant::TopLeft,
                Quadrant::BottomLeft,
                Quadrant::TopRight,
                Quadrant::BottomRight,
            ])
            .unwrap_or_default(),
        }
    }

    /// Number of physical strips.
    pub fn len(&self) -> usize {
        self.quadrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quadrants.is_empty()
    }

    /// Quadrant bound to a physical strip index.
    pub fn quadrant(&self, strip: usize) -> Option<Quadrant> {
        self.quadrants.get(strip).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Quadrant> + '_ {
        self.quadrants.iter().copied()
    }
}
