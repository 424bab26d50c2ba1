//! Multiplexed bitstream encoding, the core of the crate.
//!
//! One encode pass serializes the colors every strip shows for a single
//! pattern index into one shared byte buffer. Each logical color bit
//! occupies two half-bit slots (the one-wire duty-cycle encoding), packed
//! as nibbles: the even sub-bit of a pair lands in the upper nibble of an
//! output byte, the odd sub-bit in the lower nibble, and the byte index
//! advances once per pair. Within a nibble, each strip owns one bit lane,
//! so a byte carries up to [`MAX_STRIPS`] strips' worth of signal.

use crate::color::{Rgb, WIRE_ORDER};
use crate::image::PackedImage;
use crate::layout::{BYTES_PER_CHANNEL, BYTES_PER_LED, Layout};
use crate::quadrant::{MAX_STRIPS, StripAssignment};

/// Nibble-lane placement for the multiplexed encoding.
///
/// Strip `k`'s bit sits `base + k` positions below the MSB; `even_base`
/// applies to the even sub-bit of each pair, `odd_base` to the odd one.
/// The default puts even sub-bits in the upper nibble and odd sub-bits in
/// the lower nibble, lane order matching strip order. Kept configurable
/// so a board with a different GPIO-to-lane wiring only swaps this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneLayout {
    pub even_base: u8,
    pub odd_base: u8,
}

impl Default for LaneLayout {
    fn default() -> Self {
        Self {
            even_base: 0,
            odd_base: 4,
        }
    }
}

impl LaneLayout {
    const fn shift(self, strip: usize, odd_sub_bit: bool) -> u32 {
        let base = if odd_sub_bit {
            self.odd_base
        } else {
            self.even_base
        };
        base as u32 + strip as u32
    }
}

/// Error returned when a lane layout cannot fit the configured strips
/// inside one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneOverflowError;

/// Error returned by [`BitstreamEncoder::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The image was validated against a different layout.
    LayoutMismatch,
    /// The destination buffer is not exactly one bitstream long.
    BufferLen { expected: usize, actual: usize },
}

/// Serializes one pattern index across all strips into a shared buffer.
pub struct BitstreamEncoder {
    layout: Layout,
    strips: StripAssignment,
    lanes: LaneLayout,
}

impl BitstreamEncoder {
    pub fn new(layout: Layout, strips: StripAssignment) -> Result<Self, LaneOverflowError> {
        Self::with_lanes(layout, strips, LaneLayout::default())
    }

    pub fn with_lanes(
        layout: Layout,
        strips: StripAssignment,
        lanes: LaneLayout,
    ) -> Result<Self, LaneOverflowError> {
        let lanes_needed = strips.len();
        if lanes.even_base as usize + lanes_needed > 8 || lanes.odd_base as usize + lanes_needed > 8
        {
            return Err(LaneOverflowError);
        }
        Ok(Self {
            layout,
            strips,
            lanes,
        })
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub const fn strips(&self) -> &StripAssignment {
        &self.strips
    }

    /// Required destination buffer length.
    pub const fn bitstream_len(&self) -> usize {
        self.layout.bitstream_len()
    }

    /// Encode one pattern index into `dst`.
    ///
    /// `dst` is zeroed first, so a reused scratch buffer never carries
    /// stale bits between patterns. A `pattern` beyond the configured
    /// range is not an error: every coordinate resolves to "no pixel"
    /// and the result is an all-zero bitstream.
    pub fn encode(
        &self,
        image: &PackedImage<'_>,
        pattern: usize,
        dst: &mut [u8],
    ) -> Result<(), EncodeError> {
        if image.layout() != &self.layout {
            return Err(EncodeError::LayoutMismatch);
        }
        let expected = self.bitstream_len();
        if dst.len() != expected {
            return Err(EncodeError::BufferLen {
                expected,
                actual: dst.len(),
            });
        }

        dst.fill(0);

        for led in 0..self.layout.leds_per_strip() {
            let mut colors = [Rgb::default(); MAX_STRIPS];
            for (strip, quadrant) in self.strips.iter().enumerate() {
                colors[strip] = image.color_for_led(pattern, led, quadrant);
            }

            for (slot, channel) in WIRE_ORDER.iter().enumerate() {
                let base = led * BYTES_PER_LED + slot * BYTES_PER_CHANNEL;

                // MSB first; two sub-bits share each output byte.
                for bit in 0..8 {
                    let index = base + bit / 2;
                    let odd_sub_bit = bit % 2 == 1;

                    for strip in 0..self.strips.len() {
                        let masked = (channel.byte(colors[strip]) << bit) & 0x80;
                        // OR-combined so every strip's lane lands in the
                        // shared byte without clobbering the others.
                        dst[index] |= masked >> self.lanes.shift(strip, odd_sub_bit);
                    }
                }
            }
        }

        Ok(())
    }
}
