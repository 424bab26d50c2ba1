//! Packed-pixel expansion and wire-order translation.
//!
//! Source images store one byte per pixel in `RRRGGGBB` layout. Expansion
//! isolates each bit field and rescales it to 8 bits by a fixed power of
//! two, matching the bit depth the target hardware was calibrated against.

use smart_leds::RGB8;

pub type Rgb = RGB8;

const RED_MASK: u8 = 0b1110_0000;
const GREEN_MASK: u8 = 0b0001_1100;
const BLUE_MASK: u8 = 0b0000_0011;

// 8-bit range / field range. A 3-bit max of 7 lands on 224, not 255;
// the scale is intentionally a shift, not a normalization.
const RED_SCALE: u8 = 32;
const GREEN_SCALE: u8 = 32;
const BLUE_SCALE: u8 = 64;

/// Expand a packed `RRRGGGBB` pixel into full per-channel intensities.
///
/// Defined for all 256 input values.
pub const fn expand_rgb332(packed: u8) -> Rgb {
    Rgb {
        r: ((packed & RED_MASK) >> 5) * RED_SCALE,
        g: ((packed & GREEN_MASK) >> 2) * GREEN_SCALE,
        b: (packed & BLUE_MASK) * BLUE_SCALE,
    }
}

/// One color channel of an expanded pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Get this channel's byte from an expanded color.
    pub const fn byte(self, color: Rgb) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
        }
    }
}

/// Channel order the device protocol transmits in.
///
/// WS2812-family strips clock in green first, then red, then blue. Kept
/// as a translation table so a different device family is a one-line
/// change.
pub const WIRE_ORDER: [Channel; 3] = [Channel::Green, Channel::Red, Channel::Blue];

/// Channel bytes of a color in wire order.
pub const fn wire_bytes(color: Rgb) -> [u8; 3] {
    [
        WIRE_ORDER[0].byte(color),
        WIRE_ORDER[1].byte(color),
        WIRE_ORDER[2].byte(color),
    ]
}
