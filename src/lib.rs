#![no_std]

pub mod color;
pub mod encoder;
pub mod image;
pub mod layout;
pub mod quadrant;
pub mod sequencer;

pub use color::{Channel, Rgb, WIRE_ORDER, expand_rgb332, wire_bytes};
pub use encoder::{BitstreamEncoder, EncodeError, LaneLayout, LaneOverflowError};
pub use image::{ImageSizeError, PackedImage};
pub use layout::{BYTES_PER_CHANNEL, BYTES_PER_LED, Layout, LayoutError};
pub use quadrant::{AssignmentError, MAX_STRIPS, Quadrant, StripAssignment};
pub use sequencer::{PatternSequencer, SequenceError};

/// Abstract persistence backend for encoded patterns
///
/// Implement this trait to hand finished bitstreams to non-volatile
/// storage or a transmission driver. The sequencer is generic over this
/// trait and invokes it once per pattern index, synchronously.
pub trait PatternSink {
    type Error;

    /// Persist the finished bitstream for one pattern index
    fn persist(&mut self, pattern: usize, bitstream: &[u8]) -> Result<(), Self::Error>;
}
