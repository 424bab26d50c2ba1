//! Drives the encoder across every pattern index.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PatternSink;
use crate::encoder::{BitstreamEncoder, EncodeError};
use crate::image::PackedImage;

/// Error returned by [`PatternSequencer::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError<E> {
    /// A pattern failed to encode; nothing was persisted for it.
    Encode(EncodeError),
    /// The sink rejected a finished bitstream.
    Persist { pattern: usize, source: E },
}

/// Encodes every pattern index in order and hands each finished
/// bitstream to the persistence sink.
///
/// The sequence is best-effort, not transactional: the first failure
/// aborts the remaining patterns, but bitstreams already persisted stay
/// persisted.
pub struct PatternSequencer<S: PatternSink> {
    encoder: BitstreamEncoder,
    sink: S,
}

impl<S: PatternSink> PatternSequencer<S> {
    pub const fn new(encoder: BitstreamEncoder, sink: S) -> Self {
        Self { encoder, sink }
    }

    pub const fn encoder(&self) -> &BitstreamEncoder {
        &self.encoder
    }

    /// Recover the sink, e.g. to inspect what was persisted.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Encode and persist every pattern of `image`.
    ///
    /// `scratch` is the reused bitstream buffer; it must be exactly
    /// [`BitstreamEncoder::bitstream_len`] bytes and is re-zeroed by the
    /// encoder on every pattern.
    pub fn run(
        &mut self,
        image: &PackedImage<'_>,
        scratch: &mut [u8],
    ) -> Result<(), SequenceError<S::Error>> {
        for pattern in 0..self.encoder.layout().patterns() {
            self.encoder
                .encode(image, pattern, scratch)
                .map_err(SequenceError::Encode)?;

            if let Err(source) = self.sink.persist(pattern, scratch) {
                #[cfg(feature = "esp32-log")]
                println!("pattern {} failed to persist, aborting sequence", pattern);
                return Err(SequenceError::Persist { pattern, source });
            }
        }

        Ok(())
    }
}
