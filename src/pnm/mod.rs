//! Binary PPM (P6) output for visual inspection of decoded frames.

mod encode;

use crate::error::FrameError;
use crate::pixel::PixelBuffer;
use alloc::vec::Vec;
use enough::Stop;

/// Encode to P6 with maxval 255 (called from lib.rs).
pub(crate) fn encode(buf: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, FrameError> {
    encode::encode_ppm(buf, stop)
}

#[cfg(feature = "std")]
pub(crate) fn write<W: std::io::Write>(
    buf: &PixelBuffer,
    writer: W,
    stop: &dyn Stop,
) -> Result<(), FrameError> {
    encode::write_ppm(buf, writer, stop)
}
