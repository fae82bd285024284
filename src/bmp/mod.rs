//! 24-bit uncompressed BMP decoder and fixture encoder (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::probe_bmp`],
//! [`crate::encode_bmp`], etc.

mod decode;
mod encode;

pub use decode::BmpHeader;

use crate::error::FrameError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use alloc::vec::Vec;
use enough::Stop;

/// Parse headers only.
pub(crate) fn probe(data: &[u8]) -> Result<BmpHeader, FrameError> {
    decode::parse_header(data)
}

/// Decode BMP data into a canonical top-down RGB8 buffer.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, FrameError> {
    let header = decode::parse_header(data)?;
    stop.check()?;
    decode::decode_pixels(data, &header, limits, stop)
}

/// Encode to a 24-bit BMP in the requested row order.
pub(crate) fn encode(
    buf: &PixelBuffer,
    top_down: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, FrameError> {
    encode::encode_bmp24(buf, top_down, stop)
}
