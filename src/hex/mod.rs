//! RGB565 hex streams: one `XXXX` line per pixel, as loaded by Verilog
//! `$readmemh` into a framebuffer model.

mod decode;
mod encode;

pub use decode::{DecodeStats, HexDecoder, HexFrame, HexLine, MAX_LINE_LEN};

use crate::error::FrameError;
use crate::pixel::PixelBuffer;
use alloc::string::String;
use enough::Stop;

/// Encode every pixel as an uppercase 4-digit line (called from lib.rs).
pub(crate) fn encode(buf: &PixelBuffer, stop: &dyn Stop) -> Result<String, FrameError> {
    encode::encode_hex(buf, stop)
}

/// Stream the hex lines for `buf` to `writer`.
#[cfg(feature = "std")]
pub(crate) fn write<W: std::io::Write>(
    buf: &PixelBuffer,
    writer: W,
    stop: &dyn Stop,
) -> Result<(), FrameError> {
    encode::write_hex(buf, writer, stop)
}

/// Decode a whole in-memory stream into exactly `total` colors.
pub(crate) fn decode(data: &[u8], total: usize) -> Result<HexFrame, FrameError> {
    let mut decoder = HexDecoder::new(total);
    decoder.push_bytes(data);
    decoder.finish()
}

/// Decode line by line from a reader, stopping once `total` colors are read.
#[cfg(feature = "std")]
pub(crate) fn read<R: std::io::BufRead>(reader: R, total: usize) -> Result<HexFrame, FrameError> {
    decode::read_hex(reader, total)
}
