//! # zenrgb565
//!
//! Prepares images for a 320x240 RGB565 framebuffer and verifies the result.
//!
//! ## Encode
//!
//! An uncompressed 24-bit BMP of any size is decoded into a top-down RGB8
//! [`PixelBuffer`], bilinearly resized to [`FRAME_WIDTH`] x [`FRAME_HEIGHT`],
//! packed to [`Rgb565`], and written as one uppercase 4-digit hex line per
//! pixel, row-major: the format Verilog `$readmemh` loads.
//!
//! ## Verify
//!
//! A hex stream (possibly hand-edited, dumped from a simulator with `xxxx`
//! placeholders, or truncated) is decoded by the resilient [`HexDecoder`]
//! into exactly [`TOTAL_PIXELS`] colors and written as a binary PPM (P6).
//! Comment, blank, placeholder and malformed lines are skipped; a short
//! stream is padded with its last valid value. [`DecodeStats`] reports how
//! much of that happened.
//!
//! ## Non-Goals
//!
//! - Compressed, palettized, or non-24-bit BMP input
//! - Output resolutions other than 320x240
//! - Color spaces beyond 8-bit RGB and RGB565
//!
//! ## Usage
//!
//! ```
//! use zenrgb565::{PixelBuffer, Unstoppable, RGB8};
//!
//! // A 2x2 image, stored as a bottom-up BMP
//! let img = PixelBuffer::new(
//!     vec![RGB8::new(255, 0, 0), RGB8::new(0, 255, 0),
//!          RGB8::new(0, 0, 255), RGB8::new(255, 255, 255)],
//!     2, 2,
//! )?;
//! let bmp = zenrgb565::encode_bmp(&img, Unstoppable)?;
//!
//! let hex = zenrgb565::bmp_to_hex(&bmp, Unstoppable)?;
//! assert_eq!(hex.lines().count(), zenrgb565::TOTAL_PIXELS);
//! assert_eq!(hex.lines().next(), Some("F800"));
//!
//! let (ppm, stats) = zenrgb565::hex_to_ppm(hex.as_bytes(), Unstoppable)?;
//! assert!(ppm.starts_with(b"P6\n320 240\n255\n"));
//! assert!(stats.is_clean());
//! # Ok::<(), zenrgb565::FrameError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod error;
mod frame;
mod hex;
mod limits;
mod pixel;
mod pnm;
mod resample;
mod rgb565;

// Re-exports
pub use bmp::BmpHeader;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::FrameError;
pub use frame::{
    FRAME_HEIGHT, FRAME_WIDTH, TOTAL_PIXELS, bmp_to_frame, bmp_to_hex, hex_to_frame, hex_to_ppm,
};
pub use hex::{DecodeStats, HexDecoder, HexFrame, HexLine, MAX_LINE_LEN};
pub use limits::Limits;
pub use pixel::PixelBuffer;
pub use resample::resize_bilinear;
pub use rgb::RGB8;
pub use rgb565::Rgb565;

use alloc::string::String;
use alloc::vec::Vec;

// ── BMP ─────────────────────────────────────────────────────────────

/// Parse the headers of a 24-bit uncompressed BMP without decoding pixels.
pub fn probe_bmp(data: &[u8]) -> Result<BmpHeader, FrameError> {
    bmp::probe(data)
}

/// Decode a 24-bit uncompressed BMP into a top-down RGB8 buffer.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<PixelBuffer, FrameError> {
    bmp::decode(data, None, &stop)
}

/// Decode a BMP, rejecting images that exceed `limits` before allocating.
pub fn decode_bmp_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<PixelBuffer, FrameError> {
    bmp::decode(data, Some(limits), &stop)
}

/// Encode as a bottom-up 24-bit BMP (the usual on-disk order).
pub fn encode_bmp(buf: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, FrameError> {
    bmp::encode(buf, false, &stop)
}

/// Encode as a top-down 24-bit BMP (negative height field).
pub fn encode_bmp_top_down(buf: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, FrameError> {
    bmp::encode(buf, true, &stop)
}

// ── Resampling ──────────────────────────────────────────────────────

/// Resize to [`FRAME_WIDTH`] x [`FRAME_HEIGHT`]; a frame-sized input is
/// returned as is.
pub fn resize_to_frame(buf: PixelBuffer, stop: impl Stop) -> Result<PixelBuffer, FrameError> {
    resample::resize_bilinear(buf, FRAME_WIDTH, FRAME_HEIGHT, &stop)
}

// ── Hex streams ─────────────────────────────────────────────────────

/// Encode every pixel as an RGB565 hex line (`XXXX\n`), row-major.
pub fn encode_hex(buf: &PixelBuffer, stop: impl Stop) -> Result<String, FrameError> {
    hex::encode(buf, &stop)
}

/// Write RGB565 hex lines for `buf` to `writer`.
#[cfg(feature = "std")]
pub fn write_hex<W: std::io::Write>(
    buf: &PixelBuffer,
    writer: W,
    stop: impl Stop,
) -> Result<(), FrameError> {
    hex::write(buf, writer, &stop)
}

/// Decode a hex stream into exactly [`TOTAL_PIXELS`] colors.
///
/// Noisy or short input is absorbed; only allocation can fail.
pub fn decode_hex(data: &[u8]) -> Result<HexFrame, FrameError> {
    hex::decode(data, TOTAL_PIXELS)
}

/// Decode a hex stream into exactly `total` colors.
pub fn decode_hex_with_count(data: &[u8], total: usize) -> Result<HexFrame, FrameError> {
    hex::decode(data, total)
}

/// Read a hex stream into exactly [`TOTAL_PIXELS`] colors.
///
/// Only I/O and allocation failures are errors; noisy or short input is
/// absorbed.
#[cfg(feature = "std")]
pub fn read_hex<R: std::io::BufRead>(reader: R) -> Result<HexFrame, FrameError> {
    hex::read(reader, TOTAL_PIXELS)
}

/// Read a hex stream into exactly `total` colors.
#[cfg(feature = "std")]
pub fn read_hex_with_count<R: std::io::BufRead>(
    reader: R,
    total: usize,
) -> Result<HexFrame, FrameError> {
    hex::read(reader, total)
}

// ── PPM ─────────────────────────────────────────────────────────────

/// Encode as binary PPM (P6, maxval 255).
pub fn encode_ppm(buf: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, FrameError> {
    pnm::encode(buf, &stop)
}

/// Write a binary PPM (P6, maxval 255) to `writer`.
#[cfg(feature = "std")]
pub fn write_ppm<W: std::io::Write>(
    buf: &PixelBuffer,
    writer: W,
    stop: impl Stop,
) -> Result<(), FrameError> {
    pnm::write(buf, writer, &stop)
}
