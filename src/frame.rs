//! The fixed 320x240 framebuffer and the two conversion pipelines.
//!
//! Encode: BMP bytes -> [`PixelBuffer`] -> bilinear resize -> RGB565 hex lines.
//! Verify: hex lines -> exactly [`TOTAL_PIXELS`] colors -> RGB8 -> PPM.

use alloc::string::String;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::FrameError;
use crate::hex::{self, DecodeStats, HexFrame};
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::{bmp, pnm, resample};

/// Framebuffer width in pixels.
pub const FRAME_WIDTH: u32 = 320;
/// Framebuffer height in pixels.
pub const FRAME_HEIGHT: u32 = 240;
/// Pixels (and hex lines) per frame.
pub const TOTAL_PIXELS: usize = FRAME_WIDTH as usize * FRAME_HEIGHT as usize;

/// Decode a 24-bit BMP and resize it to the framebuffer resolution.
pub fn bmp_to_frame(
    data: &[u8],
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<PixelBuffer, FrameError> {
    let src = bmp::decode(data, limits, &stop)?;
    resample::resize_bilinear(src, FRAME_WIDTH, FRAME_HEIGHT, &stop)
}

/// Full encode pipeline: BMP bytes to [`TOTAL_PIXELS`] hex lines.
pub fn bmp_to_hex(data: &[u8], stop: impl Stop) -> Result<String, FrameError> {
    let src = bmp::decode(data, None, &stop)?;
    let frame = resample::resize_bilinear(src, FRAME_WIDTH, FRAME_HEIGHT, &stop)?;
    hex::encode(&frame, &stop)
}

/// Decode a hex stream into a framebuffer image. Never fails on content.
pub fn hex_to_frame(data: &[u8]) -> Result<(PixelBuffer, DecodeStats), FrameError> {
    let decoded: HexFrame = hex::decode(data, TOTAL_PIXELS)?;
    let buf = decoded.to_pixel_buffer(FRAME_WIDTH, FRAME_HEIGHT)?;
    Ok((buf, *decoded.stats()))
}

/// Full verify pipeline: hex stream to a P6 image of the framebuffer.
pub fn hex_to_ppm(data: &[u8], stop: impl Stop) -> Result<(Vec<u8>, DecodeStats), FrameError> {
    let (buf, stats) = hex_to_frame(data)?;
    let ppm = pnm::encode(&buf, &stop)?;
    Ok((ppm, stats))
}
