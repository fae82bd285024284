//! Bilinear resampling with edge clamping.
//!
//! Destination pixel `(dx, dy)` samples the source at
//! `(dx * src_w / dst_w, dy * src_h / dst_h)`. There is no half-pixel offset,
//! so destination corner `(0, 0)` always maps exactly onto source `(0, 0)`.
//! Arithmetic is `f32` and each channel is truncated (not rounded) to `u8`.

use enough::Stop;
use rgb::RGB8;

use crate::error::FrameError;
use crate::pixel::{PixelBuffer, pixel_count, try_alloc};

/// Resize `src` to `dst_width` x `dst_height`.
///
/// Takes ownership of the source: when the dimensions already match it is
/// returned unchanged, otherwise it is dropped once the new buffer is built.
pub fn resize_bilinear(
    src: PixelBuffer,
    dst_width: u32,
    dst_height: u32,
    stop: &dyn Stop,
) -> Result<PixelBuffer, FrameError> {
    if src.has_dimensions(dst_width, dst_height) {
        log::debug!("source already {dst_width}x{dst_height}, skipping resize");
        return Ok(src);
    }
    log::debug!(
        "bilinear resize {}x{} -> {dst_width}x{dst_height}",
        src.width(),
        src.height()
    );

    let src_w = src.width() as usize;
    let src_h = src.height() as usize;
    let dst_w = dst_width as usize;
    let dst_h = dst_height as usize;

    let count = pixel_count(dst_width, dst_height)?;
    if src.is_empty() {
        // Nothing to sample from.
        return Err(FrameError::AllocationFailed { bytes: 0 });
    }
    let mut dst = try_alloc(count)?;

    let x_scale = src_w as f32 / dst_w as f32;
    let y_scale = src_h as f32 / dst_h as f32;
    let pixels = src.pixels();

    for dst_y in 0..dst_h {
        if dst_y % 16 == 0 {
            stop.check()?;
        }
        let src_yf = dst_y as f32 * y_scale;
        // Non-negative, so truncation is floor.
        let y0 = (src_yf as usize).min(src_h - 1);
        let y1 = (y0 + 1).min(src_h - 1);
        let fy = src_yf - y0 as f32;

        for dst_x in 0..dst_w {
            let src_xf = dst_x as f32 * x_scale;
            let x0 = (src_xf as usize).min(src_w - 1);
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = src_xf - x0 as f32;

            let p00 = pixels[y0 * src_w + x0];
            let p10 = pixels[y0 * src_w + x1];
            let p01 = pixels[y1 * src_w + x0];
            let p11 = pixels[y1 * src_w + x1];

            dst.push(RGB8 {
                r: blend(p00.r, p10.r, p01.r, p11.r, fx, fy),
                g: blend(p00.g, p10.g, p01.g, p11.g, fx, fy),
                b: blend(p00.b, p10.b, p01.b, p11.b, fx, fy),
            });
        }
    }

    PixelBuffer::new(dst, dst_width, dst_height)
}

/// Weighted sum of the four neighbours, truncated toward zero.
#[inline]
fn blend(p00: u8, p10: u8, p01: u8, p11: u8, fx: f32, fy: f32) -> u8 {
    let v = f32::from(p00) * (1.0 - fx) * (1.0 - fy)
        + f32::from(p10) * fx * (1.0 - fy)
        + f32::from(p01) * (1.0 - fx) * fy
        + f32::from(p11) * fx * fy;
    v as u8
}
