//! BMP encoder: uncompressed 24-bit, either row order.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::FrameError;
use crate::pixel::PixelBuffer;

const HEADER_LEN: usize = 54;

/// Encode `buf` as a 24-bit BMP. `top_down` writes a negative height and
/// stores row 0 first; otherwise rows are stored bottom-up.
pub(crate) fn encode_bmp24(
    buf: &PixelBuffer,
    top_down: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, FrameError> {
    let (width, height) = (buf.width(), buf.height());
    let w = width as usize;
    let h = height as usize;
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(FrameError::DimensionsTooLarge { width, height });
    }

    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or(FrameError::DimensionsTooLarge { width, height })?;
    let pixel_data_size = row_stride
        .checked_mul(h)
        .ok_or(FrameError::DimensionsTooLarge { width, height })?;
    let file_size = pixel_data_size
        .checked_add(HEADER_LEN)
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or(FrameError::DimensionsTooLarge { width, height })?;

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    let signed_height = if top_down {
        -(height as i32)
    } else {
        height as i32
    };
    write_bmp_header(&mut out, file_size, pixel_data_size, width, signed_height);

    let pad_bytes = row_stride - w * 3;
    for i in 0..h {
        if i % 16 == 0 {
            stop.check()?;
        }
        let row = if top_down { i } else { h - 1 - i };
        for px in buf.row(row as u32) {
            out.extend_from_slice(&[px.b, px.g, px.r]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    signed_height: i32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&signed_height.to_le_bytes()); // negative = top-down
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
