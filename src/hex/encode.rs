//! `$readmemh`-style writer: one `XXXX\n` line per pixel, row-major.

use alloc::string::String;

use enough::Stop;

use crate::error::FrameError;
use crate::pixel::PixelBuffer;
use crate::rgb565::Rgb565;

/// Bytes per emitted line: four hex digits and `\n`.
pub(crate) const LINE_LEN: usize = 5;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Four uppercase hex digits, most significant first, then `\n`.
fn hex_line(color: Rgb565) -> [u8; LINE_LEN] {
    let bits = color.to_bits();
    let digit = |shift: u16| HEX_DIGITS[usize::from((bits >> shift) & 0xF)];
    [digit(12), digit(8), digit(4), digit(0), b'\n']
}

pub(crate) fn encode_hex(buf: &PixelBuffer, stop: &dyn Stop) -> Result<String, FrameError> {
    let bytes = buf.len().checked_mul(LINE_LEN).ok_or(FrameError::DimensionsTooLarge {
        width: buf.width(),
        height: buf.height(),
    })?;
    let mut out = String::new();
    out.try_reserve_exact(bytes)
        .map_err(|_| FrameError::AllocationFailed { bytes })?;

    for y in 0..buf.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for &px in buf.row(y) {
            out.extend(hex_line(Rgb565::from(px)).map(char::from));
        }
    }
    Ok(out)
}

#[cfg(feature = "std")]
pub(crate) fn write_hex<W: std::io::Write>(
    buf: &PixelBuffer,
    mut writer: W,
    stop: &dyn Stop,
) -> Result<(), FrameError> {
    for y in 0..buf.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for &px in buf.row(y) {
            writer.write_all(&hex_line(Rgb565::from(px)))?;
        }
    }
    writer.flush()?;
    Ok(())
}
