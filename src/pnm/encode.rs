//! P6 encoder: `P6\n{w} {h}\n255\n` followed by raw interleaved RGB bytes.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::FrameError;
use crate::pixel::PixelBuffer;

fn ppm_header(buf: &PixelBuffer) -> String {
    format!("P6\n{} {}\n255\n", buf.width(), buf.height())
}

pub(crate) fn encode_ppm(buf: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, FrameError> {
    let header = ppm_header(buf);
    let w = buf.width() as usize;
    let bytes = buf.as_bytes();
    let total = header.len() + bytes.len();

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| FrameError::AllocationFailed { bytes: total })?;
    out.extend_from_slice(header.as_bytes());

    for (row_idx, row) in bytes.chunks(w.max(1) * 3).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    Ok(out)
}

#[cfg(feature = "std")]
pub(crate) fn write_ppm<W: std::io::Write>(
    buf: &PixelBuffer,
    mut writer: W,
    stop: &dyn Stop,
) -> Result<(), FrameError> {
    writer.write_all(ppm_header(buf).as_bytes())?;
    let w = buf.width() as usize;
    for (row_idx, row) in buf.as_bytes().chunks(w.max(1) * 3).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        writer.write_all(row)?;
    }
    writer.flush()?;
    Ok(())
}
