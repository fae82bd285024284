//! Uncompressed 24-bit BMP decoder.
//!
//! Reads the 14-byte file header and the first 40 bytes of the info header,
//! then copies BGR rows into a top-down RGB8 [`PixelBuffer`], discarding the
//! 4-byte row padding and reversing bottom-up files.

use enough::Stop;
use rgb::RGB8;

use crate::error::FrameError;
use crate::limits::Limits;
use crate::pixel::{PixelBuffer, pixel_count, try_alloc};

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: u32 = 40;
const OS2_CORE_HEADER_LEN: u32 = 12;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], FrameError> {
        let end = self.pos.checked_add(N).ok_or(FrameError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(FrameError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, FrameError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, FrameError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, FrameError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Parsed BMP header ───────────────────────────────────────────────

/// Fixed-layout BMP file header plus the BITMAPINFOHEADER fields.
///
/// Width and height keep their on-disk signs; use [`BmpHeader::width`],
/// [`BmpHeader::height`] and [`BmpHeader::is_top_down`] for the decoded view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub data_offset: u32,
    pub info_size: u32,
    pub raw_width: i32,
    pub raw_height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BmpHeader {
    /// Image width in pixels (magnitude of the signed field).
    pub fn width(&self) -> u32 {
        self.raw_width.unsigned_abs()
    }

    /// Image height in pixels (magnitude of the signed field).
    pub fn height(&self) -> u32 {
        self.raw_height.unsigned_abs()
    }

    /// Negative height means rows are stored top row first.
    pub fn is_top_down(&self) -> bool {
        self.raw_height < 0
    }

    /// Bytes per stored row: `width * 3` rounded up to a multiple of 4.
    pub fn row_stride(&self) -> Result<usize, FrameError> {
        (self.width() as usize)
            .checked_mul(3)
            .and_then(|r| r.checked_add(3))
            .map(|r| r & !3)
            .ok_or(FrameError::DimensionsTooLarge {
                width: self.width(),
                height: self.height(),
            })
    }
}

/// Parse and validate the headers of a 24-bit uncompressed BMP.
pub(crate) fn parse_header(data: &[u8]) -> Result<BmpHeader, FrameError> {
    let mut bytes = Cursor::new(data);

    let signature: [u8; 2] = bytes.read_fixed_bytes()?;
    if &signature != b"BM" {
        return Err(FrameError::InvalidSignature { found: signature });
    }

    let file_size = bytes.get_u32_le()?;
    // Reserved (2 x u16)
    let _ = bytes.read_fixed_bytes::<4>()?;
    let data_offset = bytes.get_u32_le()?;

    let info_size = bytes.get_u32_le()?;
    if info_size == OS2_CORE_HEADER_LEN {
        return Err(FrameError::UnsupportedVariant(
            "OS/2 BMP core header".into(),
        ));
    }
    if info_size < INFO_HEADER_LEN {
        return Err(FrameError::InvalidHeader(alloc::format!(
            "unknown BMP info header size: {info_size}"
        )));
    }

    let header = BmpHeader {
        file_size,
        data_offset,
        info_size,
        raw_width: bytes.get_i32_le()?,
        raw_height: bytes.get_i32_le()?,
        planes: bytes.get_u16_le()?,
        bit_count: bytes.get_u16_le()?,
        compression: bytes.get_u32_le()?,
        image_size: bytes.get_u32_le()?,
        x_pixels_per_meter: bytes.get_i32_le()?,
        y_pixels_per_meter: bytes.get_i32_le()?,
        colors_used: bytes.get_u32_le()?,
        colors_important: bytes.get_u32_le()?,
    };

    if header.bit_count != 24 {
        return Err(FrameError::UnsupportedVariant(alloc::format!(
            "only 24-bit BMP is supported, got {}-bit",
            header.bit_count
        )));
    }
    if header.compression != 0 {
        return Err(FrameError::UnsupportedVariant(alloc::format!(
            "compressed BMP not supported (compression {})",
            header.compression
        )));
    }

    log::debug!(
        "BMP header: {}x{} {}, pixel data at {}",
        header.width(),
        header.height(),
        if header.is_top_down() {
            "top-down"
        } else {
            "bottom-up"
        },
        header.data_offset
    );

    Ok(header)
}

/// Decode the pixel array described by `header` into a top-down buffer.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &BmpHeader,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, FrameError> {
    let width = header.width();
    let height = header.height();
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }

    let w = width as usize;
    let h = height as usize;
    let stride = header.row_stride()?;
    let count = pixel_count(width, height)?;

    // The last row's padding may be missing; every row's pixels may not.
    let offset = header.data_offset as usize;
    let needed = stride
        .checked_mul(h.saturating_sub(1))
        .and_then(|n| n.checked_add(w * 3))
        .and_then(|n| n.checked_add(offset))
        .ok_or(FrameError::DimensionsTooLarge { width, height })?;
    if count > 0 && data.len() < needed {
        return Err(FrameError::UnexpectedEof);
    }

    let mut pixels = try_alloc(count)?;
    pixels.resize(count, RGB8::default());

    stop.check()?;

    for (row, dst) in pixels.chunks_exact_mut(w).enumerate() {
        if row % 16 == 0 {
            stop.check()?;
        }
        let src_row = if header.is_top_down() {
            row
        } else {
            h - 1 - row
        };
        let start = offset + src_row * stride;
        let src = &data[start..start + w * 3];
        for (px, bgr) in dst.iter_mut().zip(src.chunks_exact(3)) {
            *px = RGB8::new(bgr[2], bgr[1], bgr[0]);
        }
    }

    PixelBuffer::new(pixels, width, height)
}
