use alloc::vec::Vec;

use rgb::{ComponentBytes as _, RGB8};

use crate::error::FrameError;

/// Owned, row-major RGB8 image. Row 0 is the visually topmost row.
///
/// Invariant: `pixels().len() == width * height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<RGB8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap existing pixels, checking the length against the dimensions.
    pub fn new(pixels: Vec<RGB8>, width: u32, height: u32) -> Result<Self, FrameError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(FrameError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Allocate a `width` x `height` buffer filled with `fill`.
    ///
    /// Memory exhaustion (and a zero-sized image) is reported as
    /// [`FrameError::AllocationFailed`] rather than aborting.
    pub fn try_filled(width: u32, height: u32, fill: RGB8) -> Result<Self, FrameError> {
        let count = pixel_count(width, height)?;
        let mut pixels = try_alloc(count)?;
        pixels.resize(count, fill);
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<RGB8> {
        self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<RGB8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// One row, left to right. Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[RGB8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Interleaved R,G,B bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// Whether the buffer has the given dimensions.
    pub fn has_dimensions(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGB8> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }
}

/// `width * height`, rejecting products that overflow `usize`.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, FrameError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(FrameError::DimensionsTooLarge { width, height })
}

/// Reserve room for `count` pixels without aborting on exhaustion.
pub(crate) fn try_alloc(count: usize) -> Result<Vec<RGB8>, FrameError> {
    let bytes = count.saturating_mul(3);
    if count == 0 {
        return Err(FrameError::AllocationFailed { bytes });
    }
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| FrameError::AllocationFailed { bytes })?;
    Ok(pixels)
}
