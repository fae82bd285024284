//! Fault-tolerant reader for RGB565 hex streams.
//!
//! Streams may be hand-edited, simulator dumps with `xxxx` placeholders for
//! undriven memory, or cut short. Only lines holding 1 to 4 hex digits carry a
//! pixel; every other line is skipped without consuming a pixel slot. If the
//! stream ends before the quota is met, the remaining slots repeat the last
//! value that did parse (black if none did).

use alloc::vec::Vec;

use crate::error::FrameError;
use crate::pixel::{PixelBuffer, pixel_count, try_alloc};
use crate::rgb565::Rgb565;

/// Up-front capacity reserved by [`HexDecoder::new`]; larger quotas grow
/// as data lines arrive.
const INITIAL_CAPACITY: usize = crate::frame::TOTAL_PIXELS;

/// Longest line prefix examined. Anything past it is ignored, which makes
/// such a line malformed unless a placeholder marker appears earlier.
pub const MAX_LINE_LEN: usize = 63;

/// Classification of one line of a hex stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexLine {
    /// 1 to 4 hex digits and nothing else.
    Data(Rgb565),
    /// Starts with `//` after leading whitespace.
    Comment,
    /// Nothing before the line terminator.
    Blank,
    /// Contains `x` or `X`, e.g. `xxxx` for an unknown value.
    Placeholder,
    /// Anything else: too long, stray characters, trailing spaces.
    Malformed,
}

impl HexLine {
    /// Classify a single line. A trailing `\n` or `\r\n` is allowed.
    ///
    /// `line` is one logical line however long it is. Readers built on a
    /// fixed 256-byte line buffer split longer lines into several records,
    /// and a short hex tail of such a split can count as a pixel. Here it
    /// cannot: a long line is classified once, from its first
    /// [`MAX_LINE_LEN`] bytes.
    pub fn classify(line: &[u8]) -> Self {
        let start = line
            .iter()
            .position(|&b| !is_c_space(b))
            .unwrap_or(line.len());
        let line = &line[start..];

        if line.starts_with(b"//") {
            return HexLine::Comment;
        }

        let scan = &line[..line.len().min(MAX_LINE_LEN)];
        let end = scan
            .iter()
            .position(|&b| matches!(b, b'\r' | b'\n' | 0))
            .unwrap_or(scan.len());
        let content = &scan[..end];

        if content.is_empty() {
            return HexLine::Blank;
        }
        if content.iter().any(|&b| b == b'x' || b == b'X') {
            return HexLine::Placeholder;
        }
        if content.len() > 4 || !content.iter().all(u8::is_ascii_hexdigit) {
            return HexLine::Malformed;
        }

        let bits = content
            .iter()
            .fold(0u16, |acc, &b| (acc << 4) | hex_value(b));
        HexLine::Data(Rgb565::from_bits(bits))
    }

    /// The parsed color, for data lines.
    pub fn value(self) -> Option<Rgb565> {
        match self {
            HexLine::Data(c) => Some(c),
            _ => None,
        }
    }
}

/// C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn hex_value(b: u8) -> u16 {
    char::from(b).to_digit(16).unwrap_or(0) as u16
}

/// Per-class line counts gathered while decoding.
///
/// Default decoding never fails; these counters are how a caller finds out
/// that a stream was noisy or short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub data_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    pub placeholder_lines: usize,
    pub malformed_lines: usize,
    /// Pixels filled with the last valid value after the input ran out.
    pub padded_pixels: usize,
    /// Input continued after the pixel quota was met and was not read.
    pub stopped_early: bool,
}

impl DecodeStats {
    /// Lines that did not produce a pixel.
    pub fn skipped_lines(&self) -> usize {
        self.comment_lines + self.blank_lines + self.placeholder_lines + self.malformed_lines
    }

    /// No placeholders, no malformed lines, and no padding.
    pub fn is_clean(&self) -> bool {
        self.placeholder_lines == 0 && self.malformed_lines == 0 && self.padded_pixels == 0
    }
}

/// Incremental decoder producing exactly `total` colors.
///
/// ```
/// use zenrgb565::{HexDecoder, HexLine, Rgb565};
///
/// let mut dec = HexDecoder::new(3);
/// assert_eq!(dec.push_line(b"// frame 0\n"), Some(HexLine::Comment));
/// dec.push_line(b"F800\n");
/// dec.push_line(b"xxxx\n");
/// let frame = dec.finish()?;
/// assert_eq!(frame.colors(), &[Rgb565::from_bits(0xF800); 3]);
/// assert_eq!(frame.stats().padded_pixels, 2);
/// # Ok::<(), zenrgb565::FrameError>(())
/// ```
#[derive(Clone, Debug)]
pub struct HexDecoder {
    colors: Vec<Rgb565>,
    total: usize,
    last_valid: Rgb565,
    stats: DecodeStats,
}

impl HexDecoder {
    pub fn new(total: usize) -> Self {
        Self {
            colors: Vec::with_capacity(total.min(INITIAL_CAPACITY)),
            total,
            last_valid: Rgb565::BLACK,
            stats: DecodeStats::default(),
        }
    }

    /// Whether the quota has been met; further lines are ignored.
    pub fn is_full(&self) -> bool {
        self.colors.len() >= self.total
    }

    /// Colors accepted so far.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Feed one line. Returns its classification, or `None` when the decoder
    /// was already full and the line was not examined.
    pub fn push_line(&mut self, line: &[u8]) -> Option<HexLine> {
        if self.is_full() {
            self.stats.stopped_early = true;
            return None;
        }
        let class = HexLine::classify(line);
        match class {
            HexLine::Data(c) => {
                self.stats.data_lines += 1;
                self.last_valid = c;
                self.colors.push(c);
            }
            HexLine::Comment => self.stats.comment_lines += 1,
            HexLine::Blank => self.stats.blank_lines += 1,
            HexLine::Placeholder => self.stats.placeholder_lines += 1,
            HexLine::Malformed => self.stats.malformed_lines += 1,
        }
        Some(class)
    }

    /// Feed every line of `data` until the quota is met.
    pub fn push_bytes(&mut self, data: &[u8]) {
        for line in data.split_inclusive(|&b| b == b'\n') {
            if self.push_line(line).is_none() {
                break;
            }
        }
    }

    /// Pad any shortfall with the last valid value and return the frame.
    ///
    /// Fails only if the padding cannot be allocated.
    pub fn finish(mut self) -> Result<HexFrame, FrameError> {
        let missing = self.total - self.colors.len();
        if missing > 0 {
            self.colors.try_reserve_exact(missing).map_err(|_| {
                FrameError::AllocationFailed {
                    bytes: self.total.saturating_mul(core::mem::size_of::<Rgb565>()),
                }
            })?;
            log::warn!(
                "hex stream ended after {} of {} pixels; padding with {:04X}",
                self.colors.len(),
                self.total,
                self.last_valid
            );
            self.colors.resize(self.total, self.last_valid);
        }
        self.stats.padded_pixels = missing;

        let skipped = self.stats.placeholder_lines + self.stats.malformed_lines;
        if skipped > 0 {
            log::warn!(
                "skipped {} placeholder and {} malformed lines",
                self.stats.placeholder_lines,
                self.stats.malformed_lines
            );
        }

        Ok(HexFrame {
            colors: self.colors,
            stats: self.stats,
        })
    }
}

/// Exactly `total` decoded colors plus the statistics of how they were read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexFrame {
    colors: Vec<Rgb565>,
    stats: DecodeStats,
}

impl HexFrame {
    pub fn colors(&self) -> &[Rgb565] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<Rgb565> {
        self.colors
    }

    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// Expand to an RGB8 image of the given dimensions.
    pub fn to_pixel_buffer(&self, width: u32, height: u32) -> Result<PixelBuffer, FrameError> {
        let expected = pixel_count(width, height)?;
        if self.colors.len() != expected {
            return Err(FrameError::BufferSizeMismatch {
                expected,
                actual: self.colors.len(),
            });
        }
        let mut pixels = try_alloc(expected)?;
        pixels.extend(self.colors.iter().map(|c| c.to_rgb8()));
        PixelBuffer::new(pixels, width, height)
    }
}

#[cfg(feature = "std")]
pub(crate) fn read_hex<R: std::io::BufRead>(
    mut reader: R,
    total: usize,
) -> Result<HexFrame, FrameError> {
    let mut decoder = HexDecoder::new(total);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if decoder.push_line(&line).is_none() {
            break;
        }
    }
    decoder.finish()
}
