//! RGB565 packing: 5 bits red (15..11), 6 bits green (10..5), 5 bits blue (4..0).

use rgb::RGB8;

/// A packed 16-bit RGB565 color word.
///
/// Packing truncates the low bits of each channel; unpacking expands each
/// field with `field * 255 / max` using truncating integer division.
/// `to_rgb8(from_rgb8(c))` is lossy but maps 0 to 0 and 255 to 255.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Pack 8-bit channels, keeping the top 5/6/5 bits.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r >> 3) as u16 & 0x1F;
        let g6 = (g >> 2) as u16 & 0x3F;
        let b5 = (b >> 3) as u16 & 0x1F;
        Self((r5 << 11) | (g6 << 5) | b5)
    }

    pub const fn red5(self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    pub const fn green6(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    pub const fn blue5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Expand to 8-bit channels.
    pub const fn to_rgb8(self) -> RGB8 {
        RGB8 {
            r: expand(self.red5(), 31),
            g: expand(self.green6(), 63),
            b: expand(self.blue5(), 31),
        }
    }
}

const fn expand(field: u8, max: u16) -> u8 {
    (field as u16 * 255 / max) as u8
}

impl From<RGB8> for Rgb565 {
    fn from(px: RGB8) -> Self {
        Self::from_rgb8(px.r, px.g, px.b)
    }
}

impl From<Rgb565> for RGB8 {
    fn from(c: Rgb565) -> Self {
        c.to_rgb8()
    }
}

impl From<u16> for Rgb565 {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<Rgb565> for u16 {
    fn from(c: Rgb565) -> Self {
        c.0
    }
}

impl core::fmt::UpperHex for Rgb565 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::UpperHex::fmt(&self.0, f)
    }
}
