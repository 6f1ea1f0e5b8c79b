use crate::foundation::core::Rgb;
use crate::foundation::math::expand_bits;

/// Canvas pixel layout. Multi-byte pixels are stored little-endian.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 8-bit palette indices.
    Indexed8,
    /// 16-bit `rrrrrggg gggbbbbb`.
    Rgb565,
    /// 24-bit packed `b, g, r` bytes.
    Rgb888,
    /// 32-bit `0x00rrggbb`.
    #[default]
    Xrgb8888,
}

impl PixelFormat {
    /// Storage size of one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Indexed8 => 1,
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb888 => 3,
            PixelFormat::Xrgb8888 => 4,
        }
    }

    /// Bit depth of one pixel.
    pub fn bits_per_pixel(self) -> u32 {
        (self.bytes_per_pixel() as u32) * 8
    }

    /// Return `true` for palette-indexed layouts.
    pub fn is_indexed(self) -> bool {
        matches!(self, PixelFormat::Indexed8)
    }

    /// Encode a color as a raw pixel value. Indexed layouts have no RGB encoding and yield 0.
    pub fn map_rgb(self, c: Rgb) -> u32 {
        let (r, g, b) = (u32::from(c.r), u32::from(c.g), u32::from(c.b));
        match self {
            PixelFormat::Indexed8 => 0,
            PixelFormat::Rgb565 => ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3),
            PixelFormat::Rgb888 | PixelFormat::Xrgb8888 => (r << 16) | (g << 8) | b,
        }
    }

    /// Decode a raw true-color pixel value. Indexed layouts must go through a color table.
    pub fn unmap_rgb(self, raw: u32) -> Rgb {
        match self {
            PixelFormat::Indexed8 => Rgb::default(),
            PixelFormat::Rgb565 => Rgb::new(
                expand_bits(raw >> 11, 5),
                expand_bits(raw >> 5, 6),
                expand_bits(raw, 5),
            ),
            PixelFormat::Rgb888 | PixelFormat::Xrgb8888 => {
                Rgb::new((raw >> 16) as u8, (raw >> 8) as u8, raw as u8)
            }
        }
    }

    pub(crate) fn read(self, bytes: &[u8]) -> u32 {
        match self {
            PixelFormat::Indexed8 => u32::from(bytes[0]),
            PixelFormat::Rgb565 => u32::from(u16::from_le_bytes([bytes[0], bytes[1]])),
            PixelFormat::Rgb888 => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]),
            PixelFormat::Xrgb8888 => {
                u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
            }
        }
    }

    pub(crate) fn write(self, bytes: &mut [u8], raw: u32) {
        let le = raw.to_le_bytes();
        let n = self.bytes_per_pixel();
        bytes[..n].copy_from_slice(&le[..n]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/format.rs"]
mod tests;
