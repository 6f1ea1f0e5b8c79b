use crate::canvas::palette::PALETTE_SIZE;
use crate::canvas::surface::Canvas;
use crate::foundation::core::{Rect, Rgb};
use crate::foundation::error::{AgsError, AgsResult};

/// 8-bit palette-indexed picture, optionally carrying its own color table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image8 {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    palette: Option<Box<[Rgb; PALETTE_SIZE]>>,
}

impl Image8 {
    /// Wrap `pixels` (row-major, one index per pixel).
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> AgsResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| AgsError::validation("image size overflow"))?;
        if pixels.len() != expected {
            return Err(AgsError::validation(format!(
                "image {width}x{height} needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
            palette: None,
        })
    }

    /// Attach the image's own color table.
    pub fn with_palette(mut self, palette: [Rgb; PALETTE_SIZE]) -> Self {
        self.palette = Some(Box::new(palette));
        self
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major palette indices.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The image's own color table, if any.
    pub fn palette(&self) -> Option<&[Rgb; PALETTE_SIZE]> {
        self.palette.as_deref()
    }
}

/// Blit `image` with its top-left at `(dx, dy)`, skipping pixels equal to `sprite`.
///
/// Indexed canvases receive the raw indices. True-color canvases resolve each index through the
/// image's own palette when it has one, otherwise through `colors`.
pub fn draw_image8(
    canvas: &mut Canvas,
    image: &Image8,
    dx: i32,
    dy: i32,
    sprite: Option<u8>,
    colors: &[Rgb; PALETTE_SIZE],
) -> Option<Rect> {
    let area = Rect::new(dx, dy, image.width as i32, image.height as i32);
    let target = canvas.clip(area)?;
    let format = canvas.format();
    let table = image.palette().unwrap_or(colors);

    let iw = image.width as usize;
    for y in target.y..target.bottom() {
        let row = (y - dy) as usize * iw;
        for x in target.x..target.right() {
            let idx = image.pixels[row + (x - dx) as usize];
            if Some(idx) == sprite {
                continue;
            }
            let raw = if format.is_indexed() {
                u32::from(idx)
            } else {
                format.map_rgb(table[usize::from(idx)])
            };
            canvas.set_at(x as usize, y as usize, raw);
        }
    }
    Some(target)
}

#[cfg(test)]
#[path = "../../tests/unit/draw/image.rs"]
mod tests;
