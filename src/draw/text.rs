use crate::canvas::surface::Canvas;
use crate::foundation::core::{Rect, Rgb};
use crate::foundation::math::mul_div255_u8;

/// One rasterized character: an 8-bit coverage bitmap placed relative to the pen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Bitmap width.
    pub width: u32,
    /// Bitmap height.
    pub height: u32,
    /// Horizontal offset of the bitmap from the pen position.
    pub left: i32,
    /// Vertical offset of the bitmap from the line top.
    pub top: i32,
    /// Pen advance after this glyph.
    pub advance: i32,
    /// Row-major coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

/// Supplies glyph bitmaps. Font loading and rasterization live behind this seam.
pub trait GlyphSource {
    /// Rasterize `ch`, or `None` when the font has no glyph for it.
    fn glyph(&self, ch: char) -> Option<Glyph>;
}

/// How glyph coverage reaches the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextInk {
    /// Coverage `>= 128` writes `raw`.
    Solid(u32),
    /// Coverage blends `Rgb` over the canvas. Only meaningful on true-color canvases.
    Blend(Rgb),
}

/// Draw `text` with the line's top-left at `(x, y)`.
///
/// Returns the clipped bounding rectangle of everything the glyphs cover.
pub(crate) fn draw_string(
    canvas: &mut Canvas,
    font: &dyn GlyphSource,
    x: i32,
    y: i32,
    text: &str,
    ink: TextInk,
) -> Rect {
    let mut pen = x;
    let mut bounds = Rect::EMPTY;
    for ch in text.chars() {
        let Some(glyph) = font.glyph(ch) else {
            continue;
        };
        let gx = pen + glyph.left;
        let gy = y + glyph.top;
        let area = Rect::new(gx, gy, glyph.width as i32, glyph.height as i32);
        if let Some(hit) = canvas.clip(area) {
            blit_glyph(canvas, &glyph, gx, gy, hit, ink);
            bounds = bounds.union(hit);
        }
        pen += glyph.advance;
    }
    bounds
}

fn blit_glyph(canvas: &mut Canvas, glyph: &Glyph, gx: i32, gy: i32, hit: Rect, ink: TextInk) {
    let format = canvas.format();
    let gw = glyph.width as usize;
    for py in hit.y..hit.bottom() {
        for px in hit.x..hit.right() {
            let i = (py - gy) as usize * gw + (px - gx) as usize;
            let Some(&cov) = glyph.coverage.get(i) else {
                continue;
            };
            let (cx, cy) = (px as usize, py as usize);
            match ink {
                TextInk::Solid(raw) => {
                    if cov >= 128 {
                        canvas.set_at(cx, cy, raw);
                    }
                }
                TextInk::Blend(color) => {
                    if cov == 0 {
                        continue;
                    }
                    let a = u16::from(cov);
                    let d = format.unmap_rgb(canvas.raw_at(cx, cy));
                    let mix = |s: u8, d: u8| {
                        mul_div255_u8(u16::from(s), a)
                            .saturating_add(mul_div255_u8(u16::from(d), 255 - a))
                    };
                    let out = Rgb::new(mix(color.r, d.r), mix(color.g, d.g), mix(color.b, d.b));
                    canvas.set_at(cx, cy, format.map_rgb(out));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/text.rs"]
mod tests;
