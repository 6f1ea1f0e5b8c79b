use crate::canvas::format::PixelFormat;
use crate::canvas::palette::PALETTE_SIZE;
use crate::foundation::core::{Point, Rect, Rgb};
use crate::foundation::error::{AgsError, AgsResult};
use crate::render::backend::FrameRGBA;

/// Off-screen pixel buffer mutated by every drawing primitive.
///
/// Rows are tightly packed: `stride == width * bytes_per_pixel`. All public accessors clip
/// against `[0, width) x [0, height)`; nothing here indexes out of bounds for any input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    format: PixelFormat,
    stride: usize,
    pixels: Vec<u8>,
}

/// Pixels saved from a canvas rectangle, in the canvas's own layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedRegion {
    w: usize,
    h: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl SavedRegion {
    /// Saved size as an origin-anchored rectangle.
    pub fn size(&self) -> Rect {
        Rect::new(0, 0, self.w as i32, self.h as i32)
    }

    pub(crate) fn raw_at(&self, x: usize, y: usize) -> u32 {
        let bpp = self.format.bytes_per_pixel();
        self.format.read(&self.data[(y * self.w + x) * bpp..])
    }
}

impl Canvas {
    /// Create a zero-filled canvas.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> AgsResult<Self> {
        if width == 0 || height == 0 {
            return Err(AgsError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(AgsError::validation("canvas dimensions exceed i32"));
        }
        let stride = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| AgsError::validation("canvas row size overflow"))?;
        let len = stride
            .checked_mul(height as usize)
            .ok_or_else(|| AgsError::validation("canvas buffer size overflow"))?;
        Ok(Self {
            width,
            height,
            format,
            stride,
            pixels: vec![0u8; len],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw pixel bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw pixel bytes, row-major. Bypasses damage tracking when used through the engine.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The full canvas rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Clip `r` against the canvas.
    pub fn clip(&self, r: Rect) -> Option<Rect> {
        r.intersect(self.bounds())
    }

    /// Raw value at `(x, y)`, `None` when outside the canvas.
    pub fn get_raw(&self, x: i32, y: i32) -> Option<u32> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(self.raw_at(x as usize, y as usize))
    }

    /// Write a raw value at `(x, y)`; outside the canvas this is a no-op.
    pub fn put_raw(&mut self, x: i32, y: i32, raw: u32) {
        if self.bounds().contains(x, y) {
            self.set_at(x as usize, y as usize, raw);
        }
    }

    pub(crate) fn raw_at(&self, x: usize, y: usize) -> u32 {
        let i = self.offset(x, y);
        self.format.read(&self.pixels[i..])
    }

    pub(crate) fn set_at(&mut self, x: usize, y: usize, raw: u32) {
        let i = self.offset(x, y);
        self.format.write(&mut self.pixels[i..], raw);
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.stride + x * self.format.bytes_per_pixel()
    }

    /// Fill `r` (clipped) with one raw value, returning the painted rectangle.
    pub fn fill_rect_raw(&mut self, r: Rect, raw: u32) -> Option<Rect> {
        let r = self.clip(r)?;
        let bpp = self.format.bytes_per_pixel();
        let le = raw.to_le_bytes();
        for y in r.y..r.bottom() {
            let row = self.offset(r.x as usize, y as usize);
            let run = &mut self.pixels[row..row + (r.w as usize) * bpp];
            for px in run.chunks_exact_mut(bpp) {
                px.copy_from_slice(&le[..bpp]);
            }
        }
        Some(r)
    }

    /// Copy the pixels under `r` (clipped) into a detached buffer.
    pub fn save_region(&self, r: Rect) -> Option<SavedRegion> {
        let r = self.clip(r)?;
        let bpp = self.format.bytes_per_pixel();
        let row_len = (r.w as usize) * bpp;
        let mut data = Vec::with_capacity(row_len * (r.h as usize));
        for y in r.y..r.bottom() {
            let row = self.offset(r.x as usize, y as usize);
            data.extend_from_slice(&self.pixels[row..row + row_len]);
        }
        Some(SavedRegion {
            w: r.w as usize,
            h: r.h as usize,
            format: self.format,
            data,
        })
    }

    /// Write a saved region with its top-left corner at `dst`, clipped against the canvas.
    ///
    /// Regions saved from a canvas with a different pixel layout are ignored.
    pub fn restore_region(&mut self, region: &SavedRegion, dst: Point) -> Option<Rect> {
        if region.format != self.format {
            tracing::warn!(
                saved = ?region.format,
                canvas = ?self.format,
                "restore: saved region has a different pixel format"
            );
            return None;
        }
        let target = self.clip(region.size().at(dst))?;
        let bpp = self.format.bytes_per_pixel();
        let src_row_len = region.w * bpp;
        let skip_x = (target.x - dst.x) as usize;
        let skip_y = (target.y - dst.y) as usize;
        let len = (target.w as usize) * bpp;
        for row in 0..target.h as usize {
            let s = (skip_y + row) * src_row_len + skip_x * bpp;
            let d = self.offset(target.x as usize, target.y as usize + row);
            self.pixels[d..d + len].copy_from_slice(&region.data[s..s + len]);
        }
        Some(target)
    }

    /// Row-by-row copy from `src` to `dst` inside this canvas.
    ///
    /// Both rectangles must already lie inside the canvas and must not overlap.
    pub(crate) fn blit_disjoint(&mut self, src: Rect, dst: Point) {
        debug_assert!(src.at(dst).intersect(src).is_none());
        let len = (src.w as usize) * self.format.bytes_per_pixel();
        for row in 0..src.h as usize {
            let s = self.offset(src.x as usize, src.y as usize + row);
            let d = self.offset(dst.x as usize, dst.y as usize + row);
            self.pixels.copy_within(s..s + len, d);
        }
    }

    /// Resolve the color at `(x, y)`; `colors` is consulted only for indexed canvases.
    pub fn rgb_at(&self, x: i32, y: i32, colors: &[Rgb; PALETTE_SIZE]) -> Option<Rgb> {
        let raw = self.get_raw(x, y)?;
        Some(self.resolve_raw(raw, colors))
    }

    pub(crate) fn resolve_raw(&self, raw: u32, colors: &[Rgb; PALETTE_SIZE]) -> Rgb {
        if self.format.is_indexed() {
            colors[(raw & 0xff) as usize]
        } else {
            self.format.unmap_rgb(raw)
        }
    }

    /// Convert the pixels under `r` (clipped) to opaque RGBA8, whatever the canvas layout.
    pub fn capture_rgba(&self, r: Rect, colors: &[Rgb; PALETTE_SIZE]) -> Option<FrameRGBA> {
        let r = self.clip(r)?;
        let mut frame = FrameRGBA::new(r.w as u32, r.h as u32);
        self.convert_into(r, colors, &mut frame);
        Some(frame)
    }

    /// Convert the whole canvas into `frame`, which must have the canvas's size.
    pub(crate) fn render_into(&self, colors: &[Rgb; PALETTE_SIZE], frame: &mut FrameRGBA) {
        self.convert_into(self.bounds(), colors, frame);
    }

    fn convert_into(&self, r: Rect, colors: &[Rgb; PALETTE_SIZE], frame: &mut FrameRGBA) {
        for y in 0..r.h {
            for x in 0..r.w {
                let raw = self.raw_at((r.x + x) as usize, (r.y + y) as usize);
                let c = self.resolve_raw(raw, colors);
                frame.put(x, y, c.to_rgba());
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/surface.rs"]
mod tests;
