use crate::canvas::palette::{PALETTE_SIZE, nearest_color};
use crate::draw::copy::{copy_area, copy_area_keyed};
use crate::draw::flood::flood_fill;
use crate::draw::image::{Image8, draw_image8};
use crate::draw::primitives::{draw_line, draw_rect, fill_circle, fill_rect, wrap_color};
use crate::draw::text::{TextInk, draw_string};
use crate::engine::Engine;
use crate::foundation::core::{Point, Rect, Rgb};
use crate::foundation::error::{AgsError, AgsResult};
use crate::render::backend::DisplayBackend;

impl<B: DisplayBackend> Engine<B> {
    /// Replace `count` color-table slots starting at `first` with `entries[..count]`.
    ///
    /// The editable palette is updated too. On indexed canvases the backend color table receives
    /// the new range before this returns.
    pub fn set_palette(&mut self, entries: &[Rgb], first: usize, count: usize) -> AgsResult<()> {
        if first.checked_add(count).is_none_or(|end| end > PALETTE_SIZE) {
            return Err(AgsError::validation(format!(
                "palette range {first}+{count} exceeds {PALETTE_SIZE} entries"
            )));
        }
        if entries.len() < count {
            return Err(AgsError::validation(format!(
                "palette range needs {count} entries, got {}",
                entries.len()
            )));
        }
        if count == 0 {
            return Ok(());
        }
        // earlier edits outside the range must still reach the color table
        self.check_palette();
        let entries = &entries[..count];
        self.palette.set_range(first as u8, entries);
        self.palette.take_changed();
        self.apply_colors(first, entries);
        Ok(())
    }

    /// Palette index closest to `(r, g, b)` under the weighted `30/59/11` distance.
    pub fn nearest_color(&mut self, r: u8, g: u8, b: u8) -> u8 {
        self.check_palette();
        nearest_color(&self.colors, r, g, b)
    }

    /// Resolve pending palette edits into the color table.
    pub(crate) fn check_palette(&mut self) {
        if self.palette.take_changed() {
            let entries = *self.palette.entries();
            self.apply_colors(0, &entries);
        }
    }

    fn apply_colors(&mut self, first: usize, entries: &[Rgb]) {
        self.colors[first..first + entries.len()].copy_from_slice(entries);
        tracing::trace!(first, count = entries.len(), "color table updated");
        if self.canvas.format().is_indexed() {
            self.backend.set_colors(first, entries);
            // every indexed pixel may have changed meaning
            self.damage = self.canvas.bounds();
        }
    }

    /// Raw canvas value for palette slot `index`.
    fn palette_color(&self, index: u8) -> u32 {
        let format = self.canvas.format();
        if format.is_indexed() {
            u32::from(index)
        } else {
            format.map_rgb(self.colors[usize::from(index)])
        }
    }

    /// Resolved color of the canvas pixel at `(x, y)`.
    pub fn pixel_rgb(&self, x: i32, y: i32) -> Option<Rgb> {
        self.canvas.rgb_at(x, y, &self.colors)
    }

    /// Solid rectangle in palette color `color`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        self.check_palette();
        let raw = self.palette_color(color);
        let r = fill_rect(&mut self.canvas, Rect::new(x, y, w, h), raw);
        self.mark(r);
    }

    /// Solid rectangle in a direct color. No-op on indexed canvases.
    pub fn fill_rect_rgb(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let format = self.canvas.format();
        if format.is_indexed() {
            return;
        }
        let r = fill_rect(&mut self.canvas, Rect::new(x, y, w, h), format.map_rgb(color));
        self.mark(r);
    }

    /// One-pixel rectangle outline in palette color `color`.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        self.check_palette();
        let raw = self.palette_color(color);
        let r = draw_rect(&mut self.canvas, Rect::new(x, y, w, h), raw);
        self.mark(r);
    }

    /// Filled disc inside the `diameter` square at `(left, top)`.
    pub fn fill_circle(&mut self, left: i32, top: i32, diameter: i32, color: u8) {
        self.check_palette();
        let raw = self.palette_color(color);
        let r = fill_circle(&mut self.canvas, left, top, diameter, raw);
        self.mark(r);
    }

    /// Line between two points, both inclusive.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u8) {
        self.check_palette();
        let raw = self.palette_color(color);
        let r = draw_line(&mut self.canvas, x1, y1, x2, y2, raw);
        self.mark(r);
    }

    /// Blend palette color `color` over a rectangle at `rate / 255`. No-op on indexed canvases.
    pub fn wrap_color(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8, rate: u8) {
        self.check_palette();
        let c = self.colors[usize::from(color)];
        let r = wrap_color(&mut self.canvas, Rect::new(x, y, w, h), c, rate);
        self.mark(r);
    }

    /// Blit an indexed image; pixels equal to `sprite` are transparent.
    pub fn draw_image8(&mut self, image: &Image8, dx: i32, dy: i32, sprite: Option<u8>) {
        self.check_palette();
        let r = draw_image8(&mut self.canvas, image, dx, dy, sprite, &self.colors);
        self.mark(r);
    }

    /// Draw `text` with the installed font. Returns the area covered; empty without a font.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str, color: u8) -> Rect {
        self.check_palette();
        let ink = if self.antialias && !self.canvas.format().is_indexed() {
            TextInk::Blend(self.colors[usize::from(color)])
        } else {
            TextInk::Solid(self.palette_color(color))
        };
        let Some(font) = self.font.as_deref() else {
            return Rect::EMPTY;
        };
        let r = draw_string(&mut self.canvas, font, x, y, text, ink);
        self.mark((!r.is_empty()).then_some(r));
        r
    }

    /// Copy a `w x h` area from `(sx, sy)` to `(dx, dy)`; overlapping areas are safe.
    pub fn copy_area(&mut self, sx: i32, sy: i32, w: i32, h: i32, dx: i32, dy: i32) {
        let r = copy_area(&mut self.canvas, Rect::new(sx, sy, w, h), Point::new(dx, dy));
        self.mark(r);
    }

    /// Like [`Engine::copy_area`], treating palette slot `key` as transparent.
    ///
    /// On true-color canvases the key is matched as the slot's color with its low bits cleared
    /// (`0xf8, 0xfc, 0xf8`).
    #[allow(clippy::too_many_arguments)]
    pub fn copy_area_with_color_key(
        &mut self,
        sx: i32,
        sy: i32,
        w: i32,
        h: i32,
        dx: i32,
        dy: i32,
        key: u8,
    ) {
        self.check_palette();
        let format = self.canvas.format();
        let raw_key = if format.is_indexed() {
            u32::from(key)
        } else {
            let c = self.colors[usize::from(key)];
            format.map_rgb(Rgb::new(c.r & 0xf8, c.g & 0xfc, c.b & 0xf8))
        };
        let r = copy_area_keyed(
            &mut self.canvas,
            Rect::new(sx, sy, w, h),
            Point::new(dx, dy),
            raw_key,
        );
        self.mark(r);
    }

    /// Repaint the region of equal raw pixels around `(x, y)`. Returns the repainted bounds.
    pub fn flood_fill(&mut self, x: i32, y: i32, color: u8) -> Rect {
        self.check_palette();
        let raw = self.palette_color(color);
        let r = flood_fill(&mut self.canvas, x, y, raw);
        self.mark((!r.is_empty()).then_some(r));
        r
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/draw.rs"]
mod tests;
