use crate::foundation::core::{Point, Rect, Rgb};

/// A true-color frame as RGBA8 pixels.
///
/// This is the fixed format of the visible surface and of every transition snapshot. Pixels are
/// straight RGBA and everything derived from a canvas is opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Transparent black frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    /// Frame filled with one pixel value.
    pub fn filled(width: u32, height: u32, px: [u8; 4]) -> Self {
        Self {
            width,
            height,
            data: px.repeat((width as usize) * (height as usize)),
        }
    }

    /// The full frame rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    /// Pixel at `(x, y)`, `None` when outside the frame.
    pub fn get(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Write a pixel; outside the frame this is a no-op.
    pub fn put(&mut self, x: i32, y: i32, px: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Copy the pixels under `r` (clipped) into a new frame.
    pub fn crop(&self, r: Rect) -> Option<FrameRGBA> {
        let r = r.intersect(self.bounds())?;
        let mut out = FrameRGBA::new(r.w as u32, r.h as u32);
        let row_len = (r.w as usize) * 4;
        for row in 0..r.h {
            let s = (((r.y + row) as usize) * (self.width as usize) + r.x as usize) * 4;
            let d = (row as usize) * row_len;
            out.data[d..d + row_len].copy_from_slice(&self.data[s..s + row_len]);
        }
        Some(out)
    }

    /// Replace the pixels under `src`'s extent placed at `at`, clipped against this frame.
    pub fn blit(&mut self, src: &FrameRGBA, at: Point) {
        let Some(target) = src.bounds().at(at).intersect(self.bounds()) else {
            return;
        };
        let len = (target.w as usize) * 4;
        for row in 0..target.h {
            let sy = (target.y - at.y + row) as usize;
            let sx = (target.x - at.x) as usize;
            let s = (sy * (src.width as usize) + sx) * 4;
            let d = (((target.y + row) as usize) * (self.width as usize) + target.x as usize) * 4;
            self.data[d..d + len].copy_from_slice(&src.data[s..s + len]);
        }
    }
}

/// Optional render-backend features queried at runtime.
///
/// Polygon-mask transitions need both an offscreen render target and textured polygon
/// drawing; without them the fader falls back to a crossfade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Capabilities {
    /// Rendering into an intermediate offscreen target.
    pub render_target: bool,
    /// Drawing textured triangle geometry.
    pub textured_geometry: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}

impl Capabilities {
    /// Every feature available.
    pub const fn full() -> Self {
        Self {
            render_target: true,
            textured_geometry: true,
        }
    }

    /// No optional feature available.
    pub const fn none() -> Self {
        Self {
            render_target: false,
            textured_geometry: false,
        }
    }

    /// Return `true` when polygon-mask effects can be rendered.
    pub fn supports_polygon_masks(self) -> bool {
        self.render_target && self.textured_geometry
    }
}

/// Display-side sink for the visible surface.
///
/// The engine is the only caller. `present` is the single "transfer to display" step; the
/// presentation pump guarantees it is not called when nothing changed.
pub trait DisplayBackend {
    /// Optional features this backend offers.
    fn capabilities(&self) -> Capabilities;

    /// Indexed canvases push color-table updates here as soon as they happen.
    fn set_colors(&mut self, first: usize, colors: &[Rgb]);

    /// Transfer `frame` to the display and repaint.
    fn present(&mut self, frame: &FrameRGBA);

    /// Block until the next display refresh. Return `false` when vsync is unavailable.
    fn wait_vsync(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
