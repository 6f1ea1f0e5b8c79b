//! Scanline flood fill over raw pixel words.
//!
//! Region detection compares raw stored values, never resolved colors, so the comparison and
//! write width must match the canvas layout. One algorithm serves every width through the
//! [`PixelWord`] access strategy, chosen once per call from the canvas's bytes per pixel.

use std::marker::PhantomData;

use crate::canvas::surface::Canvas;
use crate::foundation::core::Rect;

/// Fixed-width raw pixel value with little-endian storage.
pub trait PixelWord: Copy + Eq {
    /// Storage width in bytes.
    const BYTES: usize;
    /// Read one word from the start of `bytes`.
    fn load(bytes: &[u8]) -> Self;
    /// Write this word to the start of `bytes`.
    fn store(self, bytes: &mut [u8]);
    /// Truncate a raw canvas value to this width.
    fn from_raw(raw: u32) -> Self;
}

impl PixelWord for u8 {
    const BYTES: usize = 1;
    fn load(bytes: &[u8]) -> Self {
        bytes[0]
    }
    fn store(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }
    fn from_raw(raw: u32) -> Self {
        raw as u8
    }
}

impl PixelWord for u16 {
    const BYTES: usize = 2;
    fn load(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }
    fn store(self, bytes: &mut [u8]) {
        bytes[..2].copy_from_slice(&self.to_le_bytes());
    }
    fn from_raw(raw: u32) -> Self {
        raw as u16
    }
}

impl PixelWord for u32 {
    const BYTES: usize = 4;
    fn load(bytes: &[u8]) -> Self {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
    fn store(self, bytes: &mut [u8]) {
        bytes[..4].copy_from_slice(&self.to_le_bytes());
    }
    fn from_raw(raw: u32) -> Self {
        raw
    }
}

struct Words<'a, P> {
    buf: &'a mut [u8],
    stride: usize,
    _word: PhantomData<P>,
}

impl<P: PixelWord> Words<'_, P> {
    fn get(&self, x: usize, y: usize) -> P {
        P::load(&self.buf[y * self.stride + x * P::BYTES..])
    }

    fn set(&mut self, x: usize, y: usize, v: P) {
        v.store(&mut self.buf[y * self.stride + x * P::BYTES..]);
    }
}

/// Repaint the 4-connected region of equal raw values around `(x, y)` with `raw`.
///
/// Returns the bounding rectangle of every repainted pixel; empty when the seed is outside the
/// canvas, already holds `raw`, or the canvas layout has no matching word width.
pub fn flood_fill(canvas: &mut Canvas, x: i32, y: i32, raw: u32) -> Rect {
    if !canvas.bounds().contains(x, y) {
        return Rect::EMPTY;
    }
    let bpp = canvas.format().bytes_per_pixel();
    let (w, h, stride) = (
        canvas.width() as usize,
        canvas.height() as usize,
        canvas.stride(),
    );
    let seed = (x as usize, y as usize);
    let buf = canvas.pixels_mut();
    match bpp {
        1 => fill_words::<u8>(buf, stride, w, h, seed, u8::from_raw(raw)),
        2 => fill_words::<u16>(buf, stride, w, h, seed, u16::from_raw(raw)),
        4 => fill_words::<u32>(buf, stride, w, h, seed, raw),
        _ => {
            tracing::warn!(bytes_per_pixel = bpp, "flood fill: unsupported pixel width");
            Rect::EMPTY
        }
    }
}

fn fill_words<P: PixelWord>(
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    seed: (usize, usize),
    new: P,
) -> Rect {
    let mut px = Words::<P> {
        buf,
        stride,
        _word: PhantomData,
    };
    let target = px.get(seed.0, seed.1);
    if target == new {
        return Rect::EMPTY;
    }

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (usize::MAX, usize::MAX, 0usize, 0usize);
    let mut stack = vec![seed];
    while let Some((sx, sy)) = stack.pop() {
        if px.get(sx, sy) != target {
            continue;
        }
        let mut lx = sx;
        while lx > 0 && px.get(lx - 1, sy) == target {
            lx -= 1;
        }
        let mut rx = sx;
        while rx + 1 < w && px.get(rx + 1, sy) == target {
            rx += 1;
        }
        for x in lx..=rx {
            px.set(x, sy, new);
        }
        min_x = min_x.min(lx);
        max_x = max_x.max(rx);
        min_y = min_y.min(sy);
        max_y = max_y.max(sy);

        let neighbors = [sy.checked_sub(1), (sy + 1 < h).then_some(sy + 1)];
        for ny in neighbors.into_iter().flatten() {
            let mut in_run = false;
            for x in lx..=rx {
                let hit = px.get(x, ny) == target;
                if hit && !in_run {
                    stack.push((x, ny));
                }
                in_run = hit;
            }
        }
    }

    Rect::new(
        min_x as i32,
        min_y as i32,
        (max_x - min_x + 1) as i32,
        (max_y - min_y + 1) as i32,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/draw/flood.rs"]
mod tests;
