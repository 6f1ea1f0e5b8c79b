use crate::canvas::surface::Canvas;
use crate::foundation::core::{Rect, Rgb};
use crate::foundation::math::mul_div255_u8;

/// One-pixel outline of `r` in `raw`. Returns the clipped outline bounds.
pub fn draw_rect(canvas: &mut Canvas, r: Rect, raw: u32) -> Option<Rect> {
    if r.is_empty() {
        return None;
    }
    let sides = [
        Rect::new(r.x, r.y, r.w, 1),
        Rect::new(r.x, r.y, 1, r.h),
        Rect::new(r.x, r.bottom() - 1, r.w, 1),
        Rect::new(r.right() - 1, r.y, 1, r.h),
    ];
    sides
        .into_iter()
        .filter_map(|side| canvas.fill_rect_raw(side, raw))
        .reduce(Rect::union)
}

/// Solid fill of `r` in `raw`.
pub fn fill_rect(canvas: &mut Canvas, r: Rect, raw: u32) -> Option<Rect> {
    canvas.fill_rect_raw(r, raw)
}

/// Filled disc inside the `diameter` square at `(left, top)`.
///
/// Reproduces a legacy rasterization exactly. The diameter is rounded down to even; for each
/// scanline `y` with `dy = D - 2y`, the first `x` (scanning while `2x < D`, `dx = D - 1 - 2x`)
/// with `dy² + dx² <= D²` starts a run of `D - 2x` pixels. Scanlines with no such `x` stay
/// empty, which is why the top row of every disc is blank.
///
/// Only scanlines that land on the canvas are visited, so any `i32` diameter is accepted.
pub fn fill_circle(canvas: &mut Canvas, left: i32, top: i32, diameter: i32, raw: u32) -> Option<Rect> {
    let d = i64::from(diameter & !1);
    if d <= 0 {
        return None;
    }
    let (left, top) = (i64::from(left), i64::from(top));
    let height = i64::from(canvas.height());
    let rows = (-top).max(0)..d.min(height - top);
    let mut painted: Option<Rect> = None;
    for y in rows {
        let Some((x, len)) = circle_run(d, y) else {
            continue;
        };
        let Some(run) = span(canvas, left + x, len, top + y) else {
            continue;
        };
        if let Some(r) = canvas.fill_rect_raw(run, raw) {
            painted = Some(painted.map_or(r, |p| p.union(r)));
        }
    }
    painted
}

/// `(x offset, run length)` of scanline `y` of an even diameter `d` disc.
///
/// `dx` only shrinks while scanning, so the first hit is `dx = isqrt(D² - dy²)` rounded to the
/// odd lattice `D - 1 - 2x`.
pub(crate) fn circle_run(d: i64, y: i64) -> Option<(i64, i64)> {
    let dy = d - 2 * y;
    let reach = (d * d - dy * dy).max(0).isqrt();
    let x = ((d - 1 - reach).max(0) + 1) / 2;
    (2 * x < d).then_some((x, d - 2 * x))
}

/// One-pixel-high run `[x, x + len)` on row `y`, clipped to the canvas.
fn span(canvas: &Canvas, x: i64, len: i64, y: i64) -> Option<Rect> {
    let width = i64::from(canvas.width());
    if y < 0 || y >= i64::from(canvas.height()) {
        return None;
    }
    let x0 = x.max(0);
    let x1 = (x + len).min(width);
    if x1 <= x0 {
        return None;
    }
    Some(Rect::new(x0 as i32, y as i32, (x1 - x0) as i32, 1))
}

/// Bresenham line, both endpoints inclusive, clipped per pixel.
///
/// Step `k` of the major axis has minor offset `floor((2·minor·k + major) / (2·major))`, which
/// is the pixel the incremental error walk lands on. Only steps whose major coordinate lies on
/// the canvas are visited. Returns the bounds of the painted pixels.
pub fn draw_line(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, raw: u32) -> Option<Rect> {
    let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));
    let (adx, ady) = ((x2 - x1).abs(), (y2 - y1).abs());
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));

    let x_major = adx >= ady;
    let (major, minor) = if x_major { (adx, ady) } else { (ady, adx) };
    let steps = if x_major {
        on_axis(x1, sx, width, major)
    } else {
        on_axis(y1, sy, height, major)
    };

    let mut painted: Option<Rect> = None;
    for k in steps {
        let off = if major == 0 {
            0
        } else {
            let num = 2 * i128::from(minor) * i128::from(k) + i128::from(major);
            (num / (2 * i128::from(major))) as i64
        };
        let (x, y) = if x_major {
            (x1 + sx * k, y1 + sy * off)
        } else {
            (x1 + sx * off, y1 + sy * k)
        };
        if x < 0 || y < 0 || x >= width || y >= height {
            continue;
        }
        let (x, y) = (x as i32, y as i32);
        canvas.put_raw(x, y, raw);
        let px = Rect::new(x, y, 1, 1);
        painted = Some(painted.map_or(px, |p| p.union(px)));
    }
    painted
}

/// Steps `k` in `0..=n` for which `start + step·k` lies in `[0, len)`.
fn on_axis(start: i64, step: i64, len: i64, n: i64) -> std::ops::RangeInclusive<i64> {
    let (lo, hi) = if step > 0 {
        (-start, len - 1 - start)
    } else {
        (start - (len - 1), start)
    };
    lo.max(0)..=hi.min(n)
}

/// Blend `color` over `r` at `rate / 255`. Indexed canvases are left untouched.
pub fn wrap_color(canvas: &mut Canvas, r: Rect, color: Rgb, rate: u8) -> Option<Rect> {
    let format = canvas.format();
    if format.is_indexed() {
        return None;
    }
    let r = canvas.clip(r)?;
    let a = u16::from(rate);
    let inv = 255 - a;
    let mix = |s: u8, d: u8| {
        mul_div255_u8(u16::from(s), a).saturating_add(mul_div255_u8(u16::from(d), inv))
    };
    for y in r.y..r.bottom() {
        for x in r.x..r.right() {
            let raw = canvas.raw_at(x as usize, y as usize);
            let d = format.unmap_rgb(raw);
            let out = Rgb::new(mix(color.r, d.r), mix(color.g, d.g), mix(color.b, d.b));
            canvas.set_at(x as usize, y as usize, format.map_rgb(out));
        }
    }
    Some(r)
}

#[cfg(test)]
#[path = "../../tests/unit/draw/primitives.rs"]
mod tests;
