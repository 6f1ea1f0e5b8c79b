use crate::canvas::surface::Canvas;
use crate::foundation::core::{Point, Rect};

/// Clip a same-size copy against `bounds` on both ends.
///
/// Returns the shrunk source rectangle and the matching destination origin, or `None` when
/// nothing survives.
pub fn clip_copy(bounds: Rect, src: Rect, dst: Point) -> Option<(Rect, Point)> {
    let s = src.intersect(bounds)?;
    let dst = Point::new(shift(dst.x, src.x, s.x)?, shift(dst.y, src.y, s.y)?);
    let d = s.at(dst).intersect(bounds)?;
    let s = Rect::new(shift(s.x, dst.x, d.x)?, shift(s.y, dst.y, d.y)?, d.w, d.h);
    Some((s, d.origin()))
}

/// `base + (to - from)`, `None` when the result leaves `i32`.
fn shift(base: i32, from: i32, to: i32) -> Option<i32> {
    i32::try_from(i64::from(base) + i64::from(to) - i64::from(from)).ok()
}

/// Copy `src` so its top-left lands at `dst`, inside one canvas.
///
/// Identical source and destination is a no-op. Overlapping rectangles alias, so the source is
/// saved to a detached buffer first; disjoint rectangles copy directly.
pub fn copy_area(canvas: &mut Canvas, src: Rect, dst: Point) -> Option<Rect> {
    if src.origin() == dst {
        return None;
    }
    let (src, dst) = clip_copy(canvas.bounds(), src, dst)?;
    let dst_rect = src.at(dst);
    if src.intersect(dst_rect).is_some() {
        let saved = canvas.save_region(src)?;
        canvas.restore_region(&saved, dst)
    } else {
        canvas.blit_disjoint(src, dst);
        Some(dst_rect)
    }
}

/// Like [`copy_area`], but source pixels whose raw value equals `key` are skipped.
pub fn copy_area_keyed(canvas: &mut Canvas, src: Rect, dst: Point, key: u32) -> Option<Rect> {
    let (src, dst) = clip_copy(canvas.bounds(), src, dst)?;
    let dst_rect = src.at(dst);
    let saved = if src.intersect(dst_rect).is_some() {
        Some(canvas.save_region(src)?)
    } else {
        None
    };
    for y in 0..src.h as usize {
        for x in 0..src.w as usize {
            let raw = match &saved {
                Some(region) => region.raw_at(x, y),
                None => canvas.raw_at(src.x as usize + x, src.y as usize + y),
            };
            if raw != key {
                canvas.set_at(dst.x as usize + x, dst.y as usize + y, raw);
            }
        }
    }
    Some(dst_rect)
}

#[cfg(test)]
#[path = "../../tests/unit/draw/copy.rs"]
mod tests;
