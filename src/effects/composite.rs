use crate::foundation::core::Point;
use crate::foundation::error::{AgsError, AgsResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::backend::FrameRGBA;
use crate::render::raster::Mask;

/// Straight RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Linear mix from `a` (`t == 0`) to `b` (`t == 255`).
pub fn crossfade(a: Rgba8, b: Rgba8, t: u8) -> Rgba8 {
    let tt = u16::from(t);
    let it = 255u16 - tt;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let av = mul_div255(u16::from(a[i]), it);
        let bv = mul_div255(u16::from(b[i]), tt);
        out[i] = add_sat_u8(av, bv);
    }
    out
}

/// Mix `old` toward `new` by `alpha / 255`, writing the result into `display` at `at`.
pub fn crossfade_into(
    display: &mut FrameRGBA,
    at: Point,
    old: &FrameRGBA,
    new: &FrameRGBA,
    alpha: u8,
) -> AgsResult<()> {
    check_pair(old, new)?;
    for_each_pixel(display, at, old, new, |_, _| alpha);
    Ok(())
}

/// Show `new` where `revealed` is set and `old` elsewhere, writing into `display` at `at`.
pub fn reveal_into(
    display: &mut FrameRGBA,
    at: Point,
    old: &FrameRGBA,
    new: &FrameRGBA,
    revealed: &Mask,
) -> AgsResult<()> {
    check_pair(old, new)?;
    if revealed.width() != old.width || revealed.height() != old.height {
        return Err(AgsError::validation(
            "reveal_into expects a mask matching the snapshot size",
        ));
    }
    for_each_pixel(display, at, old, new, |x, y| {
        if revealed.get(x, y) { 255 } else { 0 }
    });
    Ok(())
}

fn check_pair(old: &FrameRGBA, new: &FrameRGBA) -> AgsResult<()> {
    if old.width != new.width || old.height != new.height {
        return Err(AgsError::validation(format!(
            "snapshot sizes differ: {}x{} vs {}x{}",
            old.width, old.height, new.width, new.height
        )));
    }
    Ok(())
}

fn for_each_pixel(
    display: &mut FrameRGBA,
    at: Point,
    old: &FrameRGBA,
    new: &FrameRGBA,
    mut weight: impl FnMut(u32, u32) -> u8,
) {
    for y in 0..old.height {
        for x in 0..old.width {
            let (dx, dy) = (at.x + x as i32, at.y + y as i32);
            let (Some(_), Some(a), Some(b)) = (
                display.get(dx, dy),
                old.get(x as i32, y as i32),
                new.get(x as i32, y as i32),
            ) else {
                continue;
            };
            // snapshots are opaque, so the mix replaces the display pixel
            display.put(dx, dy, crossfade(a, b, weight(x, y)));
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
