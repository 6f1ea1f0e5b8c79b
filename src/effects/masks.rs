//! Reveal masks for the geometric transitions.
//!
//! Every mask marks where "new" shows through at a given step. Masks are built in the
//! coordinate space of the transition rectangle, centered at `(w / 2, h / 2)`.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4, PI};

use kurbo::{Affine, Point};
use smallvec::SmallVec;

use crate::render::raster::Mask;

/// Unit star outline plus its triangle fan.
#[derive(Clone, Copy, Debug)]
pub struct StarShape {
    vertices: &'static [(f64, f64)],
    indices: &'static [usize],
    /// Inscribed radius of the star's solid core at unit scale.
    apothem: f64,
}

/// Five-pointed star: tips at even indices, inner corners at odd indices.
pub const PENTAGRAM: StarShape = StarShape {
    vertices: &[
        (1.5, 0.0),
        (0.4635, 0.3368),
        (0.4635, 1.4266),
        (-0.1771, 0.5449),
        (-1.2135, 0.8817),
        (-0.5729, 0.0),
        (-1.2135, -0.8817),
        (-0.1771, -0.5449),
        (0.4635, -1.4266),
        (0.4635, -0.3368),
    ],
    indices: &[0, 3, 7, 2, 5, 9, 4, 7, 1, 6, 9, 3, 8, 1, 5],
    apothem: 0.4635,
};

/// Six-pointed star as two overlapping triangles.
pub const HEXAGRAM: StarShape = StarShape {
    vertices: &[
        (0.0, -1.0),
        (-0.866, 0.5),
        (0.866, 0.5),
        (-0.866, -0.5),
        (0.0, 1.0),
        (0.866, -0.5),
    ],
    indices: &[0, 1, 2, 3, 4, 5],
    apothem: 0.5,
};

/// Which way a star transition runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarMotion {
    /// A growing hole shows "new".
    InOut,
    /// "Old" survives inside a shrinking star.
    OutIn,
}

/// Mask of a single star frame at progress `t` in `[0, 1]`.
///
/// At scale 1 the star's solid core covers the rectangle's half-diagonal, so an in-out star at
/// `t = 1` (and an out-in star at `t = 0`) covers the whole rectangle. Rotation sweeps `0..π`.
pub fn star_frame(shape: &StarShape, motion: StarMotion, width: u32, height: u32, t: f64) -> Mask {
    let t = t.clamp(0.0, 1.0);
    let (cx, cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    // not `max(w, h)`: the star core must reach every corner so the last frame is exactly "new"
    let covering = cx.hypot(cy) / shape.apothem;
    let scale = match motion {
        StarMotion::InOut => t,
        StarMotion::OutIn => 1.0 - t,
    } * covering;

    let mut mask = Mask::new(width, height);
    if scale > 0.0 {
        let xf = Affine::translate((cx, cy)) * Affine::rotate(PI * t) * Affine::scale(scale);
        let points: SmallVec<[Point; 16]> = shape
            .vertices
            .iter()
            .map(|&(x, y)| xf * Point::new(x, y))
            .collect();
        mask.fill_geometry(&points, shape.indices);
    }
    if motion == StarMotion::OutIn {
        mask.invert();
    }
    mask
}

/// Blade layout of a windmill transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blades {
    /// Four blades starting at up, right, down and left; each sweeps a quarter turn.
    Four,
    /// Two blades starting at left and right; each sweeps a half turn.
    Two,
    /// One blade starting at left; it sweeps a full turn.
    One,
}

impl Blades {
    /// Starting octant of each blade, counted clockwise from up.
    fn starts(self) -> &'static [u32] {
        match self {
            Blades::Four => &[0, 2, 4, 6],
            Blades::Two => &[6, 2],
            Blades::One => &[6],
        }
    }

    /// Octants one blade sweeps over the whole transition.
    fn sweep(self) -> u32 {
        match self {
            Blades::Four => 2,
            Blades::Two => 4,
            Blades::One => 8,
        }
    }
}

/// Octant boundary directions, clockwise from up (y grows downward).
const OCTANTS: [(f64, f64); 8] = [
    (0.0, -1.0),
    (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (1.0, 0.0),
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (0.0, 1.0),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (-1.0, 0.0),
    (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// Mask of a windmill at `step` of `max_step`.
///
/// Each blade is a triangle fan anchored at the center through every octant boundary it has
/// crossed, closed by the partial wedge up to the current angle. Fans reach past the rectangle
/// corners, so a full sweep covers everything.
pub fn windmill_frame(blades: Blades, width: u32, height: u32, step: u32, max_step: u32) -> Mask {
    let mut mask = Mask::new(width, height);
    if max_step == 0 {
        return mask;
    }
    let step = step.min(max_step);
    let (cx, cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let reach = 2.0 * cx.hypot(cy) + 2.0;
    let center = Point::new(cx, cy);

    let swept = blades.sweep() * step;
    let (whole, frac) = (swept / max_step, swept % max_step);

    for &start in blades.starts() {
        let mut fan: SmallVec<[Point; 16]> = SmallVec::new();
        fan.push(center);
        for j in 0..=whole {
            let (dx, dy) = OCTANTS[((start + j) % 8) as usize];
            fan.push(Point::new(cx + reach * dx, cy + reach * dy));
        }
        if frac > 0 {
            let octant = f64::from(start + whole) + f64::from(frac) / f64::from(max_step);
            let a = octant * FRAC_PI_4;
            fan.push(Point::new(cx + reach * a.sin(), cy - reach * a.cos()));
        }
        let indices: SmallVec<[usize; 32]> = (1..fan.len().saturating_sub(1))
            .flat_map(|m| [0, m, m + 1])
            .collect();
        mask.fill_geometry(&fan, &indices);
    }
    mask
}

#[cfg(test)]
#[path = "../../tests/unit/effects/masks.rs"]
mod tests;
