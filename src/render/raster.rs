//! Software triangle rasterizer used to build transition masks.
//!
//! Coverage is sampled at pixel centers. Pixels exactly on an edge are assigned by a fixed edge
//! rule (an edge and its reverse never both claim a pixel), so triangles sharing an edge cover
//! every pixel along it exactly once.

use kurbo::Point;

/// Boolean coverage mask with one entry per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Empty mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Mask width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coverage at `(x, y)`; outside the mask is uncovered.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Number of covered pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Clear every pixel.
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Flip every pixel.
    pub fn invert(&mut self) {
        for b in &mut self.bits {
            *b = !*b;
        }
    }

    /// Cover every pixel covered by `other`. Masks of different size are ignored.
    pub fn union_with(&mut self, other: &Mask) {
        if other.width != self.width || other.height != self.height {
            return;
        }
        for (d, s) in self.bits.iter_mut().zip(&other.bits) {
            *d |= *s;
        }
    }

    /// Rasterize indexed triangle geometry. Indices are consumed in triples; a trailing partial
    /// triple and out-of-range indices are ignored.
    pub fn fill_geometry(&mut self, vertices: &[Point], indices: &[usize]) {
        for tri in indices.chunks_exact(3) {
            let (Some(&a), Some(&b), Some(&c)) =
                (vertices.get(tri[0]), vertices.get(tri[1]), vertices.get(tri[2]))
            else {
                continue;
            };
            self.fill_triangle(a, b, c);
        }
    }

    /// Rasterize one triangle of either winding.
    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point) {
        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return;
        }
        let (b, c) = if area < 0.0 { (c, b) } else { (b, c) };

        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0);
        let max_x = a.x.max(b.x).max(c.x).ceil().min(w - 1.0);
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0);
        let max_y = a.y.max(b.y).max(c.y).ceil().min(h - 1.0);
        if max_x < min_x || max_y < min_y {
            return;
        }

        let edges = [(a, b), (b, c), (c, a)];
        for y in (min_y as u32)..=(max_y as u32) {
            let py = f64::from(y) + 0.5;
            for x in (min_x as u32)..=(max_x as u32) {
                let p = Point::new(f64::from(x) + 0.5, py);
                let inside = edges.iter().all(|&(p0, p1)| {
                    let e = edge(p0, p1, p);
                    e > 0.0 || (e == 0.0 && claims_boundary(p0, p1))
                });
                if inside {
                    self.bits[(y as usize) * (self.width as usize) + x as usize] = true;
                }
            }
        }
    }
}

fn edge(p0: Point, p1: Point, p: Point) -> f64 {
    (p1.x - p0.x) * (p.y - p0.y) - (p1.y - p0.y) * (p.x - p0.x)
}

fn claims_boundary(p0: Point, p1: Point) -> bool {
    let dy = p1.y - p0.y;
    dy > 0.0 || (dy == 0.0 && p1.x < p0.x)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
