use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn right_triangle_covers_pixel_centers() {
    let mut m = Mask::new(4, 4);
    m.fill_triangle(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    // centers with x + y <= 3, hypotenuse centers included
    assert_eq!(m.count(), 10);
    assert!(m.get(0, 3));
    assert!(m.get(3, 0));
    assert!(!m.get(3, 1));
}

#[test]
fn winding_does_not_change_coverage() {
    let mut cw = Mask::new(8, 8);
    let mut ccw = Mask::new(8, 8);
    cw.fill_triangle(p(1.0, 1.0), p(7.0, 2.0), p(3.0, 7.5));
    ccw.fill_triangle(p(1.0, 1.0), p(3.0, 7.5), p(7.0, 2.0));
    assert_eq!(cw, ccw);
    assert!(cw.count() > 0);
}

#[test]
fn shared_edge_is_covered_exactly_once() {
    let mut upper = Mask::new(4, 4);
    let mut lower = Mask::new(4, 4);
    upper.fill_triangle(p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0));
    lower.fill_triangle(p(0.0, 0.0), p(4.0, 4.0), p(0.0, 4.0));
    for y in 0..4 {
        for x in 0..4 {
            assert!(
                upper.get(x, y) ^ lower.get(x, y),
                "pixel ({x},{y}) must belong to exactly one triangle"
            );
        }
    }
}

#[test]
fn degenerate_and_offscreen_triangles_are_ignored() {
    let mut m = Mask::new(4, 4);
    m.fill_triangle(p(0.0, 0.0), p(2.0, 2.0), p(4.0, 4.0));
    m.fill_triangle(p(-10.0, -10.0), p(-5.0, -10.0), p(-5.0, -5.0));
    m.fill_triangle(p(0.0, 0.0), p(f64::NAN, 1.0), p(1.0, 1.0));
    assert_eq!(m.count(), 0);
}

#[test]
fn oversized_triangle_clips_to_mask() {
    let mut m = Mask::new(5, 3);
    m.fill_triangle(p(-100.0, -100.0), p(100.0, -100.0), p(0.0, 100.0));
    assert_eq!(m.count(), 15);
}

#[test]
fn geometry_skips_bad_indices() {
    let v = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)];
    let mut m = Mask::new(4, 4);
    m.fill_geometry(&v, &[0, 1, 9, 0, 1, 2, 1]);
    assert_eq!(m.count(), 10);
}

#[test]
fn invert_and_union() {
    let mut a = Mask::new(2, 2);
    a.fill_triangle(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0));
    let covered = a.count();
    let mut b = a.clone();
    b.invert();
    assert_eq!(b.count(), 4 - covered);
    b.union_with(&a);
    assert_eq!(b.count(), 4);
    b.clear();
    assert_eq!(b.count(), 0);
}
