use super::*;
use kurbo::Point as KPoint;

const RED: Rgba8 = [255, 0, 0, 255];
const BLUE: Rgba8 = [0, 0, 255, 255];

#[test]
fn crossfade_into_replaces_display_pixels() {
    let mut display = FrameRGBA::filled(2, 1, [9, 200, 9, 255]);
    let old = FrameRGBA::filled(2, 1, RED);
    let new = FrameRGBA::filled(2, 1, BLUE);
    crossfade_into(&mut display, Point::new(0, 0), &old, &new, 128).unwrap();
    assert_eq!(display.get(0, 0), Some(crossfade(RED, BLUE, 128)));
    assert_eq!(display.get(1, 0), Some([127, 0, 128, 255]));
}

#[test]
fn crossfade_endpoints_are_exact() {
    assert_eq!(crossfade(RED, BLUE, 0), RED);
    assert_eq!(crossfade(RED, BLUE, 255), BLUE);
    assert_eq!(crossfade(RED, BLUE, 128), [127, 0, 128, 255]);
}

#[test]
fn crossfade_into_writes_at_offset() {
    let mut display = FrameRGBA::filled(4, 4, [9, 9, 9, 255]);
    let old = FrameRGBA::filled(2, 2, RED);
    let new = FrameRGBA::filled(2, 2, BLUE);
    crossfade_into(&mut display, Point::new(1, 2), &old, &new, 255).unwrap();
    assert_eq!(display.get(1, 2), Some(BLUE));
    assert_eq!(display.get(2, 3), Some(BLUE));
    assert_eq!(display.get(0, 2), Some([9, 9, 9, 255]));
    assert_eq!(display.get(1, 1), Some([9, 9, 9, 255]));
}

#[test]
fn crossfade_into_clips_at_display_edge() {
    let mut display = FrameRGBA::filled(2, 2, [0, 0, 0, 255]);
    let old = FrameRGBA::filled(3, 3, RED);
    let new = FrameRGBA::filled(3, 3, BLUE);
    crossfade_into(&mut display, Point::new(1, 1), &old, &new, 0).unwrap();
    assert_eq!(display.get(1, 1), Some(RED));
    assert_eq!(display.get(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn reveal_selects_per_pixel() {
    let mut display = FrameRGBA::new(2, 1);
    let old = FrameRGBA::filled(2, 1, RED);
    let new = FrameRGBA::filled(2, 1, BLUE);
    let mut mask = Mask::new(2, 1);
    // covers (1, 0) only
    mask.fill_triangle(KPoint::new(1.0, 0.0), KPoint::new(2.0, 0.0), KPoint::new(2.0, 1.0));
    mask.fill_triangle(KPoint::new(1.0, 0.0), KPoint::new(2.0, 1.0), KPoint::new(1.0, 1.0));
    assert_eq!(mask.count(), 1);

    reveal_into(&mut display, Point::new(0, 0), &old, &new, &mask).unwrap();
    assert_eq!(display.get(0, 0), Some(RED));
    assert_eq!(display.get(1, 0), Some(BLUE));
}

#[test]
fn mismatched_sizes_are_rejected() {
    let mut display = FrameRGBA::new(4, 4);
    let old = FrameRGBA::new(2, 2);
    let new = FrameRGBA::new(3, 2);
    assert!(crossfade_into(&mut display, Point::new(0, 0), &old, &new, 10).is_err());
    let mask = Mask::new(1, 1);
    assert!(reveal_into(&mut display, Point::new(0, 0), &old, &old, &mask).is_err());
}
