use super::*;
use crate::canvas::format::PixelFormat;

fn canvas(w: u32, h: u32, format: PixelFormat, fill: u32) -> Canvas {
    let mut c = Canvas::new(w, h, format).unwrap();
    c.fill_rect_raw(c.bounds(), fill);
    c
}

#[test]
fn uniform_canvas_repaints_everything() {
    for format in [PixelFormat::Indexed8, PixelFormat::Rgb565, PixelFormat::Xrgb8888] {
        let mut c = canvas(9, 7, format, 3);
        assert_eq!(flood_fill(&mut c, 4, 4, 8), c.bounds(), "{format:?}");
        for y in 0..7 {
            for x in 0..9 {
                assert_eq!(c.get_raw(x, y), Some(8));
            }
        }
    }
}

#[test]
fn region_stops_at_boundary() {
    let mut c = canvas(8, 8, PixelFormat::Indexed8, 0);
    // vertical wall at x = 3
    c.fill_rect_raw(Rect::new(3, 0, 1, 8), 1);
    let r = flood_fill(&mut c, 0, 0, 2);
    assert_eq!(r, Rect::new(0, 0, 3, 8));
    assert_eq!(c.get_raw(3, 4), Some(1));
    assert_eq!(c.get_raw(4, 4), Some(0));
}

#[test]
fn fill_is_four_connected() {
    let mut c = canvas(3, 3, PixelFormat::Xrgb8888, 0);
    // diagonal wall; the corners only touch diagonally
    c.put_raw(1, 0, 5);
    c.put_raw(0, 1, 5);
    let r = flood_fill(&mut c, 0, 0, 9);
    assert_eq!(r, Rect::new(0, 0, 1, 1));
    assert_eq!(c.get_raw(1, 1), Some(0));
}

#[test]
fn fills_around_concave_shapes() {
    let mut c = canvas(7, 5, PixelFormat::Rgb565, 0);
    // U shape: pocket at (2..5, 1..4) opened at the top row only via x = 3
    c.fill_rect_raw(Rect::new(1, 1, 5, 1), 4);
    c.fill_rect_raw(Rect::new(1, 1, 1, 4), 4);
    c.fill_rect_raw(Rect::new(5, 1, 1, 4), 4);
    c.put_raw(3, 1, 0);
    flood_fill(&mut c, 0, 0, 7);
    assert_eq!(c.get_raw(3, 3), Some(7), "pocket reached through the gap");
    assert_eq!(c.get_raw(3, 4), Some(7));
    assert_eq!(c.get_raw(1, 2), Some(4));
}

#[test]
fn seed_outside_canvas_is_noop() {
    let mut c = canvas(4, 4, PixelFormat::Indexed8, 0);
    let before = c.clone();
    assert!(flood_fill(&mut c, -1, 0, 3).is_empty());
    assert!(flood_fill(&mut c, 0, 4, 3).is_empty());
    assert_eq!(c, before);
}

#[test]
fn same_color_is_noop() {
    let mut c = canvas(4, 4, PixelFormat::Indexed8, 6);
    let before = c.clone();
    assert!(flood_fill(&mut c, 1, 1, 6).is_empty());
    assert_eq!(c, before);
}

#[test]
fn packed_24_bit_layout_is_unsupported() {
    let mut c = canvas(4, 4, PixelFormat::Rgb888, 1);
    let before = c.clone();
    assert!(flood_fill(&mut c, 1, 1, 2).is_empty());
    assert_eq!(c, before);
}

#[test]
fn compares_full_word_width() {
    let mut c = canvas(3, 1, PixelFormat::Xrgb8888, 0x0011_2233);
    // differs only in the high byte
    c.put_raw(1, 0, 0x0111_2233);
    let r = flood_fill(&mut c, 0, 0, 0);
    assert_eq!(r, Rect::new(0, 0, 1, 1));
    assert_eq!(c.get_raw(2, 0), Some(0x0011_2233));
}
