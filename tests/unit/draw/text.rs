use super::*;
use crate::canvas::format::PixelFormat;

/// 2x2 glyphs: `#` fully covered, `.` half covered with a faint corner, space has no bitmap.
struct Blocks;

impl GlyphSource for Blocks {
    fn glyph(&self, ch: char) -> Option<Glyph> {
        let coverage = match ch {
            '#' => vec![255; 4],
            '.' => vec![127, 128, 0, 255],
            ' ' => vec![0; 4],
            _ => return None,
        };
        Some(Glyph {
            width: 2,
            height: 2,
            left: 0,
            top: 0,
            advance: 3,
            coverage,
        })
    }
}

#[test]
fn solid_ink_thresholds_coverage() {
    let mut c = Canvas::new(8, 2, PixelFormat::Indexed8).unwrap();
    let r = draw_string(&mut c, &Blocks, 0, 0, "#.", TextInk::Solid(5));
    assert_eq!(r, Rect::new(0, 0, 5, 2));
    assert_eq!(c.get_raw(1, 1), Some(5));
    assert_eq!(c.get_raw(3, 0), Some(0), "coverage 127 stays unpainted");
    assert_eq!(c.get_raw(4, 0), Some(5));
    assert_eq!(c.get_raw(3, 1), Some(0));
    assert_eq!(c.get_raw(2, 0), Some(0), "advance gap");
}

#[test]
fn missing_glyphs_are_skipped_without_advancing() {
    let mut c = Canvas::new(8, 2, PixelFormat::Indexed8).unwrap();
    draw_string(&mut c, &Blocks, 0, 0, "x#", TextInk::Solid(1));
    assert_eq!(c.get_raw(0, 0), Some(1));
}

#[test]
fn blend_ink_mixes_by_coverage() {
    let mut c = Canvas::new(2, 2, PixelFormat::Xrgb8888).unwrap();
    let white = Rgb::new(255, 255, 255);
    draw_string(&mut c, &Blocks, 0, 0, ".", TextInk::Blend(white));
    let f = PixelFormat::Xrgb8888;
    assert_eq!(c.get_raw(0, 0), Some(f.map_rgb(Rgb::new(127, 127, 127))));
    assert_eq!(c.get_raw(1, 1), Some(f.map_rgb(white)));
    assert_eq!(c.get_raw(0, 1), Some(0));
}

#[test]
fn offscreen_string_reports_empty() {
    let mut c = Canvas::new(4, 4, PixelFormat::Indexed8).unwrap();
    let r = draw_string(&mut c, &Blocks, 10, 0, "##", TextInk::Solid(1));
    assert!(r.is_empty());
    let r = draw_string(&mut c, &Blocks, -3, 0, "##", TextInk::Solid(1));
    assert_eq!(r, Rect::new(0, 0, 2, 2));
}
