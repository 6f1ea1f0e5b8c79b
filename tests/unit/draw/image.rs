use super::*;
use crate::canvas::format::PixelFormat;

fn table(base: u8) -> [Rgb; PALETTE_SIZE] {
    let mut t = [Rgb::default(); PALETTE_SIZE];
    for (i, c) in t.iter_mut().enumerate() {
        *c = Rgb::new(base, i as u8, 0);
    }
    t
}

#[test]
fn rejects_mismatched_pixel_count() {
    assert!(Image8::new(2, 2, vec![0; 3]).is_err());
    assert!(Image8::new(2, 2, vec![0; 4]).is_ok());
}

#[test]
fn indexed_canvas_copies_raw_indices_and_honors_sprite() {
    let img = Image8::new(3, 1, vec![4, 0, 9]).unwrap();
    let mut c = Canvas::new(4, 1, PixelFormat::Indexed8).unwrap();
    c.put_raw(2, 0, 77);
    let r = draw_image8(&mut c, &img, 1, 0, Some(0), &table(0)).unwrap();
    assert_eq!(r, Rect::new(1, 0, 3, 1));
    assert_eq!(c.get_raw(1, 0), Some(4));
    assert_eq!(c.get_raw(2, 0), Some(77), "sprite index is transparent");
    assert_eq!(c.get_raw(3, 0), Some(9));
}

#[test]
fn true_color_prefers_image_palette() {
    let colors = table(10);
    let plain = Image8::new(1, 1, vec![5]).unwrap();
    let own = plain.clone().with_palette(table(200));
    let mut c = Canvas::new(2, 1, PixelFormat::Xrgb8888).unwrap();

    draw_image8(&mut c, &plain, 0, 0, None, &colors);
    draw_image8(&mut c, &own, 1, 0, None, &colors);
    let f = PixelFormat::Xrgb8888;
    assert_eq!(c.get_raw(0, 0), Some(f.map_rgb(Rgb::new(10, 5, 0))));
    assert_eq!(c.get_raw(1, 0), Some(f.map_rgb(Rgb::new(200, 5, 0))));
}

#[test]
fn clipped_blit_reads_matching_image_pixels() {
    let img = Image8::new(3, 3, (1..=9).collect()).unwrap();
    let mut c = Canvas::new(2, 2, PixelFormat::Indexed8).unwrap();
    let r = draw_image8(&mut c, &img, -1, -1, None, &table(0)).unwrap();
    assert_eq!(r, Rect::new(0, 0, 2, 2));
    assert_eq!(c.get_raw(0, 0), Some(5));
    assert_eq!(c.get_raw(1, 1), Some(9));
    assert!(draw_image8(&mut c, &img, 5, 5, None, &table(0)).is_none());
}
