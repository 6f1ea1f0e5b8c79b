use super::*;

fn numbered(w: u32, h: u32) -> FrameRGBA {
    let mut f = FrameRGBA::new(w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            f.put(x, y, [x as u8, y as u8, 0, 255]);
        }
    }
    f
}

#[test]
fn crop_clips_and_copies_rows() {
    let f = numbered(4, 3);
    let c = f.crop(Rect::new(2, 1, 5, 5)).unwrap();
    assert_eq!((c.width, c.height), (2, 2));
    assert_eq!(c.get(0, 0), Some([2, 1, 0, 255]));
    assert_eq!(c.get(1, 1), Some([3, 2, 0, 255]));
    assert!(f.crop(Rect::new(4, 0, 1, 1)).is_none());
}

#[test]
fn blit_clips_negative_origin() {
    let mut dst = FrameRGBA::filled(3, 3, [9, 9, 9, 255]);
    let src = numbered(2, 2);
    dst.blit(&src, Point::new(-1, 2));
    assert_eq!(dst.get(0, 2), Some([1, 0, 0, 255]));
    assert_eq!(dst.get(1, 2), Some([9, 9, 9, 255]));
    assert_eq!(dst.get(0, 1), Some([9, 9, 9, 255]));
}

#[test]
fn get_put_outside_are_inert() {
    let mut f = FrameRGBA::new(2, 2);
    f.put(-1, 0, [1, 1, 1, 1]);
    f.put(2, 0, [1, 1, 1, 1]);
    assert!(f.data.iter().all(|&b| b == 0));
    assert_eq!(f.get(0, 2), None);
}

#[test]
fn polygon_masks_need_both_capabilities() {
    assert!(Capabilities::full().supports_polygon_masks());
    assert!(!Capabilities::none().supports_polygon_masks());
    let partial = Capabilities {
        render_target: true,
        textured_geometry: false,
    };
    assert!(!partial.supports_polygon_masks());
}
