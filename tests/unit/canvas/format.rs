use super::*;

#[test]
fn rgb565_packs_high_bits() {
    let f = PixelFormat::Rgb565;
    assert_eq!(f.map_rgb(Rgb::new(255, 255, 255)), 0xffff);
    assert_eq!(f.map_rgb(Rgb::new(0xf8, 0, 0)), 0xf800);
    assert_eq!(f.map_rgb(Rgb::new(0, 0xfc, 0)), 0x07e0);
    assert_eq!(f.map_rgb(Rgb::new(0, 0, 0xf8)), 0x001f);
    assert_eq!(f.unmap_rgb(0xffff), Rgb::new(255, 255, 255));
}

#[test]
fn rgb565_ignores_low_bits() {
    let f = PixelFormat::Rgb565;
    assert_eq!(
        f.map_rgb(Rgb::new(0x87, 0x43, 0x0f)),
        f.map_rgb(Rgb::new(0x80, 0x40, 0x08))
    );
}

#[test]
fn xrgb_round_trips_exactly() {
    let f = PixelFormat::Xrgb8888;
    let c = Rgb::new(1, 2, 3);
    assert_eq!(f.map_rgb(c), 0x0001_0203);
    assert_eq!(f.unmap_rgb(0x0001_0203), c);
}

#[test]
fn read_write_match_pixel_width() {
    for f in [
        PixelFormat::Indexed8,
        PixelFormat::Rgb565,
        PixelFormat::Rgb888,
        PixelFormat::Xrgb8888,
    ] {
        let n = f.bytes_per_pixel();
        let mut buf = vec![0xaau8; 5];
        let raw = 0x0012_3456 & ((1u64 << (n * 8)) - 1) as u32;
        f.write(&mut buf, raw);
        assert_eq!(f.read(&buf), raw, "{f:?}");
        assert!(buf[n..].iter().all(|&b| b == 0xaa), "{f:?} wrote past its width");
    }
}

#[test]
fn formats_deserialize_lowercase() {
    let f: PixelFormat = serde_json::from_str("\"rgb565\"").unwrap();
    assert_eq!(f, PixelFormat::Rgb565);
    assert!(PixelFormat::Indexed8.is_indexed());
    assert_eq!(PixelFormat::Rgb888.bits_per_pixel(), 24);
}
