use std::time::Instant;

use crate::canvas::format::PixelFormat;
use crate::engine::Engine;
use crate::engine::opts::EngineOpts;
use crate::foundation::core::Rgb;
use crate::render::headless::HeadlessBackend;

fn engine(backend: HeadlessBackend) -> Engine<HeadlessBackend> {
    let opts = EngineOpts::default()
        .with_size(8, 8)
        .with_format(PixelFormat::Xrgb8888)
        .with_vsync_fallback_ms(5);
    Engine::new(opts, backend).unwrap()
}

#[test]
fn present_without_damage_is_noop() {
    let mut e = engine(HeadlessBackend::new());
    e.present();
    assert_eq!(e.backend().present_count(), 0);

    e.fill_rect_rgb(0, 0, 1, 1, Rgb::new(1, 2, 3));
    e.present();
    e.present();
    assert_eq!(e.backend().present_count(), 1);
    assert_eq!(e.display().get(0, 0), Some([1, 2, 3, 255]));
    assert!(e.damage().is_empty());
}

#[test]
fn invalidate_forces_one_transfer() {
    let mut e = engine(HeadlessBackend::new());
    e.invalidate();
    e.present();
    e.present();
    assert_eq!(e.backend().present_count(), 1);
}

#[test]
fn pace_presents_then_sleeps() {
    let mut e = engine(HeadlessBackend::new());
    e.fill_rect_rgb(0, 0, 2, 2, Rgb::new(9, 9, 9));
    let t0 = Instant::now();
    e.pace(10);
    assert!(t0.elapsed().as_millis() >= 10);
    assert_eq!(e.backend().present_count(), 1);
}

#[test]
fn vsync_pace_falls_back_to_fixed_sleep() {
    let mut e = engine(HeadlessBackend::new());
    let t0 = Instant::now();
    e.vsync_pace();
    assert!(t0.elapsed().as_millis() >= 5);

    let mut v = engine(HeadlessBackend::new().with_vsync(true));
    v.invalidate();
    v.vsync_pace();
    assert_eq!(v.backend().present_count(), 1);
}

#[test]
fn ticks_are_monotonic() {
    let e = engine(HeadlessBackend::new());
    let a = e.ticks();
    std::thread::sleep(std::time::Duration::from_millis(3));
    assert!(e.ticks() >= a + 3);
}
