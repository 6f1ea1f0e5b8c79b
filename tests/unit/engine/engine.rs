use super::*;
use crate::render::headless::HeadlessBackend;

#[test]
fn new_engine_is_black_and_clean() {
    let e = Engine::new(EngineOpts::default().with_size(8, 4), HeadlessBackend::new()).unwrap();
    assert_eq!(e.canvas().width(), 8);
    assert_eq!(e.display().get(7, 3), Some([0, 0, 0, 255]));
    assert!(e.damage().is_empty());
    assert!(!e.palette().is_changed());
    assert_eq!(e.backend().present_count(), 0);
}

#[test]
fn zero_size_canvas_is_rejected() {
    let r = Engine::new(EngineOpts::default().with_size(0, 4), HeadlessBackend::new());
    assert!(r.is_err());
}

#[test]
fn damage_accumulates_as_union() {
    let mut e = Engine::new(EngineOpts::default().with_size(16, 16), HeadlessBackend::new()).unwrap();
    e.mark(Some(Rect::new(1, 1, 2, 2)));
    e.mark(None);
    e.mark(Some(Rect::new(5, 6, 1, 1)));
    assert_eq!(e.damage(), Rect::new(1, 1, 5, 6));
}
