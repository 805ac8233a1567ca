use super::*;
use crate::foundation::core::Affine;
use crate::render::recording::RecordingCanvas;

#[test]
fn guard_restores_state_on_drop() {
    let mut c = RecordingCanvas::new(10, 10);
    {
        let mut g = StateGuard::new(&mut c);
        g.translate(Vec2::new(3.0, 4.0));
        g.rotate(1.0);
        g.set_global_alpha(0.25);
        g.set_blend_mode(BlendMode::Multiply);
        assert_eq!(g.state_depth(), 1);
    }
    assert_eq!(c.state_depth(), 0);
    assert!(c.is_pristine_state());
}

#[test]
fn guard_restores_on_early_return() {
    fn draw(c: &mut RecordingCanvas, bail: bool) -> Option<()> {
        let mut g = StateGuard::new(c);
        g.set_blend_mode(BlendMode::Screen);
        if bail {
            return None;
        }
        g.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        Some(())
    }

    let mut c = RecordingCanvas::new(10, 10);
    assert_eq!(draw(&mut c, true), None);
    assert!(c.is_pristine_state());
    assert_eq!(draw(&mut c, false), Some(()));
    assert!(c.is_pristine_state());
    assert_eq!(c.ops()[0].blend, BlendMode::Screen);
}

#[test]
fn nested_guards_unwind_in_order() {
    let mut c = RecordingCanvas::new(10, 10);
    let mut outer = StateGuard::new(&mut c);
    outer.set_global_alpha(0.5);
    {
        let mut inner = StateGuard::new(&mut *outer);
        inner.set_global_alpha(0.1);
        assert_eq!(inner.state_depth(), 2);
    }
    assert_eq!(outer.global_alpha(), 0.5);
    drop(outer);
    assert_eq!(c.global_alpha(), 1.0);
}

#[test]
fn clear_ignores_current_transform_and_alpha() {
    let mut c = RecordingCanvas::new(20, 10);
    c.translate(Vec2::new(5.0, 5.0));
    c.set_global_alpha(0.3);
    c.clear(Color::BLACK);

    let op = &c.ops()[0];
    assert_eq!(op.transform, Affine::IDENTITY);
    assert_eq!(op.alpha, 1.0);
    assert_eq!(c.global_alpha(), 0.3);
    assert_eq!(c.state_depth(), 0);
}

#[test]
fn unbalanced_restore_is_ignored_but_counted() {
    let mut c = RecordingCanvas::new(1, 1);
    c.restore();
    assert_eq!(c.state_depth(), 0);
    assert_eq!(c.unbalanced_restores(), 1);
}

#[test]
fn light_safe_modes_exclude_washouts() {
    let washing: Vec<_> = BlendMode::ALL
        .into_iter()
        .filter(|m| m.washes_out())
        .collect();
    assert_eq!(
        washing,
        vec![
            BlendMode::Darken,
            BlendMode::Lighten,
            BlendMode::ColorDodge,
            BlendMode::ColorBurn
        ]
    );
}
