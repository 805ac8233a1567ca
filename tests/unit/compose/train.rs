use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::color::palette::curated_palettes;
use crate::foundation::core::Point;
use crate::render::recording::{PaintKind, RecordingCanvas};

fn ring(radius: f64, arc_deg: f64, crisp: bool) -> Ring {
    Ring {
        center: Point::new(100.0, 100.0),
        radius,
        start_deg: 0.0,
        arc_deg,
        crisp,
    }
}

#[test]
fn point_count_scales_with_arc_length_and_has_a_floor() {
    let full = train_point_count(&ring(50.0, 360.0, true), 4.0, 1.0);
    assert_eq!(full, (2.0 * std::f64::consts::PI * 50.0 / 4.0).floor() as usize);

    let half = train_point_count(&ring(50.0, 180.0, true), 4.0, 1.0);
    assert!(half * 2 <= full + 1 && half * 2 >= full - 1);

    assert_eq!(train_point_count(&ring(5.0, 10.0, true), 4.0, 1.15), MIN_TRAIN_POINTS);
    assert_eq!(train_point_count(&ring(50.0, 360.0, true), 0.0, 1.15), MIN_TRAIN_POINTS);
}

#[test]
fn taper_grows_with_length_over_radius_and_is_capped() {
    assert!((radial_taper(10.0, 100.0, 2.5, 0.85) - 0.25).abs() < 1e-12);
    assert_eq!(radial_taper(50.0, 100.0, 2.5, 0.85), 0.85);
    assert!(radial_taper(10.0, 50.0, 2.5, 0.85) > radial_taper(10.0, 100.0, 2.5, 0.85));
    assert_eq!(radial_taper(10.0, 0.0, 2.5, 0.85), 0.0);
}

#[test]
fn crisp_train_places_quad_and_accent_per_point_on_the_circle() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut canvas = RecordingCanvas::new(200, 200);
    let palette = &curated_palettes()[2];
    let opts = TrainOpts::default().with_stroke(0.0);
    let r = ring(50.0, 360.0, true);

    let placed = draw_radial_train(&mut canvas, &mut rng, palette, &r, &opts);

    assert_eq!(placed, train_point_count(&r, opts.width.1 * 200.0, opts.gap_factor));
    let ops = canvas.ops();
    assert_eq!(ops.len(), placed * 2);
    assert!(ops.iter().all(|op| op.kind == PaintKind::Fill));

    for pair in ops.chunks(2) {
        let origin = pair[0].transform * Point::ORIGIN;
        let d = (origin - r.center).hypot();
        assert!((d - r.radius).abs() < 1e-6, "shape center off circle by {}", d - r.radius);
    }
    assert!(canvas.is_pristine_state());
}

#[test]
fn accent_is_complement_of_its_shape() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut canvas = RecordingCanvas::new(200, 200);
    let opts = TrainOpts::default().with_stroke(0.0);

    let palette = &curated_palettes()[0];
    draw_radial_train(&mut canvas, &mut rng, palette, &ring(60.0, 90.0, false), &opts);

    for pair in canvas.ops().chunks(2) {
        let quad = pair[0].color;
        let accent = pair[1].color;
        assert!(accent.approx_eq(complement(quad).with_alpha(1.0), 1e-9));
    }
}

#[test]
fn empty_palette_places_nothing() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut canvas = RecordingCanvas::new(100, 100);
    let empty = Palette::new("empty", vec![]);

    let r = ring(30.0, 360.0, true);
    let placed = draw_radial_train(&mut canvas, &mut rng, &empty, &r, &TrainOpts::default());

    assert_eq!(placed, 0);
    assert!(canvas.ops().is_empty());
    assert!(canvas.is_pristine_state());
}

#[test]
fn rings_draw_several_trains_and_restore_state() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut canvas = RecordingCanvas::new(160, 120);
    let opts = RingsOpts::default();

    let placed = draw_rings(&mut canvas, &mut rng, &curated_palettes()[3], &opts);

    assert!(placed >= opts.count.0 * MIN_TRAIN_POINTS);
    assert!(canvas.ops().len() >= placed * 2);
    assert!(canvas.is_pristine_state());
}

#[test]
fn single_train_draws_something() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut canvas = RecordingCanvas::new(160, 160);

    let palette = &curated_palettes()[4];
    let placed = draw_single_train(&mut canvas, &mut rng, palette, &TrainOpts::default());

    assert!(placed >= MIN_TRAIN_POINTS);
    assert!(canvas.is_pristine_state());
}
