use std::f64::consts::{PI, TAU};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn zero_offset_points_lie_on_the_circle_at_even_angles() {
    let mut rng = StdRng::seed_from_u64(1);
    let c = Point::new(50.0, 40.0);
    let pts = imperfect_circle_points(&mut rng, c, 25.0, 8, 0.0, 0.0, TAU);
    assert_eq!(pts.len(), 8);
    for (i, p) in pts.iter().enumerate() {
        assert!((p.distance(c) - 25.0).abs() < 1e-9);
        let expected = i as f64 * TAU / 8.0;
        let actual = (p.y - c.y).atan2(p.x - c.x).rem_euclid(TAU);
        let diff = (actual - expected).rem_euclid(TAU);
        assert!(diff < 1e-9 || (TAU - diff) < 1e-9, "point {i}: {actual} vs {expected}");
    }
}

#[test]
fn degree_and_radian_forms_agree() {
    let c = Point::new(0.0, 0.0);
    let mut a = StdRng::seed_from_u64(9);
    let mut b = StdRng::seed_from_u64(9);
    let rad = imperfect_circle_points(&mut a, c, 10.0, 6, 1.5, PI / 4.0, PI);
    let deg = imperfect_circle_points_deg(&mut b, c, 10.0, 6, 1.5, 45.0, 180.0);
    assert_eq!(rad.len(), deg.len());
    for (p, q) in rad.iter().zip(&deg) {
        assert!(p.distance(*q) < 1e-9);
    }
}

#[test]
fn offsets_are_bounded_per_axis() {
    let mut rng = StdRng::seed_from_u64(2);
    let c = Point::new(0.0, 0.0);
    let pts = imperfect_circle_points(&mut rng, c, 30.0, 200, 2.0, 0.0, TAU);
    for (i, p) in pts.iter().enumerate() {
        let ideal = c + Vec2::from_angle(i as f64 * TAU / 200.0) * 30.0;
        assert!((p.x - ideal.x).abs() <= 2.0 + 1e-9);
        assert!((p.y - ideal.y).abs() <= 2.0 + 1e-9);
    }
}

#[test]
fn invalid_input_yields_nothing() {
    let mut rng = StdRng::seed_from_u64(3);
    let c = Point::new(0.0, 0.0);
    assert!(imperfect_circle_points(&mut rng, c, 0.0, 5, 0.0, 0.0, TAU).is_empty());
    assert!(imperfect_circle_points(&mut rng, c, -3.0, 5, 0.0, 0.0, TAU).is_empty());
    assert!(imperfect_circle_points(&mut rng, c, 3.0, 0, 0.0, 0.0, TAU).is_empty());
    assert!(imperfect_circle_points(&mut rng, c, 3.0, 5, -1.0, 0.0, TAU).is_empty());
}

#[test]
fn infinite_offset_yields_nothing() {
    let mut rng = StdRng::seed_from_u64(4);
    let c = Point::new(0.0, 0.0);
    assert!(imperfect_circle_points(&mut rng, c, 3.0, 5, f64::INFINITY, 0.0, TAU).is_empty());
}
