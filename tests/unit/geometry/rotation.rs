use std::f64::consts::PI;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn none_and_fixed_resolve_without_randomness() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(RotationSpec::None.resolve(&mut rng), 0.0);
    assert!((RotationSpec::fixed(180.0).resolve(&mut rng) - PI).abs() < 1e-12);
    assert!((RotationSpec::fixed(-90.0).resolve(&mut rng) + PI / 2.0).abs() < 1e-12);
}

#[test]
fn random_stays_in_range_plus_offsets() {
    let mut rng = StdRng::seed_from_u64(2);
    let spec = RotationSpec::Random {
        min_deg: -10.0,
        max_deg: 10.0,
        offset_deg: 90.0,
        offset_rad: 1.0,
    };
    for _ in 0..1_000 {
        let a = spec.resolve(&mut rng);
        let lo = 80f64.to_radians() + 1.0;
        let hi = 100f64.to_radians() + 1.0;
        assert!(a >= lo - 1e-12 && a <= hi + 1e-12, "{a}");
    }
}

#[test]
fn random_with_equal_or_swapped_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    let same = RotationSpec::Random {
        min_deg: 45.0,
        max_deg: 45.0,
        offset_deg: 0.0,
        offset_rad: 0.0,
    };
    assert!((same.resolve(&mut rng) - PI / 4.0).abs() < 1e-12);

    let swapped = RotationSpec::Random {
        min_deg: 20.0,
        max_deg: 10.0,
        offset_deg: 0.0,
        offset_rad: 0.0,
    };
    let a = swapped.resolve(&mut rng).to_degrees();
    assert!((10.0 - 1e-9..=20.0 + 1e-9).contains(&a));
}

#[test]
fn around_keeps_previous_angle_as_base() {
    let mut rng = StdRng::seed_from_u64(4);
    let a = RotationSpec::around(2.0, -1.0, 1.0).resolve(&mut rng);
    assert!((a - 2.0).abs() <= 1f64.to_radians() + 1e-12);
}
