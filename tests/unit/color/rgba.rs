use super::*;

const EPS: f64 = 1e-9;

fn samples() -> Vec<Color> {
    vec![
        make_color(255, 0, 0),
        make_color(12, 200, 99),
        make_color_rgba(30, 60, 250, 0.4),
        Color::rgba(0.33, 0.66, 0.01, 0.8),
        Color::BLACK,
        Color::WHITE,
        Color::NEUTRAL_GRAY,
    ]
}

#[test]
fn make_color_clamps_channels() {
    let c = make_color(-10, 300, 128);
    assert_eq!(c.to_rgba8(), [0, 255, 128, 255]);
    assert_eq!(c.a, 1.0);

    let c = make_color_rgba(1, 2, 3, 7.0);
    assert_eq!(c.a, 1.0);
}

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(color_from_hex("#FF0000"), Some(make_color(255, 0, 0)));
    assert_eq!(color_from_hex("00ff7f"), Some(make_color(0, 255, 127)));
}

#[test]
fn hex_rejects_bad_length_and_digits() {
    assert_eq!(color_from_hex("ZZZZZZ"), None);
    assert_eq!(color_from_hex("FFF"), None);
    assert_eq!(color_from_hex("#FF00000"), None);
    assert_eq!(color_from_hex(""), None);
    assert_eq!(color_from_hex("a€12"), None);
}

#[test]
fn complement_is_an_involution() {
    for c in samples() {
        let back = complement(complement(c));
        assert!(back.approx_eq(c, EPS), "{c:?} -> {back:?}");
    }
    assert_eq!(complement(make_color(255, 0, 0)).to_rgba8(), [0, 255, 255, 255]);
}

#[test]
fn complement_of_non_finite_is_black() {
    assert_eq!(complement(Color::rgba(f64::NAN, 0.0, 0.0, 1.0)), Color::BLACK);
}

#[test]
fn gray_tone_zero_is_identity_and_one_is_luminance() {
    for c in samples() {
        let same = gray_tone(c, 0.0).unwrap();
        assert!(same.approx_eq(c, EPS));

        let gray = gray_tone(c, 1.0).unwrap();
        let l = 0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b;
        assert!((gray.r - l).abs() < EPS);
        assert!((gray.g - l).abs() < EPS);
        assert!((gray.b - l).abs() < EPS);
        assert_eq!(gray.a, c.a);
    }
}

#[test]
fn gray_tone_clamps_strength() {
    let c = make_color(200, 10, 10);
    assert_eq!(gray_tone(c, 4.0), gray_tone(c, 1.0));
    assert_eq!(gray_tone(c, -1.0), gray_tone(c, 0.0));
    assert_eq!(gray_tone(Color::rgba(f64::INFINITY, 0.0, 0.0, 1.0), 0.5), None);
}

#[test]
fn adjust_lightness_identity_and_extremes() {
    for c in samples() {
        let same = adjust_lightness(c, 0.0).unwrap();
        assert!(same.approx_eq(c, 1e-6));
    }

    let white = adjust_lightness(Color::BLACK, 1.0).unwrap();
    assert!(white.approx_eq(Color::WHITE, 1e-6));

    let black = adjust_lightness(Color::WHITE, -1.0).unwrap();
    assert!(black.approx_eq(Color::BLACK, 1e-6));
}

#[test]
fn adjust_lightness_moves_fraction_of_remaining_distance() {
    let c = make_color(0, 0, 102); // brightness 0.4
    let lighter = adjust_lightness(c, 0.5).unwrap();
    let (_, _, v) = lighter.to_hsb().unwrap();
    assert!((v - 0.7).abs() < 1e-9);

    let darker = adjust_lightness(c, -0.5).unwrap();
    let (_, _, v) = darker.to_hsb().unwrap();
    assert!((v - 0.2).abs() < 1e-9);

    // Clamped to [-1, 1].
    assert_eq!(adjust_lightness(c, 3.0), adjust_lightness(c, 1.0));
}

#[test]
fn adjust_lightness_preserves_hue_saturation_and_alpha() {
    let c = make_color_rgba(200, 80, 40, 0.3);
    let (h0, s0, _) = c.to_hsb().unwrap();
    let out = adjust_lightness(c, -0.4).unwrap();
    let (h1, s1, _) = out.to_hsb().unwrap();
    assert!((h0 - h1).abs() < 1e-9);
    assert!((s0 - s1).abs() < 1e-9);
    assert_eq!(out.a, c.a);
}

#[test]
fn adjust_lightness_rejects_non_finite() {
    assert_eq!(adjust_lightness(Color::rgba(f64::NAN, 0.0, 0.0, 1.0), 0.2), None);
}

#[test]
fn hsb_roundtrip_for_primaries() {
    for c in [make_color(255, 0, 0), make_color(0, 255, 0), make_color(0, 0, 255)] {
        let (h, s, v) = c.to_hsb().unwrap();
        assert!(Color::from_hsb(h, s, v, 1.0).approx_eq(c, 1e-9));
    }
}
