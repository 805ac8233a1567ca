use super::*;

#[test]
fn clamp_unit_handles_out_of_range_and_nan() {
    assert_eq!(clamp_unit(-0.5), 0.0);
    assert_eq!(clamp_unit(1.5), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
    assert_eq!(clamp_unit(f64::NAN), 0.0);
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = [64u8, 32, 0, 128, 10, 10, 10, 0, 255, 255, 255, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[255, 255, 255, 255]);
}
