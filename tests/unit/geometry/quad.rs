use kurbo::Shape;

use super::*;

#[test]
fn no_taper_is_an_axis_aligned_rectangle() {
    let v = quad_vertices(40.0, 20.0, 0.5, TaperSide::None);
    assert_eq!(
        v,
        [
            Point::new(-20.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(20.0, -10.0),
            Point::new(-20.0, -10.0),
        ]
    );
    let area = quad_path(40.0, 20.0, 0.0, TaperSide::Top).area().abs();
    assert!((area - 800.0).abs() < 1e-9);
}

#[test]
fn top_taper_narrows_only_the_top_edge() {
    let [bl, br, tr, tl] = quad_vertices(40.0, 20.0, 0.5, TaperSide::Top);
    assert_eq!(br.x - bl.x, 40.0);
    assert_eq!(tr.x - tl.x, 20.0);
    assert_eq!(tl.y, -10.0);
}

#[test]
fn side_tapers_narrow_vertical_edges() {
    let [bl, _, _, tl] = quad_vertices(40.0, 20.0, 0.5, TaperSide::Left);
    assert_eq!(bl.y - tl.y, 10.0);
    let [_, br, tr, _] = quad_vertices(40.0, 20.0, 0.5, TaperSide::Right);
    assert_eq!(br.y - tr.y, 10.0);
    let [bl, br, _, _] = quad_vertices(40.0, 20.0, 0.25, TaperSide::Bottom);
    assert_eq!(br.x - bl.x, 30.0);
}

#[test]
fn taper_is_clamped_below_one() {
    let [_, _, tr, tl] = quad_vertices(100.0, 10.0, 3.0, TaperSide::Top);
    let top = tr.x - tl.x;
    assert!((top - 100.0 * (1.0 - MAX_TAPER)).abs() < 1e-9);
    assert!(top > 0.0);
    assert_eq!(clamp_taper(-1.0), 0.0);
    assert_eq!(clamp_taper(f64::NAN), 0.0);
}

#[test]
fn polygon_path_of_nothing_is_empty() {
    assert!(polygon_path(&[]).elements().is_empty());
}
