use rand::Rng;

use crate::foundation::core::{Point, Vec2};

/// Points near a circular arc.
///
/// Point `i` sits at the ideal angle `start_rad + i * (arc_rad / count)` on the true circle and
/// is then nudged by independent uniform offsets in `[-max_offset, max_offset]` on each axis.
/// Invalid input (non-positive radius, zero count, negative or non-finite offset) yields an
/// empty vector.
pub fn imperfect_circle_points<R: Rng + ?Sized>(
    rng: &mut R,
    center: Point,
    radius: f64,
    count: usize,
    max_offset: f64,
    start_rad: f64,
    arc_rad: f64,
) -> Vec<Point> {
    if !(radius.is_finite() && radius > 0.0)
        || count == 0
        || !max_offset.is_finite()
        || max_offset < 0.0
    {
        tracing::warn!(radius, count, max_offset, "invalid imperfect circle request");
        return Vec::new();
    }

    let step = arc_rad / count as f64;
    let jitter = |rng: &mut R| -> f64 {
        if max_offset > 0.0 {
            rng.gen_range(-max_offset..=max_offset)
        } else {
            0.0
        }
    };

    (0..count)
        .map(|i| {
            let angle = start_rad + i as f64 * step;
            let ideal = center + Vec2::from_angle(angle) * radius;
            let dx = jitter(rng);
            let dy = jitter(rng);
            ideal + Vec2::new(dx, dy)
        })
        .collect()
}

/// Degree-based form of [`imperfect_circle_points`].
pub fn imperfect_circle_points_deg<R: Rng + ?Sized>(
    rng: &mut R,
    center: Point,
    radius: f64,
    count: usize,
    max_offset: f64,
    start_deg: f64,
    arc_deg: f64,
) -> Vec<Point> {
    imperfect_circle_points(
        rng,
        center,
        radius,
        count,
        max_offset,
        start_deg.to_radians(),
        arc_deg.to_radians(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/circle.rs"]
mod tests;
