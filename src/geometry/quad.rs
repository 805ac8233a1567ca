use crate::foundation::core::{BezPath, Point};

/// Upper bound for taper factors; a full taper would collapse an edge to a point.
pub const MAX_TAPER: f64 = 0.95;

/// Which edge of a centered, unrotated box gets narrowed.
///
/// Local space is y-down, so `Top` is the edge at `-height / 2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaperSide {
    /// Plain rectangle.
    #[default]
    None,
    /// Narrow the top edge.
    Top,
    /// Narrow the bottom edge.
    Bottom,
    /// Narrow the left edge.
    Left,
    /// Narrow the right edge.
    Right,
}

impl TaperSide {
    /// The four tapering sides.
    pub const EDGES: [TaperSide; 4] = [
        TaperSide::Top,
        TaperSide::Bottom,
        TaperSide::Left,
        TaperSide::Right,
    ];
}

/// Clamp a taper factor into `[0, MAX_TAPER]`.
pub fn clamp_taper(taper: f64) -> f64 {
    if taper.is_nan() {
        0.0
    } else {
        taper.clamp(0.0, MAX_TAPER)
    }
}

/// Vertices of a `width x height` box centered on the origin, with one edge narrowed by
/// `taper * edge_length`.
///
/// Order is bottom-left, bottom-right, top-right, top-left.
pub fn quad_vertices(width: f64, height: f64, taper: f64, side: TaperSide) -> [Point; 4] {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let t = clamp_taper(taper);

    let mut bl = Point::new(-hw, hh);
    let mut br = Point::new(hw, hh);
    let mut tr = Point::new(hw, -hh);
    let mut tl = Point::new(-hw, -hh);

    // Inset each end of the chosen edge by half the removed span.
    let dx = hw * t;
    let dy = hh * t;
    match side {
        TaperSide::None => {}
        TaperSide::Top => {
            tl.x += dx;
            tr.x -= dx;
        }
        TaperSide::Bottom => {
            bl.x += dx;
            br.x -= dx;
        }
        TaperSide::Left => {
            tl.y += dy;
            bl.y -= dy;
        }
        TaperSide::Right => {
            tr.y += dy;
            br.y -= dy;
        }
    }
    [bl, br, tr, tl]
}

/// Closed polygon through the given points.
pub fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    path
}

/// Closed path for [`quad_vertices`].
pub fn quad_path(width: f64, height: f64, taper: f64, side: TaperSide) -> BezPath {
    polygon_path(&quad_vertices(width, height, taper, side))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/quad.rs"]
mod tests;
