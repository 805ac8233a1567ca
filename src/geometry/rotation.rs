use rand::Rng;

/// How a shape is rotated when drawn.
///
/// Resolve it once per shape with [`RotationSpec::resolve`]; keep the returned radians if a
/// dependent shape needs the same orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSpec {
    /// Axis-aligned.
    #[default]
    None,
    /// A fixed angle in degrees.
    Fixed {
        /// Angle in degrees.
        degrees: f64,
    },
    /// A uniform draw from `[min_deg, max_deg]` plus fixed offsets.
    Random {
        /// Lower bound of the draw, degrees.
        min_deg: f64,
        /// Upper bound of the draw, degrees.
        max_deg: f64,
        /// Added after the draw, degrees.
        offset_deg: f64,
        /// Added after the draw, radians.
        offset_rad: f64,
    },
}

impl RotationSpec {
    /// A fixed angle in degrees.
    pub fn fixed(degrees: f64) -> Self {
        Self::Fixed { degrees }
    }

    /// A symmetric random range `[-spread_deg, spread_deg]` with no offset.
    pub fn jitter(spread_deg: f64) -> Self {
        let s = spread_deg.abs();
        Self::Random {
            min_deg: -s,
            max_deg: s,
            offset_deg: 0.0,
            offset_rad: 0.0,
        }
    }

    /// A random range drawn around a previously resolved angle, in radians.
    pub fn around(base_rad: f64, min_deg: f64, max_deg: f64) -> Self {
        Self::Random {
            min_deg,
            max_deg,
            offset_deg: 0.0,
            offset_rad: base_rad,
        }
    }

    /// Evaluate to a single angle in radians.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Self::None => 0.0,
            Self::Fixed { degrees } => degrees.to_radians(),
            Self::Random {
                min_deg,
                max_deg,
                offset_deg,
                offset_rad,
            } => {
                let (lo, hi) = if min_deg <= max_deg {
                    (min_deg, max_deg)
                } else {
                    (max_deg, min_deg)
                };
                let drawn = if lo < hi { rng.gen_range(lo..=hi) } else { lo };
                drawn.to_radians() + offset_deg.to_radians() + offset_rad
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rotation.rs"]
mod tests;
