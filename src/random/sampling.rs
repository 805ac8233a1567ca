use rand::Rng;

/// Default base of the bias power curve.
pub const DEFAULT_BIAS_STRENGTH: f64 = 3.0;
/// Smallest accepted bias strength; anything lower makes the curve nearly flat.
pub const MIN_BIAS_STRENGTH: f64 = 1.1;

/// Draw from `[low, high]` skewed toward `high` (`bias > 0`) or `low` (`bias < 0`).
///
/// Uses [`DEFAULT_BIAS_STRENGTH`]. See [`biased_uniform_with`].
pub fn biased_uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64, bias: f64) -> f64 {
    biased_uniform_with(rng, low, high, bias, DEFAULT_BIAS_STRENGTH)
}

/// Draw `r` uniformly in `[0, 1)` and return `low + r^(strength^-bias) * (high - low)`.
///
/// `bias` is clamped into `[-1, 1]` and `strength` is raised to at least
/// [`MIN_BIAS_STRENGTH`]. A degenerate range (`low >= high`, or non-finite bounds) returns `low`
/// without consuming randomness.
pub fn biased_uniform_with<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
    bias: f64,
    strength: f64,
) -> f64 {
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return low;
    }
    let bias = if bias.is_nan() { 0.0 } else { bias.clamp(-1.0, 1.0) };
    let strength = if strength.is_nan() {
        DEFAULT_BIAS_STRENGTH
    } else {
        strength.max(MIN_BIAS_STRENGTH)
    };
    let exponent = if bias.abs() < 1e-9 {
        1.0
    } else {
        strength.powf(-bias)
    };

    let r: f64 = rng.r#gen();
    (low + r.powf(exponent) * (high - low)).clamp(low, high)
}

/// Biased discrete choice in `low..=high`.
///
/// Returns `low` when `low >= high`.
pub fn biased_index<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64, bias: f64) -> i64 {
    if low >= high {
        return low;
    }
    let span = (high - low + 1) as f64;
    let f = biased_uniform(rng, 0.0, 1.0, bias);
    (low + (f * span).floor() as i64).min(high)
}

/// `true` with probability `percent / 100`.
///
/// `percent <= 0` is never true and `percent >= 100` is always true; neither consumes randomness.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, percent: f64) -> bool {
    if percent.is_nan() || percent <= 0.0 {
        return false;
    }
    if percent >= 100.0 {
        return true;
    }
    rng.r#gen::<f64>() * 100.0 < percent
}

/// Shape of the slowdown applied near the walls by [`step_avoiding_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Avoidance {
    /// Fraction of the full range, at each edge, inside which steps toward that edge shrink.
    pub influence_ratio: f64,
    /// Curve exponent; higher values brake harder close to the wall.
    pub power: f64,
}

impl Default for Avoidance {
    fn default() -> Self {
        Self {
            influence_ratio: 0.25,
            power: 2.0,
        }
    }
}

impl Avoidance {
    /// Step range `(most_negative, most_positive)` allowed at position `v`.
    pub fn step_range(self, v: f64, min_v: f64, max_v: f64, max_abs_offset: f64) -> (f64, f64) {
        let max_abs = max_abs_offset.abs();
        let zone = (max_v - min_v) * self.influence_ratio.clamp(0.0, 1.0);
        let power = self.power.max(0.0);

        let factor = |dist: f64| -> f64 {
            if zone <= 0.0 {
                return 1.0;
            }
            (dist / zone).clamp(0.0, 1.0).powf(power)
        };

        let neg = -max_abs * factor(v - min_v);
        let pos = max_abs * factor(max_v - v);
        (neg, pos)
    }
}

/// Move `v` by a random whole-number step that shrinks toward zero as `v` nears either wall.
///
/// The result is always clamped into `[min_v, max_v]`. An inverted range returns `v` untouched.
pub fn step_avoiding_bounds<R: Rng + ?Sized>(
    rng: &mut R,
    v: f64,
    min_v: f64,
    max_v: f64,
    max_abs_offset: f64,
    avoidance: Avoidance,
) -> f64 {
    if min_v.is_nan() || max_v.is_nan() || min_v > max_v {
        tracing::warn!(min_v, max_v, "inverted bounds for avoidance step");
        return v;
    }
    let v = v.clamp(min_v, max_v);
    let (neg, pos) = avoidance.step_range(v, min_v, max_v, max_abs_offset);
    let lo = neg.ceil() as i64;
    let hi = pos.floor() as i64;
    let step = if lo < hi { rng.gen_range(lo..=hi) } else { 0 };
    (v + step as f64).clamp(min_v, max_v)
}

#[cfg(test)]
#[path = "../../tests/unit/random/sampling.rs"]
mod tests;
