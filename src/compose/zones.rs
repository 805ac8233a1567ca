use rand::Rng;

/// `n_lines` positions spread evenly across `[min, max]`, each jittered.
///
/// Ideal spacing is `(max - min) / (n_lines + 1)` so no line sits on a boundary. Each position
/// moves by up to `fuzziness * spacing` either way and is then clamped into the range. A
/// non-finite reach leaves every line at its ideal position.
pub fn line_zones<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
    n_lines: usize,
    fuzziness: f64,
) -> Vec<f64> {
    if n_lines == 0 {
        return Vec::new();
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let spacing = (hi - lo) / (n_lines as f64 + 1.0);
    let reach = fuzziness.abs() * spacing;

    (1..=n_lines)
        .map(|i| {
            let ideal = lo + spacing * i as f64;
            let jitter = if reach.is_finite() && reach > 0.0 {
                rng.gen_range(-reach..=reach)
            } else {
                0.0
            };
            (ideal + jitter).clamp(lo, hi)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/zones.rs"]
mod tests;
