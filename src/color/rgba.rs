use crate::foundation::math::{clamp_unit, lerp};

/// Rec.709 luma coefficients.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Colors are plain values: every transform returns a new color and leaves the input untouched.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Neutral mid gray used when a palette has nothing to offer.
    pub const NEUTRAL_GRAY: Self = Self::rgba(0.5, 0.5, 0.5, 1.0);

    /// Construct from unit-range channels without clamping.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from unit-range channels, clamping each into `[0, 1]`.
    pub fn clamped(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::rgba(clamp_unit(r), clamp_unit(g), clamp_unit(b), clamp_unit(a))
    }

    /// Return a copy with a different alpha (clamped).
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: clamp_unit(a),
            ..self
        }
    }

    /// `true` when every channel is a finite number.
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Straight 8-bit channels `[r, g, b, a]`, rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (clamp_unit(x) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Channel-wise comparison with an absolute tolerance.
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.r - other.r).abs() <= eps
            && (self.g - other.g).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.a - other.a).abs() <= eps
    }

    /// Convert to hue/saturation/brightness, all in `[0, 1]`.
    ///
    /// Returns `None` for non-finite channels.
    pub fn to_hsb(self) -> Option<(f64, f64, f64)> {
        if !self.is_finite() {
            return None;
        }
        let (r, g, b) = (clamp_unit(self.r), clamp_unit(self.g), clamp_unit(self.b));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let brightness = max;
        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        if delta <= f64::EPSILON {
            return Some((0.0, saturation, brightness));
        }

        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        Some((sector / 6.0, saturation, brightness))
    }

    /// Build a color from hue/saturation/brightness in `[0, 1]` plus alpha.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let s = clamp_unit(saturation);
        let v = clamp_unit(brightness);
        if s <= 0.0 {
            return Self::clamped(v, v, v, alpha);
        }

        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::clamped(r, g, b, alpha)
    }

    /// Rec.709 luminance of the RGB channels.
    pub fn luminance(self) -> f64 {
        LUMA_R * self.r + LUMA_G * self.g + LUMA_B * self.b
    }
}

/// Build an opaque color from 8-bit style integer channels, clamping each into `0..=255`.
pub fn make_color(r: i32, g: i32, b: i32) -> Color {
    make_color_rgba(r, g, b, 1.0)
}

/// Build a color from 8-bit style integer channels plus a unit alpha, clamping everything.
pub fn make_color_rgba(r: i32, g: i32, b: i32, a: f64) -> Color {
    fn unit(c: i32) -> f64 {
        f64::from(c.clamp(0, 255)) / 255.0
    }
    Color::rgba(unit(r), unit(g), unit(b), clamp_unit(a))
}

/// Parse `RRGGBB` or `#RRGGBB`.
///
/// Any other length or a non-hex digit yields `None`.
pub fn color_from_hex(s: &str) -> Option<Color> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    Some(make_color(i32::from(r), i32::from(g), i32::from(b)))
}

/// Move brightness toward white (`percent > 0`) or black (`percent < 0`).
///
/// `percent` is clamped into `[-1, 1]` and moves brightness by that fraction of the remaining
/// distance. Hue, saturation and alpha are preserved.
pub fn adjust_lightness(color: Color, percent: f64) -> Option<Color> {
    let (h, s, v) = color.to_hsb()?;
    let p = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(-1.0, 1.0)
    };
    if p == 0.0 {
        return Some(color);
    }

    let v = if p > 0.0 {
        v + (1.0 - v) * p
    } else {
        v + v * p
    };
    Some(Color::from_hsb(h, s, clamp_unit(v), color.a))
}

/// Blend each RGB channel toward the Rec.709 luminance by `strength` in `[0, 1]`.
pub fn gray_tone(color: Color, strength: f64) -> Option<Color> {
    if !color.is_finite() {
        return None;
    }
    let t = clamp_unit(strength);
    let l = color.luminance();
    Some(Color::rgba(
        lerp(color.r, l, t),
        lerp(color.g, l, t),
        lerp(color.b, l, t),
        color.a,
    ))
}

/// Channel-inverted color, alpha preserved. Non-finite input yields black.
pub fn complement(color: Color) -> Color {
    if !color.is_finite() {
        return Color::BLACK;
    }
    Color::rgba(1.0 - color.r, 1.0 - color.g, 1.0 - color.b, color.a)
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgba.rs"]
mod tests;
