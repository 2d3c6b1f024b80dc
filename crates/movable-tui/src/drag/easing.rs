//! Atomic: settle curves for rows sliding into place
//!
//! Maps progress in [0, 1] to eased progress in [0, 1].

/// Named easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

impl Easing {
    /// Resolve a timing name; unknown names fall back to cubic
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Easing::Linear,
            "quintic" => Easing::Quintic,
            "ease-out" | "expo" | "exponential" => Easing::EaseOut,
            _ => Easing::Cubic,
        }
    }

    /// Apply the curve to a progress value
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Cubic => cubic_ease_out(t),
            Easing::Quintic => quintic_ease_out(t),
            Easing::EaseOut => exponential_ease_out(t),
        }
    }
}

/// 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}
