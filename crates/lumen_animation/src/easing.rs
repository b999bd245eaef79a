//! Easing functions for transitions
//!
//! Names follow the host vocabulary (`ease-in-out`, `ease-out-quad`, ...).
//! `cubic-bezier(x1, y1, x2, y2)` is accepted as well.

use std::fmt;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    CubicBezier(f32, f32, f32, f32),
}

/// The CSS `ease` curve
pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);

const NAMED: [(&str, Easing); 13] = [
    ("linear", Easing::Linear),
    ("ease-in", Easing::EaseIn),
    ("ease-out", Easing::EaseOut),
    ("ease-in-out", Easing::EaseInOut),
    ("ease-in-quad", Easing::EaseInQuad),
    ("ease-out-quad", Easing::EaseOutQuad),
    ("ease-in-out-quad", Easing::EaseInOutQuad),
    ("ease-in-cubic", Easing::EaseInCubic),
    ("ease-out-cubic", Easing::EaseOutCubic),
    ("ease-in-out-cubic", Easing::EaseInOutCubic),
    ("ease-in-quart", Easing::EaseInQuart),
    ("ease-out-quart", Easing::EaseOutQuart),
    ("ease-in-out-quart", Easing::EaseInOutQuart),
];

impl Easing {
    /// Parse an easing name, `None` if unrecognized
    pub fn parse(name: &str) -> Option<Easing> {
        let name = name.trim();
        if name == "ease" {
            return Some(EASE);
        }
        if let Some(args) = name
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let points: Vec<f32> = args
                .split(',')
                .map(|p| p.trim().parse::<f32>())
                .collect::<Result<_, _>>()
                .ok()?;
            return match points[..] {
                [x1, y1, x2, y2] => Some(Easing::CubicBezier(x1, y1, x2, y2)),
                _ => None,
            };
        }
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, easing)| *easing)
    }

    /// Parse an easing name, falling back to [`Easing::Linear`] with a warning
    pub fn from_name(name: &str) -> Easing {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(easing = name, "unknown easing, using linear");
            Easing::Linear
        })
    }

    /// Host name of this easing
    pub fn name(&self) -> String {
        if let Some((name, _)) = NAMED.iter().find(|(_, e)| e == self) {
            return name.to_string();
        }
        if *self == EASE {
            return "ease".to_string();
        }
        match self {
            Easing::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
            _ => "linear".to_string(),
        }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn | Easing::EaseInCubic => t * t * t,
            Easing::EaseOut | Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut | Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInQuart => t * t * t * t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Cubic bezier easing, Newton-Raphson with a bisection fallback.
///
/// Computes in f64 internally to avoid f32 precision jitter.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..20 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³, in Horner form
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
