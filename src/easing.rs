//! Easing curves for entrance animations.
//!
//! All curves map [0, 1] to [0, 1], are monotonic, and clamp outside the
//! unit interval so callers can feed raw progress values.

/// Cubic ease-out: fast start, slow finish (feels responsive)
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Quadratic ease-out: slightly faster settle than cubic
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A named easing curve attached to an animation stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    /// CSS-style cubic bezier through (0,0) and (1,1) with control
    /// points (x1, y1) and (x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

/// The expo-flavored bezier used by most entrance animations
pub const EASE_OUT_EXPO: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOutQuad => ease_out_quad(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1
#[inline]
fn bezier_coord(c1: f32, c2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * c1 + 3.0 * u * t * t * c2 + t * t * t
}

#[inline]
fn bezier_deriv(c1: f32, c2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * c1 + 6.0 * u * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
}

/// Evaluate a CSS cubic-bezier timing function at horizontal position `x`.
///
/// Inverts x(t) with Newton iterations, falling back to bisection when the
/// derivative is too flat near the endpoints.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut t = x;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, t) - x;
        if err.abs() < 1e-5 {
            return bezier_coord(y1, y2, t);
        }
        let d = bezier_deriv(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    // Bisection fallback (x(t) is monotonic for control points in [0, 1])
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..24 {
        t = 0.5 * (lo + hi);
        if bezier_coord(x1, x2, t) < x {
            lo = t;
        } else {
            hi = t;
        }
    }
    bezier_coord(y1, y2, t)
}

/// Smooth 0 -> 1 -> 0 oscillation with the given period, for looping
/// effects (hero orbs, scroll indicator, timeline pulses).
#[inline]
pub fn ping_pong(time: f32, period: f32) -> f32 {
    0.5 - 0.5 * (std::f32::consts::TAU * time / period).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Clamps outside the unit interval
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_midpoint() {
        // 1 - (1 - 0.5)^3 = 0.875
        let v = ease_out_cubic(0.5);
        assert!((v - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [
            Easing::Linear,
            Easing::EaseOutQuad,
            Easing::EaseOutCubic,
            EASE_OUT_EXPO,
        ] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(
                    v >= prev - 1e-4,
                    "{:?} not monotonic at step {}: {} < {}",
                    easing,
                    i,
                    v,
                    prev
                );
                prev = v;
            }
        }
    }

    #[test]
    fn test_bezier_endpoints() {
        assert_eq!(EASE_OUT_EXPO.apply(0.0), 0.0);
        assert_eq!(EASE_OUT_EXPO.apply(1.0), 1.0);
    }

    #[test]
    fn test_expo_bezier_is_fast_out() {
        // The (0.16, 1, 0.3, 1) curve covers most of its range early
        let v = EASE_OUT_EXPO.apply(0.5);
        assert!(v > 0.9 && v <= 1.0, "expected fast-out shape, got {}", v);
    }

    #[test]
    fn test_ping_pong_cycle() {
        assert!(ping_pong(0.0, 2.0).abs() < 1e-6);
        assert!((ping_pong(1.0, 2.0) - 1.0).abs() < 1e-6);
        assert!(ping_pong(2.0, 2.0).abs() < 1e-5);
    }
}
