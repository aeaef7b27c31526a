// Interpolation helpers used by the tween engine

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out, `t` is clamped to 0..=1
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

/// Normalized progress of `elapsed` through `duration`
///
/// A zero-length or non-finite duration is always complete.
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    if !duration.is_finite() || duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(-5.0, 5.0, 0.5), 0.0);
    }

    #[test]
    fn test_ease_out_quad_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_relative_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn test_ease_out_quad_clamps() {
        assert_eq!(ease_out_quad(-1.0), 0.0);
        assert_eq!(ease_out_quad(3.0), 1.0);
    }

    #[test]
    fn test_progress() {
        assert_relative_eq!(progress(0.25, 0.5), 0.5);
        assert_eq!(progress(1.0, 0.5), 1.0);
        assert_eq!(progress(0.1, 0.0), 1.0);
    }

    #[test]
    fn test_progress_non_finite_duration_completes() {
        assert_eq!(progress(0.0, f32::NAN), 1.0);
        assert_eq!(progress(0.1, f32::INFINITY), 1.0);
        assert_eq!(progress(0.1, -1.0), 1.0);
    }
}
