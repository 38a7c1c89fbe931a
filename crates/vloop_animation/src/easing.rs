//! Easing functions for animations

use std::f32::consts::PI;

/// Easing function type
///
/// Every curve maps `0.0 -> 0.0` and `1.0 -> 1.0` and is non-decreasing in
/// between, so an animated value never moves backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Easing {
    Linear,
    /// Cosine ramp: slow start, fast middle, slow end
    #[default]
    AccelerateDecelerate,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::AccelerateDecelerate,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v + 1e-6 >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_accelerate_decelerate_midpoint() {
        assert!((Easing::AccelerateDecelerate.apply(0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
