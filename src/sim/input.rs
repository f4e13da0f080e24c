//! Tilt input conditioning
//!
//! The raw accelerometer stream is noisy and occasionally nonsensical
//! (dropped samples arrive as NaN on some devices). Everything entering the
//! simulation goes through `sanitize_tilt`; adapters that want a steadier
//! feel can additionally run samples through a `TiltFilter`.

use crate::consts::MAX_TILT;

/// Sanitize a raw tilt sample
///
/// Non-finite samples are rejected outright so the tick loop never sees
/// them; finite samples are clamped to the plausible sensor range.
pub fn sanitize_tilt(sample: f32) -> Option<f32> {
    if !sample.is_finite() {
        return None;
    }
    Some(sample.clamp(-MAX_TILT, MAX_TILT))
}

/// Exponential smoothing filter for tilt samples
///
/// Optional: the engine accepts raw samples, but sensor adapters get less
/// basket jitter by smoothing before forwarding. `alpha` is the weight of
/// the newest sample; 1.0 disables smoothing.
#[derive(Debug, Clone, Copy)]
pub struct TiltFilter {
    alpha: f32,
    last: f32,
}

impl TiltFilter {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            last: 0.0,
        }
    }

    /// Feed one raw sample, get the smoothed value
    ///
    /// Rejected samples leave the filter state untouched and return the
    /// previous output, so a burst of NaNs holds the basket steady instead
    /// of kicking it.
    pub fn apply(&mut self, sample: f32) -> f32 {
        if let Some(sample) = sanitize_tilt(sample) {
            self.last = self.last + self.alpha * (sample - self.last);
        }
        self.last
    }

    /// Reset filter memory (e.g. after a sensor re-subscribe)
    pub fn reset(&mut self) {
        self.last = 0.0;
    }
}

impl Default for TiltFilter {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_passes_normal_samples() {
        assert_eq!(sanitize_tilt(0.25), Some(0.25));
        assert_eq!(sanitize_tilt(-1.0), Some(-1.0));
        assert_eq!(sanitize_tilt(0.0), Some(0.0));
    }

    #[test]
    fn test_sanitize_rejects_non_finite() {
        assert_eq!(sanitize_tilt(f32::NAN), None);
        assert_eq!(sanitize_tilt(f32::INFINITY), None);
        assert_eq!(sanitize_tilt(f32::NEG_INFINITY), None);
    }

    #[test]
    fn test_sanitize_clamps_outliers() {
        assert_eq!(sanitize_tilt(100.0), Some(MAX_TILT));
        assert_eq!(sanitize_tilt(-100.0), Some(-MAX_TILT));
    }

    #[test]
    fn test_filter_converges() {
        let mut filter = TiltFilter::new(0.5);
        let mut out = 0.0;
        for _ in 0..20 {
            out = filter.apply(1.0);
        }
        assert!((out - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_filter_holds_through_nan_burst() {
        let mut filter = TiltFilter::new(1.0);
        assert_eq!(filter.apply(0.8), 0.8);
        assert_eq!(filter.apply(f32::NAN), 0.8);
        assert_eq!(filter.apply(f32::NAN), 0.8);
        assert_eq!(filter.apply(0.2), 0.2);
    }
}
