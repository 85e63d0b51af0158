//! Sample-time grid shared by all three signals.

/// Upper bound on samples per synthesis call. Keeps a single recompute
/// cheap enough for interactive use.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Raw sample count `floor(T * Fs)` before any capping.
///
/// NaN and negative products come back as-is; callers decide what to do.
pub fn requested_samples(duration: f64, sample_rate: f64) -> f64 {
    (duration * sample_rate).floor()
}

/// Number of samples in the window, clamped to `[0, MAX_SAMPLES]`.
pub fn sample_count(duration: f64, sample_rate: f64) -> usize {
    let n = requested_samples(duration, sample_rate);
    if n.is_nan() || n < 1.0 {
        return 0;
    }
    if n > MAX_SAMPLES as f64 {
        log::warn!("sample grid of {n} points clamped to {MAX_SAMPLES}");
        return MAX_SAMPLES;
    }
    n as usize
}

/// Build `t[i] = i / Fs` for `i` in `0..N`.
pub fn time_grid(duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = sample_count(duration, sample_rate);
    (0..n).map(|i| i as f64 / sample_rate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_length_is_floor() {
        let t = time_grid(0.02, 50_000.0);
        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[1], 1.0 / 50_000.0);
        assert_eq!(t[999], 999.0 / 50_000.0);
    }

    #[test]
    fn grid_is_strictly_increasing() {
        let t = time_grid(0.01, 8000.0);
        for pair in t.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn sub_sample_window_is_empty() {
        assert!(time_grid(1e-5, 50_000.0).is_empty());
        assert!(time_grid(0.0, 50_000.0).is_empty());
        assert!(time_grid(-1.0, 50_000.0).is_empty());
    }

    #[test]
    fn nan_window_is_empty() {
        assert_eq!(sample_count(f64::NAN, 1000.0), 0);
    }

    #[test]
    fn oversized_window_is_clamped() {
        assert_eq!(sample_count(10.0, 1e6), MAX_SAMPLES);
        assert_eq!(sample_count(f64::INFINITY, 1e6), MAX_SAMPLES);
    }
}
