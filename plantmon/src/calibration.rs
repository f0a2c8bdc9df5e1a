//! Temperature calibration offset.
//!
//! The offset is the only state the daemon mutates after startup. It lives in
//! a [`CalibrationStore`] shared by all request handlers; every access takes
//! the lock for a single read or write and nothing else.

use parking_lot::RwLock;
use tracing::{info, warn};

/// Lowest accepted calibration offset (°C).
pub const MIN_OFFSET: f64 = -10.0;

/// Highest accepted calibration offset (°C).
pub const MAX_OFFSET: f64 = 10.0;

/// Offset in effect at startup.
pub const DEFAULT_OFFSET: f64 = 0.0;

/// Clamp a requested offset into `[MIN_OFFSET, MAX_OFFSET]`.
pub fn clamp_offset(requested: f64) -> f64 {
    requested.clamp(MIN_OFFSET, MAX_OFFSET)
}

/// Holds the current calibration offset.
///
/// Out-of-range requests are silently clamped, so a stored value outside
/// `[MIN_OFFSET, MAX_OFFSET]` can never be observed.
#[derive(Debug)]
pub struct CalibrationStore {
    offset: RwLock<f64>,
}

impl CalibrationStore {
    /// Create a store holding [`DEFAULT_OFFSET`].
    pub fn new() -> Self {
        Self {
            offset: RwLock::new(DEFAULT_OFFSET),
        }
    }

    /// Current offset.
    pub fn get(&self) -> f64 {
        *self.offset.read()
    }

    /// Clamp `requested` and store it, returning the stored value.
    ///
    /// NaN has no place in the range; it is ignored and the current offset
    /// is returned unchanged.
    pub fn set(&self, requested: f64) -> f64 {
        if requested.is_nan() {
            let current = self.get();
            warn!(offset = current, "Ignoring NaN calibration offset");
            return current;
        }

        let clamped = clamp_offset(requested);
        *self.offset.write() = clamped;

        if clamped != requested {
            info!(requested, offset = clamped, "Calibration offset clamped");
        } else {
            info!(offset = clamped, "Calibration offset updated");
        }
        clamped
    }

    /// Restore the default offset.
    pub fn reset(&self) -> f64 {
        self.set(DEFAULT_OFFSET)
    }
}

impl Default for CalibrationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_default_offset_is_zero() {
        let store = CalibrationStore::new();
        assert_eq!(store.get(), 0.0);
    }

    #[test]
    fn test_set_within_range() {
        let store = CalibrationStore::new();
        assert_eq!(store.set(2.5), 2.5);
        assert_eq!(store.get(), 2.5);
        assert_eq!(store.set(-3.7), -3.7);
        assert_eq!(store.get(), -3.7);
    }

    #[test]
    fn test_set_clamps_out_of_range() {
        let store = CalibrationStore::new();
        assert_eq!(store.set(15.0), 10.0);
        assert_eq!(store.get(), 10.0);
        assert_eq!(store.set(-25.0), -10.0);
        assert_eq!(store.get(), -10.0);
        assert_eq!(store.set(f64::INFINITY), 10.0);
    }

    #[test]
    fn test_set_nan_keeps_current_offset() {
        let store = CalibrationStore::new();
        store.set(3.5);

        assert_eq!(store.set(f64::NAN), 3.5);
        assert_eq!(store.get(), 3.5);
        assert!((MIN_OFFSET..=MAX_OFFSET).contains(&store.get()));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let store = CalibrationStore::new();
        assert_eq!(store.set(10.0), 10.0);
        assert_eq!(store.set(-10.0), -10.0);
    }

    #[test]
    fn test_reset() {
        let store = CalibrationStore::new();
        store.set(4.0);
        assert_eq!(store.reset(), 0.0);
        assert_eq!(store.get(), 0.0);
    }

    #[test]
    fn test_concurrent_setters_leave_one_of_the_inputs() {
        let store = Arc::new(CalibrationStore::new());
        let inputs: Vec<f64> = (0..16).map(|i| (i as f64 - 8.0) * 2.5).collect();

        let handles: Vec<_> = inputs
            .iter()
            .map(|&value| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..200 {
                        store.set(value);
                        let seen = store.get();
                        assert!((MIN_OFFSET..=MAX_OFFSET).contains(&seen));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let final_value = store.get();
        assert!(
            inputs.iter().any(|&i| clamp_offset(i) == final_value),
            "final offset {} is not one of the clamped inputs",
            final_value
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_set_then_get_is_clamped(requested in -1.0e6..1.0e6_f64) {
                let store = CalibrationStore::new();
                let stored = store.set(requested);
                prop_assert_eq!(stored, requested.max(-10.0).min(10.0));
                prop_assert_eq!(store.get(), stored);
            }

            #[test]
            fn test_last_write_wins(first in -20.0..20.0_f64, second in -20.0..20.0_f64) {
                let store = CalibrationStore::new();
                store.set(first);
                store.set(second);
                prop_assert_eq!(store.get(), clamp_offset(second));
            }
        }
    }
}
