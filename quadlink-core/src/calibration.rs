//! Gimbal travel calibration: learned per-axis bounds and the session that
//! expands them.
//!
//! Bounds start from a single raw sample (min = center = max) and only ever
//! widen: a calibration session watches incoming samples, lowering `min` and
//! raising `max` as the pilot sweeps the sticks. The center captured from
//! the first sample is never touched by expansion - it is the resting
//! position the deadband is built around.
//!
//! Bounds serialize to a fixed 22-byte record for the opaque persistence
//! store (see [`crate::store`]).

use crate::types::RawAxes;

/// Serialized size of a [`CalibrationBounds`] record: 11 LE u16 values.
pub const BOUNDS_RECORD_LEN: usize = 22;

/// Learned travel of the throttle gimbal (no center; throttle is one-sided).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThrottleBounds {
    pub min: u16,
    pub max: u16,
}

impl ThrottleBounds {
    /// Widen the bounds to cover `raw`. Returns whether anything changed.
    #[inline]
    pub fn expand(&mut self, raw: u16) -> bool {
        if raw > self.max {
            self.max = raw;
            true
        } else if raw < self.min {
            self.min = raw;
            true
        } else {
            false
        }
    }
}

/// Learned travel of a centering gimbal axis.
///
/// Invariant once initialized: `min <= center <= max`. Expansion never moves
/// `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StickBounds {
    pub min: u16,
    pub center: u16,
    pub max: u16,
}

impl StickBounds {
    /// Widen the bounds to cover `raw`, leaving `center` untouched.
    /// Returns whether anything changed.
    #[inline]
    pub fn expand(&mut self, raw: u16) -> bool {
        if raw > self.max {
            self.max = raw;
            true
        } else if raw < self.min {
            self.min = raw;
            true
        } else {
            false
        }
    }
}

/// Complete calibration state for all four gimbal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationBounds {
    pub throttle: ThrottleBounds,
    pub pitch: StickBounds,
    pub roll: StickBounds,
    pub yaw: StickBounds,
}

impl CalibrationBounds {
    /// Initialize bounds from the first sample of a calibration session:
    /// every axis gets min = max = raw, and the centering axes also capture
    /// raw as their center.
    #[must_use]
    pub const fn from_sample(raw: &RawAxes) -> Self {
        Self {
            throttle: ThrottleBounds {
                min: raw.throttle,
                max: raw.throttle,
            },
            pitch: StickBounds {
                min: raw.pitch,
                center: raw.pitch,
                max: raw.pitch,
            },
            roll: StickBounds {
                min: raw.roll,
                center: raw.roll,
                max: raw.roll,
            },
            yaw: StickBounds {
                min: raw.yaw,
                center: raw.yaw,
                max: raw.yaw,
            },
        }
    }

    /// Widen all axes to cover `raw`. Returns whether any bound changed.
    pub fn expand(&mut self, raw: &RawAxes) -> bool {
        // Evaluate all four; short-circuiting would skip expansion.
        let throttle = self.throttle.expand(raw.throttle);
        let pitch = self.pitch.expand(raw.pitch);
        let roll = self.roll.expand(raw.roll);
        let yaw = self.yaw.expand(raw.yaw);
        throttle | pitch | roll | yaw
    }

    /// Serialize to the fixed persistence record (11 LE u16 values in
    /// throttle, pitch, roll, yaw order).
    #[must_use]
    pub fn to_record(&self) -> [u8; BOUNDS_RECORD_LEN] {
        let values = [
            self.throttle.min,
            self.throttle.max,
            self.pitch.min,
            self.pitch.center,
            self.pitch.max,
            self.roll.min,
            self.roll.center,
            self.roll.max,
            self.yaw.min,
            self.yaw.center,
            self.yaw.max,
        ];
        let mut record = [0u8; BOUNDS_RECORD_LEN];
        for (chunk, value) in record.chunks_exact_mut(2).zip(values) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        record
    }

    /// Deserialize from a persistence record produced by [`Self::to_record`].
    #[must_use]
    pub fn from_record(record: &[u8; BOUNDS_RECORD_LEN]) -> Self {
        let mut values = [0u16; 11];
        for (value, chunk) in values.iter_mut().zip(record.chunks_exact(2)) {
            *value = u16::from_le_bytes([chunk[0], chunk[1]]);
        }
        Self {
            throttle: ThrottleBounds {
                min: values[0],
                max: values[1],
            },
            pitch: StickBounds {
                min: values[2],
                center: values[3],
                max: values[4],
            },
            roll: StickBounds {
                min: values[5],
                center: values[6],
                max: values[7],
            },
            yaw: StickBounds {
                min: values[8],
                center: values[9],
                max: values[10],
            },
        }
    }
}

/// An in-progress calibration sweep.
///
/// Owns the bounds being learned and counts samples since the last bound
/// change, so the owner can end the session once the sticks have been still
/// long enough. Abandoning the session (dropping it) has no side effects;
/// nothing is persisted until the owner saves the finished bounds.
#[derive(Debug, Clone)]
pub struct CalibrationSession {
    bounds: CalibrationBounds,
    samples_since_change: u32,
}

impl CalibrationSession {
    /// Begin a session with its first sample.
    #[must_use]
    pub const fn begin(first: &RawAxes) -> Self {
        Self {
            bounds: CalibrationBounds::from_sample(first),
            samples_since_change: 0,
        }
    }

    /// Feed one sample. Returns whether any bound widened; the idle counter
    /// resets on change.
    pub fn update(&mut self, sample: &RawAxes) -> bool {
        let changed = self.bounds.expand(sample);
        if changed {
            self.samples_since_change = 0;
        } else {
            self.samples_since_change = self.samples_since_change.saturating_add(1);
        }
        changed
    }

    /// Samples fed since the last bound change (the inactivity measure).
    #[must_use]
    pub const fn samples_since_change(&self) -> u32 {
        self.samples_since_change
    }

    /// The bounds learned so far.
    #[must_use]
    pub const fn bounds(&self) -> &CalibrationBounds {
        &self.bounds
    }

    /// End the session, yielding the learned bounds.
    #[must_use]
    pub fn finish(self) -> CalibrationBounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_sample() -> RawAxes {
        RawAxes::new(100, 512, 500, 520)
    }

    #[test]
    fn test_from_sample_collapses_bounds() {
        let bounds = CalibrationBounds::from_sample(&centered_sample());
        assert_eq!(bounds.throttle.min, 100);
        assert_eq!(bounds.throttle.max, 100);
        assert_eq!(bounds.pitch.min, 512);
        assert_eq!(bounds.pitch.center, 512);
        assert_eq!(bounds.pitch.max, 512);
    }

    #[test]
    fn test_expand_is_monotone() {
        let mut bounds = CalibrationBounds::from_sample(&centered_sample());

        assert!(bounds.expand(&RawAxes::new(50, 900, 500, 520)));
        assert_eq!(bounds.throttle.min, 50);
        assert_eq!(bounds.pitch.max, 900);

        // A less extreme sample never narrows anything.
        assert!(!bounds.expand(&RawAxes::new(75, 600, 500, 520)));
        assert_eq!(bounds.throttle.min, 50);
        assert_eq!(bounds.pitch.max, 900);
    }

    #[test]
    fn test_expand_same_sample_is_idempotent() {
        let mut bounds = CalibrationBounds::from_sample(&centered_sample());
        let sweep = RawAxes::new(0, 1023, 1023, 0);

        assert!(bounds.expand(&sweep));
        let after_first = bounds;
        assert!(!bounds.expand(&sweep));
        assert_eq!(bounds, after_first);
    }

    #[test]
    fn test_expand_leaves_center_untouched() {
        let mut bounds = CalibrationBounds::from_sample(&centered_sample());
        bounds.expand(&RawAxes::new(0, 0, 0, 0));
        bounds.expand(&RawAxes::new(1023, 1023, 1023, 1023));

        assert_eq!(bounds.pitch.center, 512);
        assert_eq!(bounds.roll.center, 500);
        assert_eq!(bounds.yaw.center, 520);
        assert_eq!(bounds.pitch.min, 0);
        assert_eq!(bounds.pitch.max, 1023);
    }

    #[test]
    fn test_expand_widens_one_axis_at_a_time() {
        let mut bounds = CalibrationBounds::from_sample(&centered_sample());
        // Only yaw moves; the report must still be "changed".
        assert!(bounds.expand(&RawAxes::new(100, 512, 500, 1000)));
        assert_eq!(bounds.yaw.max, 1000);
        assert_eq!(bounds.pitch.max, 512);
    }

    #[test]
    fn test_record_roundtrip() {
        let mut bounds = CalibrationBounds::from_sample(&centered_sample());
        bounds.expand(&RawAxes::new(3, 1020, 990, 15));
        bounds.expand(&RawAxes::new(1000, 30, 12, 1013));

        let restored = CalibrationBounds::from_record(&bounds.to_record());
        assert_eq!(restored, bounds);
    }

    #[test]
    fn test_session_tracks_inactivity() {
        let mut session = CalibrationSession::begin(&centered_sample());
        assert_eq!(session.samples_since_change(), 0);

        // Stick held still: idle counter climbs.
        assert!(!session.update(&centered_sample()));
        assert!(!session.update(&centered_sample()));
        assert_eq!(session.samples_since_change(), 2);

        // Any widening resets it.
        assert!(session.update(&RawAxes::new(100, 512, 500, 900)));
        assert_eq!(session.samples_since_change(), 0);
    }

    #[test]
    fn test_session_finish_yields_bounds() {
        let mut session = CalibrationSession::begin(&centered_sample());
        session.update(&RawAxes::new(0, 1023, 1023, 0));

        let bounds = session.finish();
        assert_eq!(bounds.throttle.min, 0);
        assert_eq!(bounds.pitch.max, 1023);
    }
}
