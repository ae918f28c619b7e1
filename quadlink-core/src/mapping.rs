//! Raw-sample-to-command mapping and the arm gesture detector.
//!
//! Throttle is a plain linear rescale from its calibrated travel to 0-255.
//! The centering axes use a deadband-compensated split mapping: a band of
//! `DEADBAND` counts around the calibrated center maps to exactly zero, and
//! each side of the band is rescaled independently so full deflection still
//! reaches the end of the output range. All scaling is integer math with
//! truncating division, clamped to the output range; nothing here can fail.
//!
//! Axis polarity: pitch and yaw are sign-inverted relative to roll, matching
//! the gimbal wiring. Keep that direction - the arm gesture and the flight
//! controller both depend on it.

use crate::calibration::{CalibrationBounds, StickBounds, ThrottleBounds};
use crate::types::{CommandAxes, RawAxes};

/// Half-width of the zero band around each calibrated center, in raw counts.
pub const DEADBAND: i32 = 8;

/// Lower end of the mapped throttle range.
pub const THROTTLE_OUT_MIN: i32 = 0;
/// Upper end of the mapped throttle range.
pub const THROTTLE_OUT_MAX: i32 = 255;
/// Lower end of the mapped range for centering axes.
pub const STICK_OUT_MIN: i32 = -127;
/// Upper end of the mapped range for centering axes.
pub const STICK_OUT_MAX: i32 = 127;

/// Linear rescale with truncating integer division.
///
/// Caller guarantees `in_max > in_min`; output is not clamped here.
#[inline]
fn scale(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Map a raw throttle reading to 0-255.
///
/// Degenerate bounds (`min >= max`, e.g. an unswept calibration) map
/// everything to the low end rather than dividing by zero.
#[must_use]
pub fn map_throttle(raw: u16, bounds: &ThrottleBounds) -> u8 {
    let (min, max) = (i32::from(bounds.min), i32::from(bounds.max));
    if min >= max {
        return THROTTLE_OUT_MIN as u8;
    }
    scale(i32::from(raw), min, max, THROTTLE_OUT_MIN, THROTTLE_OUT_MAX)
        .clamp(THROTTLE_OUT_MIN, THROTTLE_OUT_MAX) as u8
}

/// Map a raw centering-axis reading to -127..127 with deadband compensation.
///
/// Readings within `DEADBAND` of the calibrated center are exactly zero.
/// Above the band, `[center+DEADBAND, max]` rescales to `[0, 127]`; below
/// it, `[min, center-DEADBAND]` rescales to `[-127, 0]`. Each side clamps
/// to its half of the output range, so a reading beyond the calibrated
/// travel saturates instead of overflowing. A side whose calibrated travel
/// is swallowed by the deadband saturates to that side's extreme.
#[must_use]
pub fn map_stick(raw: u16, bounds: &StickBounds) -> i8 {
    let raw = i32::from(raw);
    let min = i32::from(bounds.min);
    let max = i32::from(bounds.max);
    let center = i32::from(bounds.center);

    if raw > center + DEADBAND {
        if max <= center + DEADBAND {
            return STICK_OUT_MAX as i8;
        }
        scale(raw, center + DEADBAND, max, 0, STICK_OUT_MAX).clamp(0, STICK_OUT_MAX) as i8
    } else if raw < center - DEADBAND {
        if min >= center - DEADBAND {
            return STICK_OUT_MIN as i8;
        }
        scale(raw, min, center - DEADBAND, STICK_OUT_MIN, 0).clamp(STICK_OUT_MIN, 0) as i8
    } else {
        0
    }
}

/// Map a full raw sample to the command tuple sent on the wire.
///
/// Pitch and yaw are negated here; roll is not.
#[must_use]
pub fn map_axes(raw: &RawAxes, bounds: &CalibrationBounds) -> CommandAxes {
    CommandAxes {
        throttle: map_throttle(raw.throttle, &bounds.throttle),
        pitch: -map_stick(raw.pitch, &bounds.pitch),
        roll: map_stick(raw.roll, &bounds.roll),
        yaw: -map_stick(raw.yaw, &bounds.yaw),
    }
}

/// Detect the arm gesture: throttle fully down with the stick held in the
/// down-pitch / full-right-roll / left-yaw corner.
///
/// This is an exact match on the mapped tuple, not a threshold - any other
/// position, including the opposite corner, is not the gesture. Hold/debounce
/// logic is the caller's job across successive ticks.
#[must_use]
pub fn is_arm_gesture(axes: &CommandAxes) -> bool {
    axes.throttle == THROTTLE_OUT_MIN as u8
        && axes.pitch == STICK_OUT_MIN as i8
        && axes.roll == STICK_OUT_MAX as i8
        && axes.yaw == STICK_OUT_MIN as i8
}
