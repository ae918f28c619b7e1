//! Transmitter tick pipeline: raw sample in, command packet out.
//!
//! [`Transmitter`] owns the active calibration bounds, the currently
//! selected tuning parameter, and the single-motor bench selection. Each
//! control-loop tick it maps one raw sample, evaluates the arm gesture on
//! the mapped tuple, and assembles the command frame. Everything is a pure
//! computation; calibration sessions and store commits happen outside the
//! tick (see [`crate::calibration`] and [`crate::store`]).

use quadlink_proto::{CommandPacket, MotorPosition, ParameterTarget};

use crate::calibration::CalibrationBounds;
use crate::mapping::{is_arm_gesture, map_axes};
use crate::store::{load_bounds, CalibrationStore};
use crate::types::{CommandAxes, RawAxes};

/// Transmitter-side state feeding the command packet stream.
#[derive(Debug, Clone)]
pub struct Transmitter {
    bounds: CalibrationBounds,
    parameter: ParameterTarget,
    single_motor: Option<MotorPosition>,
}

impl Transmitter {
    /// Build a transmitter around known-good calibration bounds.
    #[must_use]
    pub const fn new(bounds: CalibrationBounds) -> Self {
        Self {
            bounds,
            parameter: ParameterTarget::Unused,
            single_motor: None,
        }
    }

    /// Build a transmitter from persisted bounds, if any exist.
    ///
    /// `None` means no calibration was ever saved; the caller must run a
    /// calibration session before commands can be produced.
    pub fn from_store<S: CalibrationStore>(store: &mut S, slot: u8) -> Option<Self> {
        load_bounds(store, slot).map(Self::new)
    }

    /// Replace the calibration bounds (after a finished session).
    pub fn set_bounds(&mut self, bounds: CalibrationBounds) {
        self.bounds = bounds;
    }

    /// The bounds currently used for mapping.
    #[must_use]
    pub const fn bounds(&self) -> &CalibrationBounds {
        &self.bounds
    }

    /// Select the tuning parameter carried in subsequent packets.
    ///
    /// It stays selected until replaced or cleared; the receiver overwrites
    /// the same slot each tick, which is harmless.
    pub fn select_parameter(&mut self, target: ParameterTarget) {
        self.parameter = target;
    }

    /// Stop carrying a tuning parameter (packets revert to the no-op code).
    pub fn clear_parameter(&mut self) {
        self.parameter = ParameterTarget::Unused;
    }

    /// Enable or disable single-motor bench mode.
    pub fn set_single_motor(&mut self, motor: Option<MotorPosition>) {
        self.single_motor = motor;
    }

    /// Map one raw sample without assembling a packet.
    #[must_use]
    pub fn map(&self, raw: &RawAxes) -> CommandAxes {
        map_axes(raw, &self.bounds)
    }

    /// Produce the command frame for one raw sample.
    ///
    /// The armed flag reflects whether this tick's mapped tuple is the arm
    /// gesture; hold/debounce across ticks is the caller's policy.
    #[must_use]
    pub fn tick(&self, raw: &RawAxes) -> CommandPacket {
        let axes = self.map(raw);
        CommandPacket {
            armed: is_arm_gesture(&axes),
            single_motor: self.single_motor.is_some(),
            motor: self.single_motor.unwrap_or_default(),
            parameter: self.parameter,
            throttle: axes.throttle,
            pitch: axes.pitch,
            roll: axes.roll,
            yaw: axes.yaw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{CalibrationSession, BOUNDS_RECORD_LEN};
    use crate::store::{save_bounds, NullStore};
    use quadlink_proto::{decode_command, PidField, Serialize, StickAxis, COMMAND_PACKET_LEN};

    struct OneSlotStore {
        record: Option<[u8; BOUNDS_RECORD_LEN]>,
    }

    impl CalibrationStore for OneSlotStore {
        fn load(&mut self, _slot: u8) -> Option<[u8; BOUNDS_RECORD_LEN]> {
            self.record
        }

        fn save(&mut self, _slot: u8, record: &[u8; BOUNDS_RECORD_LEN]) {
            self.record = Some(*record);
        }
    }

    /// Run a sweep session over the full stick travel.
    fn calibrated_bounds() -> CalibrationBounds {
        let mut session = CalibrationSession::begin(&RawAxes::new(10, 512, 512, 512));
        session.update(&RawAxes::new(0, 0, 0, 0));
        session.update(&RawAxes::new(1023, 1023, 1023, 1023));
        session.finish()
    }

    #[test]
    fn test_tick_centered_sticks() {
        let tx = Transmitter::new(calibrated_bounds());
        let packet = tx.tick(&RawAxes::new(0, 512, 512, 512));

        assert!(!packet.armed);
        assert_eq!(packet.throttle, 0);
        assert_eq!(packet.pitch, 0);
        assert_eq!(packet.roll, 0);
        assert_eq!(packet.yaw, 0);
        assert_eq!(packet.parameter, ParameterTarget::Unused);
    }

    #[test]
    fn test_tick_arm_corner_sets_armed() {
        let tx = Transmitter::new(calibrated_bounds());
        // Throttle down, pitch/roll/yaw raw high = the arm corner after
        // polarity inversion.
        let packet = tx.tick(&RawAxes::new(0, 1023, 1023, 1023));
        assert!(packet.armed);
    }

    #[test]
    fn test_tick_carries_selected_parameter() {
        let mut tx = Transmitter::new(calibrated_bounds());
        tx.select_parameter(ParameterTarget::Pid {
            axis: StickAxis::Roll,
            field: PidField::I,
            gain: 0.02,
        });

        let packet = tx.tick(&RawAxes::new(0, 512, 512, 512));
        assert_eq!(
            packet.parameter,
            ParameterTarget::Pid {
                axis: StickAxis::Roll,
                field: PidField::I,
                gain: 0.02,
            }
        );

        tx.clear_parameter();
        let packet = tx.tick(&RawAxes::new(0, 512, 512, 512));
        assert_eq!(packet.parameter, ParameterTarget::Unused);
    }

    #[test]
    fn test_tick_single_motor_mode() {
        let mut tx = Transmitter::new(calibrated_bounds());
        tx.set_single_motor(Some(MotorPosition::BackRight));

        let packet = tx.tick(&RawAxes::new(0, 512, 512, 512));
        assert!(packet.single_motor);
        assert_eq!(packet.motor, MotorPosition::BackRight);

        tx.set_single_motor(None);
        let packet = tx.tick(&RawAxes::new(0, 512, 512, 512));
        assert!(!packet.single_motor);
    }

    #[test]
    fn test_from_store_roundtrip() {
        let mut store = OneSlotStore { record: None };
        assert!(Transmitter::from_store(&mut store, 0).is_none());

        let bounds = calibrated_bounds();
        save_bounds(&mut store, 0, &bounds);

        let tx = Transmitter::from_store(&mut store, 0).expect("bounds were saved");
        assert_eq!(*tx.bounds(), bounds);
    }

    #[test]
    fn test_from_null_store_requires_session() {
        assert!(Transmitter::from_store(&mut NullStore, 0).is_none());
    }

    #[test]
    fn test_tick_to_wire_and_back() {
        let mut tx = Transmitter::new(calibrated_bounds());
        tx.select_parameter(ParameterTarget::Complementary(0.97));

        let packet = tx.tick(&RawAxes::new(0, 1023, 1023, 1023));
        let mut buf = [0u8; COMMAND_PACKET_LEN];
        let len = packet.serialize(&mut buf).unwrap();

        let received = decode_command(&buf[..len]).unwrap();
        assert_eq!(received, packet);
        assert!(received.armed);
        assert_eq!(received.parameter, ParameterTarget::Complementary(0.97));
    }
}
