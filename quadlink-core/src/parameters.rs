//! Receiver-side parameter table and packet application.
//!
//! The table holds every value the 4-bit parameter address space can reach:
//! three PID groups (one per centering axis) plus the three global
//! filter/gain settings. It is created once with defaults at startup and
//! mutated only by applying decoded command packets; persisting tuned
//! values is the platform's concern, not this module's.

use quadlink_proto::{CommandPacket, ParameterTarget, PidField, StickAxis};

/// One axis' PID terms plus trim.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PidGains {
    pub p: f32,
    pub i: f32,
    pub d: f32,
    pub trim: f32,
}

/// Every tunable value addressable over the link.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParameterTable {
    pub pitch: PidGains,
    pub roll: PidGains,
    pub yaw: PidGains,
    /// Complementary filter gain.
    pub complementary: f32,
    /// Gyro high-pass cutoff register value.
    pub gyro_highpass: u8,
    /// Accelerometer low-pass ratio register value.
    pub accel_lowpass_ratio: u8,
}

impl ParameterTable {
    /// Table with all gains zeroed (flight code overwrites these from its
    /// own defaults before first use).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one decoded target into the matching slot.
    ///
    /// `Unused` writes nothing. The target carries its payload with the
    /// right type, so no interpretation decisions happen here.
    pub fn apply(&mut self, target: &ParameterTarget) {
        match *target {
            ParameterTarget::Unused => {}
            ParameterTarget::Complementary(gain) => self.complementary = gain,
            ParameterTarget::GyroHighpass(value) => self.gyro_highpass = value,
            ParameterTarget::XlLowpass(value) => self.accel_lowpass_ratio = value,
            ParameterTarget::Pid { axis, field, gain } => {
                let gains = match axis {
                    StickAxis::Pitch => &mut self.pitch,
                    StickAxis::Roll => &mut self.roll,
                    StickAxis::Yaw => &mut self.yaw,
                };
                match field {
                    PidField::P => gains.p = gain,
                    PidField::I => gains.i = gain,
                    PidField::D => gains.d = gain,
                    PidField::Trim => gains.trim = gain,
                }
            }
        }
    }

    /// Apply the parameter carried by a decoded command packet.
    pub fn apply_packet(&mut self, packet: &CommandPacket) {
        self.apply(&packet.parameter);
    }
}
