//! Wire packet types: [`CommandPacket`], [`TelemetryPacket`], [`MotorPosition`].

use crate::address::ParameterTarget;

/// Magic byte opening every command packet.
pub const COMMAND_MAGIC: u8 = 0x37;

/// Magic byte opening every telemetry packet.
pub const TELEMETRY_MAGIC: u8 = 0xAA;

/// Serialized size of a command packet in bytes.
///
/// Layout: magic(1) + flags(1) + gain(4) + throttle(1) + pitch(1) + roll(1) + yaw(1)
pub const COMMAND_PACKET_LEN: usize = 10;

/// Serialized size of a telemetry packet in bytes.
///
/// Layout: magic(1) + armed(1) + pitch_err(4) + roll_err(4) + yaw_err(4)
pub const TELEMETRY_PACKET_LEN: usize = 14;

// Flags byte layout: bit7 armed, bit6 single-motor mode, bits 5-4 motor
// select, bits 3-0 parameter address.
pub(crate) const FLAG_ARMED: u8 = 0x80;
pub(crate) const FLAG_SINGLE_MOTOR: u8 = 0x40;
pub(crate) const MOTOR_SELECT_MASK: u8 = 0x30;
pub(crate) const MOTOR_SELECT_SHIFT: u8 = 4;
pub(crate) const PARAMETER_MASK: u8 = 0x0F;

/// Motor addressed by single-motor test mode (2-bit wire value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorPosition {
    #[default]
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl MotorPosition {
    /// Wire encoding of this motor (2 bits).
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::FrontLeft => 0b00,
            Self::FrontRight => 0b01,
            Self::BackLeft => 0b10,
            Self::BackRight => 0b11,
        }
    }

    /// Decode a motor from its 2-bit wire value (total over the masked input).
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::FrontLeft,
            0b01 => Self::FrontRight,
            0b10 => Self::BackLeft,
            _ => Self::BackRight,
        }
    }
}

/// One transmitter-to-receiver command frame.
///
/// Fields are kept unpacked in memory; the flags/selectors byte is assembled
/// only at serialization time and split apart only at parse time. Values
/// wider than their wire bit width are truncated silently by the packing
/// shifts - that is the documented contract, not a defect.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandPacket {
    /// Motor output enabled.
    pub armed: bool,
    /// Drive only the motor named by `motor` (bench test mode).
    pub single_motor: bool,
    /// Motor selected when `single_motor` is set; ignored otherwise.
    pub motor: MotorPosition,
    /// Tuning parameter carried in this frame's gain slot.
    pub parameter: ParameterTarget,
    /// Mapped throttle, 0-255.
    pub throttle: u8,
    /// Mapped pitch command, -127..127.
    pub pitch: i8,
    /// Mapped roll command, -127..127.
    pub roll: i8,
    /// Mapped yaw command, -127..127.
    pub yaw: i8,
}

impl CommandPacket {
    /// A disarmed packet with sticks centered, throttle down, and no
    /// parameter update.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            armed: false,
            single_motor: false,
            motor: MotorPosition::FrontLeft,
            parameter: ParameterTarget::Unused,
            throttle: 0,
            pitch: 0,
            roll: 0,
            yaw: 0,
        }
    }

    /// Assemble the packed flags/selectors byte.
    #[inline]
    #[must_use]
    pub(crate) fn flags_byte(&self) -> u8 {
        ((self.armed as u8) << 7)
            | ((self.single_motor as u8) << 6)
            | (self.motor.bits() << MOTOR_SELECT_SHIFT)
            | (self.parameter.code() & PARAMETER_MASK)
    }
}

impl Default for CommandPacket {
    fn default() -> Self {
        Self::neutral()
    }
}

/// One receiver-to-transmitter telemetry frame: armed state plus the
/// controller's current attitude error on each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryPacket {
    pub armed: bool,
    pub pitch_err: f32,
    pub roll_err: f32,
    pub yaw_err: f32,
}

impl TelemetryPacket {
    #[must_use]
    pub const fn new(armed: bool, pitch_err: f32, roll_err: f32, yaw_err: f32) -> Self {
        Self {
            armed,
            pitch_err,
            roll_err,
            yaw_err,
        }
    }
}
