//! The 4-bit parameter address space carried in every command packet.
//!
//! The low nibble of the flags byte selects which tunable value the 4-byte
//! gain slot is updating. The address space is split into two ranges:
//!
//! - `0b0000`-`0b0011`: global parameters (reserved/no-op, complementary
//!   filter gain, gyro high-pass register, accelerometer low-pass register)
//! - `0b0100`-`0b1111`: per-axis PID parameters, axis in bits 3-2
//!   (`01` pitch, `10` yaw, `11` roll), field in bits 1-0
//!   (`00` P, `01` I, `10` D, `11` trim)
//!
//! On the wire the gain slot is a raw, untagged 4-byte value; its
//! interpretation (little-endian `f32` or a register byte) depends entirely
//! on the address. [`ParameterTarget`] closes that hole in memory: the
//! decoded variant carries its payload with the right type, so a receiver
//! can never read a register byte as a float or vice versa.

/// Control axis addressed by a PID parameter code (wire bits 3-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StickAxis {
    Pitch,
    Yaw,
    Roll,
}

impl StickAxis {
    /// Wire encoding of this axis (2 bits, never zero).
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Pitch => 0b01,
            Self::Yaw => 0b10,
            Self::Roll => 0b11,
        }
    }

    /// Decode an axis from its 2-bit wire value.
    ///
    /// Total over the masked input: `0b01` is pitch, `0b10` is yaw, anything
    /// else is roll (matching the receiver's fall-through behavior).
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b01 => Self::Pitch,
            0b10 => Self::Yaw,
            _ => Self::Roll,
        }
    }
}

/// PID field addressed by a parameter code (wire bits 1-0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PidField {
    P,
    I,
    D,
    Trim,
}

impl PidField {
    /// Wire encoding of this field (2 bits).
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::P => 0b00,
            Self::I => 0b01,
            Self::D => 0b10,
            Self::Trim => 0b11,
        }
    }

    /// Decode a field from its 2-bit wire value.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::P,
            0b01 => Self::I,
            0b10 => Self::D,
            _ => Self::Trim,
        }
    }
}

/// A decoded parameter address together with its typed payload.
///
/// Every 4-bit code maps to exactly one variant, so decoding never fails.
/// Code `0b0000` is reserved; packets carrying it update nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterTarget {
    /// Reserved code `0b0000`; applying it is a no-op.
    Unused,
    /// Complementary filter gain (continuous).
    Complementary(f32),
    /// Gyro high-pass cutoff register value.
    GyroHighpass(u8),
    /// Accelerometer low-pass ratio register value.
    XlLowpass(u8),
    /// One PID term or trim for a single axis (continuous).
    Pid {
        axis: StickAxis,
        field: PidField,
        gain: f32,
    },
}

impl ParameterTarget {
    /// The 4-bit address code for this target.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Unused => 0b0000,
            Self::Complementary(_) => 0b0001,
            Self::GyroHighpass(_) => 0b0010,
            Self::XlLowpass(_) => 0b0011,
            Self::Pid { axis, field, .. } => (axis.bits() << 2) | field.bits(),
        }
    }

    /// The 4-byte wire representation of this target's payload.
    ///
    /// Continuous gains are little-endian `f32`; register values occupy the
    /// first byte with the rest zeroed; `Unused` is all zeros.
    #[inline]
    #[must_use]
    pub fn gain_bytes(&self) -> [u8; 4] {
        match self {
            Self::Unused => [0; 4],
            Self::Complementary(gain) | Self::Pid { gain, .. } => gain.to_le_bytes(),
            Self::GyroHighpass(value) | Self::XlLowpass(value) => [*value, 0, 0, 0],
        }
    }

    /// Decode an address code plus raw gain slot into a typed target.
    ///
    /// Only the low nibble of `code` is significant. This is total: all 16
    /// codes classify to some variant, so a decoded packet always yields a
    /// usable target.
    #[must_use]
    pub fn from_wire(code: u8, gain: [u8; 4]) -> Self {
        match code & 0x0F {
            0b0000 => Self::Unused,
            0b0001 => Self::Complementary(f32::from_le_bytes(gain)),
            0b0010 => Self::GyroHighpass(gain[0]),
            0b0011 => Self::XlLowpass(gain[0]),
            code => Self::Pid {
                axis: StickAxis::from_bits(code >> 2),
                field: PidField::from_bits(code),
                gain: f32::from_le_bytes(gain),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_codes_match_wire_layout() {
        let pitch_p = ParameterTarget::Pid {
            axis: StickAxis::Pitch,
            field: PidField::P,
            gain: 0.0,
        };
        assert_eq!(pitch_p.code(), 0b0100);

        let yaw_i = ParameterTarget::Pid {
            axis: StickAxis::Yaw,
            field: PidField::I,
            gain: 0.0,
        };
        assert_eq!(yaw_i.code(), 0b1001);

        let roll_trim = ParameterTarget::Pid {
            axis: StickAxis::Roll,
            field: PidField::Trim,
            gain: 0.0,
        };
        assert_eq!(roll_trim.code(), 0b1111);
    }

    #[test]
    fn test_global_codes() {
        assert_eq!(ParameterTarget::Unused.code(), 0b0000);
        assert_eq!(ParameterTarget::Complementary(1.0).code(), 0b0001);
        assert_eq!(ParameterTarget::GyroHighpass(3).code(), 0b0010);
        assert_eq!(ParameterTarget::XlLowpass(7).code(), 0b0011);
    }

    #[test]
    fn test_from_wire_total_over_all_codes() {
        // Every 4-bit code must classify without panicking.
        for code in 0u8..16 {
            let target = ParameterTarget::from_wire(code, [0; 4]);
            assert_eq!(target.code(), code);
        }
    }

    #[test]
    fn test_from_wire_masks_high_nibble() {
        let target = ParameterTarget::from_wire(0xF4, 1.5f32.to_le_bytes());
        assert_eq!(
            target,
            ParameterTarget::Pid {
                axis: StickAxis::Pitch,
                field: PidField::P,
                gain: 1.5,
            }
        );
    }

    #[test]
    fn test_continuous_gain_roundtrip() {
        let target = ParameterTarget::Complementary(0.98);
        let decoded = ParameterTarget::from_wire(target.code(), target.gain_bytes());
        assert_eq!(decoded, target);
    }

    #[test]
    fn test_register_value_roundtrip() {
        let target = ParameterTarget::GyroHighpass(0x09);
        let decoded = ParameterTarget::from_wire(target.code(), target.gain_bytes());
        assert_eq!(decoded, target);

        let target = ParameterTarget::XlLowpass(0x03);
        let decoded = ParameterTarget::from_wire(target.code(), target.gain_bytes());
        assert_eq!(decoded, target);
    }

    #[test]
    fn test_register_payload_occupies_first_byte() {
        assert_eq!(ParameterTarget::GyroHighpass(0xAB).gain_bytes(), [0xAB, 0, 0, 0]);
    }

    #[test]
    fn test_axis_from_bits_fall_through() {
        assert_eq!(StickAxis::from_bits(0b01), StickAxis::Pitch);
        assert_eq!(StickAxis::from_bits(0b10), StickAxis::Yaw);
        assert_eq!(StickAxis::from_bits(0b11), StickAxis::Roll);
        // Unreachable from valid PID codes, but still defined.
        assert_eq!(StickAxis::from_bits(0b00), StickAxis::Roll);
    }
}
