//! Parsing of received link packets.
//!
//! The only integrity check on this link is the leading magic byte: a frame
//! whose first byte does not match is rejected outright and none of its
//! remaining bytes may be interpreted. Corruption past a valid magic byte is
//! undetectable by design (there is no checksum).

use crate::address::ParameterTarget;
use crate::types::{
    CommandPacket, MotorPosition, TelemetryPacket, COMMAND_MAGIC, COMMAND_PACKET_LEN,
    FLAG_ARMED, FLAG_SINGLE_MOTOR, MOTOR_SELECT_MASK, MOTOR_SELECT_SHIFT, PARAMETER_MASK,
    TELEMETRY_MAGIC, TELEMETRY_PACKET_LEN,
};

/// Error type for packet decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Fewer bytes than the fixed packet layout requires.
    Truncated,
    /// The leading magic byte does not match; the frame is untrusted.
    BadMagic,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Truncated => write!(f, "packet truncated"),
            Self::BadMagic => write!(f, "magic byte mismatch"),
        }
    }
}

/// A decoded frame of either direction, dispatched on the magic byte.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum LinkPacket {
    /// Transmitter-to-receiver command frame (magic `0x37`).
    Command(CommandPacket),
    /// Receiver-to-transmitter telemetry frame (magic `0xAA`).
    Telemetry(TelemetryPacket),
}

/// Decode a command packet from its 10-byte wire layout.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if fewer than
/// [`COMMAND_PACKET_LEN`] bytes are given, or [`DecodeError::BadMagic`] if
/// the first byte is not [`COMMAND_MAGIC`].
pub fn decode_command(bytes: &[u8]) -> Result<CommandPacket, DecodeError> {
    if bytes.len() < COMMAND_PACKET_LEN {
        return Err(DecodeError::Truncated);
    }
    if bytes[0] != COMMAND_MAGIC {
        return Err(DecodeError::BadMagic);
    }

    let flags = bytes[1];
    let mut gain = [0u8; 4];
    gain.copy_from_slice(&bytes[2..6]);

    Ok(CommandPacket {
        armed: flags & FLAG_ARMED != 0,
        single_motor: flags & FLAG_SINGLE_MOTOR != 0,
        motor: MotorPosition::from_bits((flags & MOTOR_SELECT_MASK) >> MOTOR_SELECT_SHIFT),
        parameter: ParameterTarget::from_wire(flags & PARAMETER_MASK, gain),
        throttle: bytes[6],
        pitch: bytes[7] as i8,
        roll: bytes[8] as i8,
        yaw: bytes[9] as i8,
    })
}

/// Decode a telemetry packet from its 14-byte wire layout.
///
/// The armed byte is treated as a boolean: any nonzero value arms.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if fewer than
/// [`TELEMETRY_PACKET_LEN`] bytes are given, or [`DecodeError::BadMagic`] if
/// the first byte is not [`TELEMETRY_MAGIC`].
pub fn decode_telemetry(bytes: &[u8]) -> Result<TelemetryPacket, DecodeError> {
    if bytes.len() < TELEMETRY_PACKET_LEN {
        return Err(DecodeError::Truncated);
    }
    if bytes[0] != TELEMETRY_MAGIC {
        return Err(DecodeError::BadMagic);
    }

    let f32_at = |offset: usize| {
        let mut word = [0u8; 4];
        word.copy_from_slice(&bytes[offset..offset + 4]);
        f32::from_le_bytes(word)
    };

    Ok(TelemetryPacket {
        armed: bytes[1] != 0,
        pitch_err: f32_at(2),
        roll_err: f32_at(6),
        yaw_err: f32_at(10),
    })
}

/// Decode any link packet, dispatching on the magic byte.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] on an empty or short buffer, or
/// [`DecodeError::BadMagic`] if the first byte matches neither magic.
pub fn decode_packet(bytes: &[u8]) -> Result<LinkPacket, DecodeError> {
    match bytes.first() {
        Some(&COMMAND_MAGIC) => decode_command(bytes).map(LinkPacket::Command),
        Some(&TELEMETRY_MAGIC) => decode_telemetry(bytes).map(LinkPacket::Telemetry),
        Some(_) => Err(DecodeError::BadMagic),
        None => Err(DecodeError::Truncated),
    }
}
