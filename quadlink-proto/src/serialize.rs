//! Serialization of link packets to their fixed binary layouts.
//!
//! # Wire Format
//!
//! Command packet (10 bytes):
//!
//! ```text
//! [0]    magic          0x37
//! [1]    flags          bit7 armed, bit6 single-motor, bits5-4 motor, bits3-0 parameter address
//! [2-5]  gain           LE f32 or register byte, per parameter address
//! [6]    throttle       u8
//! [7-9]  pitch/roll/yaw i8 each
//! ```
//!
//! Telemetry packet (14 bytes):
//!
//! ```text
//! [0]     magic     0xAA
//! [1]     armed     0 or 1
//! [2-13]  pitch/roll/yaw error, LE f32 each
//! ```
//!
//! There is no checksum on this link; the magic byte is the only integrity
//! marker the receiver can check.

use crate::types::{
    CommandPacket, TelemetryPacket, COMMAND_MAGIC, COMMAND_PACKET_LEN, TELEMETRY_MAGIC,
    TELEMETRY_PACKET_LEN,
};

/// Error type for serialization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerializeError {
    /// The output buffer is too small to hold the serialized packet.
    BufferTooSmall,
    /// A write operation failed (for I/O adapters).
    WriteError,
}

impl core::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "buffer too small"),
            Self::WriteError => write!(f, "write error"),
        }
    }
}

/// Extension trait for serializing link packets.
///
/// Implemented for [`CommandPacket`] and [`TelemetryPacket`].
///
/// # Example
///
/// ```
/// use quadlink_proto::{CommandPacket, Serialize, COMMAND_PACKET_LEN};
///
/// let packet = CommandPacket::neutral();
/// let mut buf = [0u8; COMMAND_PACKET_LEN];
/// let len = packet.serialize(&mut buf).unwrap();
/// assert_eq!(len, COMMAND_PACKET_LEN);
/// assert_eq!(buf[0], 0x37);
/// ```
pub trait Serialize {
    /// Serialize to the provided buffer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if the buffer is not large
    /// enough.
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError>;

    /// Serialize to a `heapless::Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if `N` is not large enough.
    #[cfg(feature = "heapless")]
    fn serialize_to_vec<const N: usize>(&self) -> Result<heapless::Vec<u8, N>, SerializeError> {
        let mut vec = heapless::Vec::new();
        vec.resize(N, 0)
            .map_err(|_| SerializeError::BufferTooSmall)?;
        let len = self.serialize(&mut vec)?;
        vec.truncate(len);
        Ok(vec)
    }

    /// Serialize to an `embedded_io::Write` implementation.
    ///
    /// This can be used with UART or other I/O peripherals.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::WriteError`] if the write fails.
    #[cfg(feature = "embedded-io")]
    fn serialize_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), SerializeError>;
}

impl Serialize for CommandPacket {
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        if buf.len() < COMMAND_PACKET_LEN {
            return Err(SerializeError::BufferTooSmall);
        }

        buf[0] = COMMAND_MAGIC;
        buf[1] = self.flags_byte();
        buf[2..6].copy_from_slice(&self.parameter.gain_bytes());
        buf[6] = self.throttle;
        buf[7] = self.pitch as u8;
        buf[8] = self.roll as u8;
        buf[9] = self.yaw as u8;

        Ok(COMMAND_PACKET_LEN)
    }

    #[cfg(feature = "embedded-io")]
    fn serialize_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), SerializeError> {
        let mut buf = [0u8; COMMAND_PACKET_LEN];
        let len = self.serialize(&mut buf)?;
        writer
            .write_all(&buf[..len])
            .map_err(|_| SerializeError::WriteError)
    }
}

impl Serialize for TelemetryPacket {
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        if buf.len() < TELEMETRY_PACKET_LEN {
            return Err(SerializeError::BufferTooSmall);
        }

        buf[0] = TELEMETRY_MAGIC;
        buf[1] = self.armed as u8;
        buf[2..6].copy_from_slice(&self.pitch_err.to_le_bytes());
        buf[6..10].copy_from_slice(&self.roll_err.to_le_bytes());
        buf[10..14].copy_from_slice(&self.yaw_err.to_le_bytes());

        Ok(TELEMETRY_PACKET_LEN)
    }

    #[cfg(feature = "embedded-io")]
    fn serialize_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), SerializeError> {
        let mut buf = [0u8; TELEMETRY_PACKET_LEN];
        let len = self.serialize(&mut buf)?;
        writer
            .write_all(&buf[..len])
            .map_err(|_| SerializeError::WriteError)
    }
}
