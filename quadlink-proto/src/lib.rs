//! Radio link packet types, parsing, and serialization for the quad remote.
//!
//! This crate defines the two fixed-layout frames exchanged between the
//! transmitter and the flight controller, plus the 4-bit parameter address
//! space that lets a command frame carry one tuning update per tick:
//!
//! - **Types**: [`CommandPacket`], [`TelemetryPacket`], [`MotorPosition`]
//! - **Addressing**: [`ParameterTarget`] - a tagged view of the parameter
//!   address space, so the polymorphic gain slot is never read with the
//!   wrong type
//! - **Serialization**: the [`Serialize`] trait (buffer, `heapless::Vec`,
//!   `embedded-io` targets)
//! - **Parsing**: [`decode_command`], [`decode_telemetry`], and
//!   [`decode_packet`] for magic-byte dispatch
//!
//! # Wire Format
//!
//! Command frame, 10 bytes:
//!
//! ```text
//! [0]    magic     0x37
//! [1]    flags     bit7 armed, bit6 single-motor, bits5-4 motor select,
//!                  bits3-0 parameter address
//! [2-5]  gain      LE f32 or register byte, interpretation per address
//! [6]    throttle  u8, 0-255
//! [7-9]  pitch, roll, yaw  i8 each, -127..127
//! ```
//!
//! Telemetry frame, 14 bytes:
//!
//! ```text
//! [0]     magic    0xAA
//! [1]     armed    0 or 1
//! [2-13]  pitch_err, roll_err, yaw_err  LE f32 each
//! ```
//!
//! The magic byte is the only integrity marker: a frame failing the magic
//! check is discarded, and corruption after a valid magic byte goes
//! undetected (no checksum by design).
//!
//! # Example
//!
//! ```
//! use quadlink_proto::{
//!     decode_command, CommandPacket, ParameterTarget, PidField, Serialize, StickAxis,
//!     COMMAND_PACKET_LEN,
//! };
//!
//! let packet = CommandPacket {
//!     armed: true,
//!     throttle: 200,
//!     parameter: ParameterTarget::Pid {
//!         axis: StickAxis::Pitch,
//!         field: PidField::P,
//!         gain: 1.5,
//!     },
//!     ..CommandPacket::neutral()
//! };
//!
//! let mut buf = [0u8; COMMAND_PACKET_LEN];
//! let len = packet.serialize(&mut buf).unwrap();
//! assert_eq!(decode_command(&buf[..len]).unwrap(), packet);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//! - **`heapless`**: Enable `serialize_to_vec()` methods
//! - **`embedded-io`**: Enable `serialize_io()` methods for I/O peripherals
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod address;
pub mod parser;
pub mod serialize;
pub mod types;

// Re-export types at crate root for convenience
pub use address::{ParameterTarget, PidField, StickAxis};
pub use parser::{decode_command, decode_packet, decode_telemetry, DecodeError, LinkPacket};
pub use serialize::{Serialize, SerializeError};
pub use types::{
    CommandPacket, MotorPosition, TelemetryPacket, COMMAND_MAGIC, COMMAND_PACKET_LEN,
    TELEMETRY_MAGIC, TELEMETRY_PACKET_LEN,
};
