//! Gimbal calibration, command mapping, and parameter handling for the
//! quad remote.
//!
//! This crate turns noisy raw gimbal samples into the deterministic command
//! tuples carried by [`quadlink_proto`] packets, without any
//! platform-specific dependencies. It runs the same on the transmitter MCU
//! and on the host for testing.
//!
//! # Overview
//!
//! - [`types`]: axis sample types ([`RawAxes`], [`CommandAxes`])
//! - [`calibration`]: learned per-axis travel bounds and the expansion
//!   session ([`CalibrationBounds`], [`CalibrationSession`])
//! - [`store`]: the opaque persistence seam ([`CalibrationStore`])
//! - [`mapping`]: throttle and deadband-split stick mapping plus the arm
//!   gesture detector ([`map_axes`], [`is_arm_gesture`])
//! - [`parameters`]: the receiver-side tunables table ([`ParameterTable`])
//! - [`transmitter`]: the per-tick pipeline assembling command packets
//!   ([`Transmitter`])
//!
//! # Data Flow
//!
//! ```text
//! raw ADC sample
//!   -> CalibrationSession::update (only while calibrating)
//!   -> map_axes (deadband, clamping, polarity)
//!   -> is_arm_gesture
//!   -> CommandPacket (via Transmitter::tick)
//!   ...radio...
//!   -> decode_command -> ParameterTable::apply_packet
//! ```
//!
//! # Example
//!
//! ```
//! use quadlink_core::{CalibrationSession, RawAxes, Transmitter};
//!
//! // Sweep the sticks once to learn their travel.
//! let mut session = CalibrationSession::begin(&RawAxes::new(10, 512, 512, 512));
//! session.update(&RawAxes::new(0, 0, 0, 0));
//! session.update(&RawAxes::new(1023, 1023, 1023, 1023));
//!
//! let tx = Transmitter::new(session.finish());
//! let packet = tx.tick(&RawAxes::new(0, 512, 512, 512));
//! assert_eq!(packet.throttle, 0);
//! assert!(!packet.armed);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod calibration;
pub mod mapping;
pub mod parameters;
pub mod store;
pub mod transmitter;
pub mod types;

// Re-export types at crate root for convenience
pub use calibration::{
    CalibrationBounds, CalibrationSession, StickBounds, ThrottleBounds, BOUNDS_RECORD_LEN,
};
pub use mapping::{
    is_arm_gesture, map_axes, map_stick, map_throttle, DEADBAND, STICK_OUT_MAX, STICK_OUT_MIN,
    THROTTLE_OUT_MAX, THROTTLE_OUT_MIN,
};
pub use parameters::{ParameterTable, PidGains};
pub use store::{load_bounds, save_bounds, CalibrationStore, NullStore};
pub use transmitter::Transmitter;
pub use types::{CommandAxes, RawAxes};

// Re-export the proto types most callers need alongside the pipeline.
pub use quadlink_proto::{
    CommandPacket, MotorPosition, ParameterTarget, PidField, StickAxis, TelemetryPacket,
};
