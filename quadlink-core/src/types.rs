//! Core axis sample types: [`RawAxes`] and [`CommandAxes`].

/// One raw gimbal sample, all four axes in sensor-native units.
///
/// Values come straight from the ADC (0-1023 on 10-bit hardware), after any
/// upstream signal conditioning. Nothing here is calibrated or centered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAxes {
    pub throttle: u16,
    pub pitch: u16,
    pub roll: u16,
    pub yaw: u16,
}

impl RawAxes {
    #[must_use]
    pub const fn new(throttle: u16, pitch: u16, roll: u16, yaw: u16) -> Self {
        Self {
            throttle,
            pitch,
            roll,
            yaw,
        }
    }
}

/// One mapped command tuple, ready for the wire.
///
/// Throttle is 0-255; pitch, roll, and yaw are deadband-compensated
/// -127..127 values with zero meaning stick at calibrated center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandAxes {
    pub throttle: u8,
    pub pitch: i8,
    pub roll: i8,
    pub yaw: i8,
}

impl CommandAxes {
    /// Throttle down, all sticks at center.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            throttle: 0,
            pitch: 0,
            roll: 0,
            yaw: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_command_axes() {
        let axes = CommandAxes::neutral();
        assert_eq!(axes.throttle, 0);
        assert_eq!(axes.pitch, 0);
        assert_eq!(axes.roll, 0);
        assert_eq!(axes.yaw, 0);
    }
}
