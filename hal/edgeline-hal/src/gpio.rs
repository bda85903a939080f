//! GPIO register abstractions
//!
//! Provides the logical pin configuration types and the register-block
//! trait that chip-specific HALs implement. Bit-field encoding of a
//! [`PinSetup`] into the hardware configuration register is left to the
//! implementation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Internal pull resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PullMode {
    /// No pull resistor
    #[default]
    None,
    /// Pull towards ground
    PullDown,
    /// Pull towards supply
    PullUp,
}

/// Output driver selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DriveMode {
    /// Standard drive for both levels
    #[default]
    PushPull,
    /// Standard drive for low, disconnected for high
    OpenDrain,
}

/// Input level sensing, feeds the PORT interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WakeMode {
    /// Sensing disabled
    #[default]
    Disabled,
    /// Sense a high level
    High,
    /// Sense a low level
    Low,
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Complete logical configuration for one pin
///
/// Written to the hardware in a single configuration register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSetup {
    pub direction: Direction,
    /// Input buffer connected
    pub input_connected: bool,
    pub pull: PullMode,
    pub drive: DriveMode,
    pub sense: WakeMode,
}

impl PinSetup {
    /// Output with the input buffer disconnected and sensing off
    pub const fn output(pull: PullMode, drive: DriveMode) -> Self {
        Self {
            direction: Direction::Output,
            input_connected: false,
            pull,
            drive,
            sense: WakeMode::Disabled,
        }
    }

    /// Input with the buffer connected and standard drive
    pub const fn input(pull: PullMode, sense: WakeMode) -> Self {
        Self {
            direction: Direction::Input,
            input_connected: true,
            pull,
            drive: DriveMode::PushPull,
            sense,
        }
    }
}

/// GPIO port register block
///
/// All methods take `&self` because they map onto memory-mapped registers
/// that are shared between thread and interrupt context. The set/clear
/// writes must be single-register writes that only affect the bits in
/// `mask`.
pub trait PinRegisters {
    /// Drive the pins in `mask` high
    fn set_outputs(&self, mask: u32);

    /// Drive the pins in `mask` low
    fn clear_outputs(&self, mask: u32);

    /// Read the output latch for the whole port
    fn outputs(&self) -> u32;

    /// Read the input levels for the whole port
    fn inputs(&self) -> u32;

    /// Write the configuration register for `pin`
    fn write_config(&self, pin: u8, setup: PinSetup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_setup() {
        let setup = PinSetup::output(PullMode::PullUp, DriveMode::OpenDrain);
        assert_eq!(setup.direction, Direction::Output);
        assert!(!setup.input_connected);
        assert_eq!(setup.sense, WakeMode::Disabled);
        assert_eq!(setup.drive, DriveMode::OpenDrain);
    }

    #[test]
    fn test_input_setup() {
        let setup = PinSetup::input(PullMode::PullDown, WakeMode::Low);
        assert_eq!(setup.direction, Direction::Input);
        assert!(setup.input_connected);
        assert_eq!(setup.drive, DriveMode::PushPull);
        assert_eq!(setup.sense, WakeMode::Low);
    }
}
