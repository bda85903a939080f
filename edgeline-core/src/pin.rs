//! Single-pin handles
//!
//! Borrowed views of one pin that implement the `embedded-hal` 1.0 digital
//! traits, so generic drivers can run on top of [`Gpio`]. The pin number is
//! validated when the handle is created, which makes every trait method
//! infallible.

use core::convert::Infallible;

use edgeline_hal::{DriveMode, PinRegisters, PullMode, WakeMode};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::config::PinConfig;
use crate::driver::Gpio;
use crate::error::GpioError;

/// Output pin borrowed from a [`Gpio`]
pub struct Output<'a, P, E, L> {
    gpio: &'a Gpio<P, E, L>,
    pin: u8,
    mask: u32,
}

/// Input pin borrowed from a [`Gpio`]
pub struct Input<'a, P, E, L> {
    gpio: &'a Gpio<P, E, L>,
    pin: u8,
    mask: u32,
}

impl<P, E, L> Gpio<P, E, L>
where
    P: PinRegisters,
{
    /// Configure `pin` as an output and return a handle to it
    pub fn output_pin(
        &self,
        pin: u8,
        pull: PullMode,
        drive: DriveMode,
    ) -> Result<Output<'_, P, E, L>, GpioError> {
        self.configure_output(pin, pull, drive)?;
        let mask = self.pin_mask(pin)?;
        Ok(Output {
            gpio: self,
            pin,
            mask,
        })
    }

    /// Configure `pin` as an input and return a handle to it
    pub fn input_pin(
        &self,
        pin: u8,
        pull: PullMode,
        wake: WakeMode,
    ) -> Result<Input<'_, P, E, L>, GpioError> {
        self.configure_input(pin, pull, wake)?;
        let mask = self.pin_mask(pin)?;
        Ok(Input {
            gpio: self,
            pin,
            mask,
        })
    }
}

/// Board pins described by a [`PinConfig`]
///
/// These apply the configured pull-up and map logical active/inactive
/// states through the pin's polarity.
impl<P, E, L> Gpio<P, E, L>
where
    P: PinRegisters,
{
    /// Configure a board pin as an output, starting in the `active` state
    ///
    /// The level is latched before the pin switches to output, so it
    /// never passes through the opposite state.
    pub fn output_pin_from(
        &self,
        config: &PinConfig,
        drive: DriveMode,
        active: bool,
    ) -> Result<Output<'_, P, E, L>, GpioError> {
        let mask = self.pin_mask(config.pin)?;
        self.write_mask(mask, config.level_for(active));
        self.output_pin(config.pin, config.pull_mode(), drive)
    }

    /// Configure a board pin as an input
    pub fn input_pin_from(
        &self,
        config: &PinConfig,
        wake: WakeMode,
    ) -> Result<Input<'_, P, E, L>, GpioError> {
        self.input_pin(config.pin, config.pull_mode(), wake)
    }

    /// Drive a board pin to its logical `active` state
    pub fn set_active(&self, config: &PinConfig, active: bool) -> Result<(), GpioError> {
        self.set(config.pin, config.level_for(active))
    }

    /// Logical state seen on a board pin's input
    pub fn is_active(&self, config: &PinConfig) -> Result<bool, GpioError> {
        Ok(config.level_for(self.read_input(config.pin)?))
    }
}

impl<P, E, L> Output<'_, P, E, L> {
    /// Pin number
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl<P, E, L> Input<'_, P, E, L> {
    /// Pin number
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl<P, E, L> ErrorType for Output<'_, P, E, L> {
    type Error = Infallible;
}

impl<P: PinRegisters, E, L> OutputPin for Output<'_, P, E, L> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.gpio.write_mask(self.mask, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.gpio.write_mask(self.mask, true);
        Ok(())
    }
}

impl<P: PinRegisters, E, L> StatefulOutputPin for Output<'_, P, E, L> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.port().outputs() & self.mask != 0)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.port().outputs() & self.mask == 0)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.gpio.toggle_mask(self.mask);
        Ok(())
    }
}

impl<P, E, L> ErrorType for Input<'_, P, E, L> {
    type Error = Infallible;
}

impl<P: PinRegisters, E, L> InputPin for Input<'_, P, E, L> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.port().inputs() & self.mask != 0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.port().inputs() & self.mask == 0)
    }
}
