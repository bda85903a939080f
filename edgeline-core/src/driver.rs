//! GPIO driver
//!
//! [`Gpio`] owns the register adapters and all interrupt bookkeeping. It is
//! meant to live in a `static` shared by thread code and the event
//! interrupt vector:
//!
//! ```ignore
//! static GPIO: Gpio<Port, Gpiote, Line> =
//!     Gpio::new(Port, Gpiote, Line, DriverConfig::DEFAULT);
//!
//! fn gpiote_vector() {
//!     GPIO.on_interrupt();
//! }
//! ```

use core::cell::RefCell;

use edgeline_hal::{DriveMode, PinRegisters, PinSetup, PullMode, WakeMode};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::config::DriverConfig;
use crate::error::GpioError;
use crate::irq::{ChannelTable, Lifecycle, PortSlot};

/// Interrupt bookkeeping shared with the dispatcher
pub(crate) struct IrqState {
    pub channels: ChannelTable,
    pub port: PortSlot,
    pub lifecycle: Lifecycle,
}

impl IrqState {
    const fn new() -> Self {
        Self {
            channels: ChannelTable::new(),
            port: PortSlot::new(),
            lifecycle: Lifecycle::new(),
        }
    }
}

/// GPIO port driver with pin-change interrupts
///
/// Generic parameters:
/// - `P`: port registers (levels and pin configuration)
/// - `E`: event controller (edge channels and the PORT event)
/// - `L`: interrupt line shared by all event sources
pub struct Gpio<P, E, L> {
    port: P,
    events: E,
    line: L,
    config: DriverConfig,
    pub(crate) irq: Mutex<CriticalSectionRawMutex, RefCell<IrqState>>,
}

impl<P, E, L> Gpio<P, E, L> {
    /// Create a new driver
    ///
    /// Nothing is written to the hardware until a pin or interrupt is
    /// configured.
    pub const fn new(port: P, events: E, line: L, config: DriverConfig) -> Self {
        Self {
            port,
            events,
            line,
            config,
            irq: Mutex::new(RefCell::new(IrqState::new())),
        }
    }

    /// Driver configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Port register adapter
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Event controller adapter
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Interrupt line adapter
    pub fn line(&self) -> &L {
        &self.line
    }

    /// Bit mask for `pin`, or `InvalidPin` if out of range
    pub(crate) fn pin_mask(&self, pin: u8) -> Result<u32, GpioError> {
        if !self.config.is_valid_pin(pin) {
            return Err(GpioError::InvalidPin);
        }
        Ok(1 << pin)
    }
}

impl<P, E, L> Gpio<P, E, L>
where
    P: PinRegisters,
{
    /// Configure `pin` as an output
    ///
    /// The input buffer is disconnected and level sensing disabled.
    pub fn configure_output(
        &self,
        pin: u8,
        pull: PullMode,
        drive: DriveMode,
    ) -> Result<(), GpioError> {
        self.pin_mask(pin)?;
        self.port.write_config(pin, PinSetup::output(pull, drive));
        Ok(())
    }

    /// Configure `pin` as an input
    ///
    /// A `wake` other than [`WakeMode::Disabled`] lets the pin raise the
    /// PORT event.
    pub fn configure_input(
        &self,
        pin: u8,
        pull: PullMode,
        wake: WakeMode,
    ) -> Result<(), GpioError> {
        self.pin_mask(pin)?;
        self.port.write_config(pin, PinSetup::input(pull, wake));
        Ok(())
    }

    /// Drive `pin` high
    pub fn set_high(&self, pin: u8) -> Result<(), GpioError> {
        let mask = self.pin_mask(pin)?;
        self.port.set_outputs(mask);
        Ok(())
    }

    /// Drive `pin` low
    pub fn set_low(&self, pin: u8) -> Result<(), GpioError> {
        let mask = self.pin_mask(pin)?;
        self.port.clear_outputs(mask);
        Ok(())
    }

    /// Drive `pin` to `high`
    pub fn set(&self, pin: u8, high: bool) -> Result<(), GpioError> {
        let mask = self.pin_mask(pin)?;
        self.write_mask(mask, high);
        Ok(())
    }

    /// Invert the output level of `pin`
    ///
    /// The port has no toggle register, so this reads the output latch
    /// and writes set/clear inside a critical section.
    pub fn toggle(&self, pin: u8) -> Result<(), GpioError> {
        let mask = self.pin_mask(pin)?;
        self.toggle_mask(mask);
        Ok(())
    }

    /// Read the input level of `pin`
    pub fn read_input(&self, pin: u8) -> Result<bool, GpioError> {
        let mask = self.pin_mask(pin)?;
        Ok(self.port.inputs() & mask != 0)
    }

    /// Read the output latch of `pin`
    pub fn read_output(&self, pin: u8) -> Result<bool, GpioError> {
        let mask = self.pin_mask(pin)?;
        Ok(self.port.outputs() & mask != 0)
    }

    pub(crate) fn write_mask(&self, mask: u32, high: bool) {
        if high {
            self.port.set_outputs(mask);
        } else {
            self.port.clear_outputs(mask);
        }
    }

    pub(crate) fn toggle_mask(&self, mask: u32) {
        critical_section::with(|_| {
            let out = self.port.outputs();
            self.port.set_outputs(!out & mask);
            self.port.clear_outputs(out & mask);
        });
    }
}
