//! nRF52832-specific HAL for the Edgeline GPIO driver
//!
//! This crate implements the `edgeline-hal` traits over the
//! `nrf52832-pac` register blocks:
//!
//! - [`gpio::Port0`] - P0 output/input registers and `PIN_CNF`
//! - [`gpiote::Gpiote`] - GPIOTE channels, `EVENTS_PORT` and `INTENSET`
//! - [`nvic::GpioteLine`] - NVIC line of the GPIOTE interrupt
//!
//! # Usage
//!
//! The driver lives in a static and the GPIOTE vector forwards to it. Bind
//! the vector with whatever interrupt attribute your device crate provides:
//!
//! ```ignore
//! use edgeline_hal_nrf52832::{new_driver, Nrf52832Gpio};
//!
//! static GPIO: Nrf52832Gpio = new_driver(DriverConfig::DEFAULT);
//!
//! #[interrupt]
//! fn GPIOTE() {
//!     GPIO.on_interrupt();
//! }
//! ```

#![no_std]

pub mod gpio;
pub mod gpiote;
pub mod nvic;

use edgeline_core::{DriverConfig, Gpio};

pub use gpio::Port0;
pub use gpiote::Gpiote;
pub use nvic::GpioteLine;

/// Driver over the nRF52832 P0 port and GPIOTE
pub type Nrf52832Gpio = Gpio<Port0, Gpiote, GpioteLine>;

/// Build the driver, usable in a `static` initializer
pub const fn new_driver(config: DriverConfig) -> Nrf52832Gpio {
    Gpio::new(Port0::new(), Gpiote::new(), GpioteLine::new(), config)
}
