//! Board-agnostic GPIO driver with pin-change interrupts
//!
//! This crate contains all driver logic that does not depend on a specific
//! register layout:
//!
//! - Pin configuration and level access
//! - Edge-detect channel allocation (fixed table, registration order)
//! - Level-sense PORT interrupt slot
//! - Event controller activation
//! - Interrupt dispatch to registered handlers
//! - `embedded-hal` pin handles
//!
//! Hardware access goes through the traits in `edgeline-hal`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod driver;
pub mod error;
pub mod irq;
pub mod pin;

#[cfg(test)]
mod mock;

pub use config::{DriverConfig, PinConfig};
pub use driver::Gpio;
pub use error::GpioError;
pub use irq::{ChannelId, IrqHandler};
pub use pin::{Input, Output};

// Hardware-facing types callers need alongside the driver
pub use edgeline_hal::{DriveMode, Polarity, PullMode, WakeMode, CHANNEL_COUNT};
