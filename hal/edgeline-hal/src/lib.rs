//! Edgeline Hardware Abstraction Layer
//!
//! This crate defines the register-level traits that chip-specific crates
//! implement for the Edgeline GPIO driver. The driver itself lives in
//! `edgeline-core` and only ever talks to hardware through these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (pin setup, GPIOTE vector)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  edgeline-core (driver, dispatcher)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  edgeline-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ edgeline-hal-     │
//!           │    nrf52832       │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinRegisters`] - Output/input bits and pin configuration
//! - [`event::EventController`] - Edge-detect channels and the PORT event
//! - [`event::InterruptLine`] - The shared interrupt controller line

#![no_std]
#![deny(unsafe_code)]

pub mod event;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use event::{EventController, InterruptLine, Polarity, CHANNEL_COUNT};
pub use gpio::{Direction, DriveMode, PinRegisters, PinSetup, PullMode, WakeMode};
