//! GPIOTE (GPIO tasks and events) for the nRF52832
//!
//! The nRF52 doesn't raise interrupts from GPIO lines directly. Each edge
//! interrupt needs one of the 8 GPIOTE channels bound to the pin in event
//! mode. Level sensing through `PIN_CNF.SENSE` raises the separate
//! `EVENTS_PORT` instead.

use edgeline_hal::{EventController, Polarity};
use nrf52832_pac::{gpiote, GPIOTE};

fn regs() -> &'static gpiote::RegisterBlock {
    // SAFETY: GPIOTE is always mapped; all state that needs exclusion is
    // guarded by the driver's critical section.
    unsafe { &*GPIOTE::ptr() }
}

/// The GPIOTE peripheral
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gpiote {
    _private: (),
}

impl Gpiote {
    /// Handle to GPIOTE
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl EventController for Gpiote {
    fn configure_channel(&self, channel: usize, pin: u8, polarity: Polarity) {
        regs().config[channel].write(|w| {
            let w = w.mode().event();
            match polarity {
                Polarity::Rising => w.polarity().lo_to_hi(),
                Polarity::Falling => w.polarity().hi_to_lo(),
                Polarity::Toggle => w.polarity().toggle(),
            };
            unsafe { w.psel().bits(pin) }
        });
    }

    fn channel_event(&self, channel: usize) -> bool {
        regs().events_in[channel].read().bits() != 0
    }

    fn clear_channel_event(&self, channel: usize) {
        let event = &regs().events_in[channel];
        event.reset();
        // Read back so the clear lands before the ISR returns
        let _ = event.read();
    }

    fn port_event(&self) -> bool {
        regs().events_port.read().bits() != 0
    }

    fn clear_port_event(&self) {
        let event = &regs().events_port;
        event.reset();
        let _ = event.read();
    }

    fn enable_channel_interrupt(&self, channel: usize) {
        regs().intenset.write(|w| unsafe { w.bits(1 << channel) });
    }

    fn enable_port_interrupt(&self) {
        regs().intenset.write(|w| w.port().set());
    }

    fn trigger_set_task(&self, channel: usize) {
        regs().tasks_set[channel].write(|w| unsafe { w.bits(1) });
    }

    fn trigger_clear_task(&self, channel: usize) {
        regs().tasks_clr[channel].write(|w| unsafe { w.bits(1) });
    }
}
