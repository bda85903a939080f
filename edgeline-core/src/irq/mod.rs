//! Pin-change interrupts
//!
//! Two interrupt paths share one event controller and one interrupt line:
//!
//! - Edge channels: up to [`CHANNEL_COUNT`](edgeline_hal::CHANNEL_COUNT)
//!   pins, each bound to a hardware edge-detect channel with its own handler.
//! - PORT: a single level-sense handler fed by any input configured with a
//!   wake mode.
//!
//! All bookkeeping is mutated inside one critical section per call. Within
//! it, a slot is fully written before its interrupt is unmasked, so the
//! dispatcher never sees a half-registered channel.

mod dispatch;

pub mod channel;
pub mod handler;
pub mod lifecycle;
pub mod port;

pub use channel::{Channel, ChannelId, ChannelTable};
pub use handler::IrqHandler;
pub use lifecycle::Lifecycle;
pub use port::{PortBinding, PortSlot};

use edgeline_hal::{EventController, InterruptLine, Polarity};

use crate::driver::Gpio;
use crate::error::GpioError;

impl<P, E, L> Gpio<P, E, L>
where
    E: EventController,
    L: InterruptLine,
{
    /// Bind an edge interrupt on `pin` to `handler`
    ///
    /// Channels are numbered in registration order. The first registration
    /// also brings up the event controller. The pin is not reconfigured;
    /// the event controller takes control of it while the channel is bound.
    ///
    /// # Errors
    /// - `InvalidPin` if `pin` is out of range
    /// - `ChannelTableFull` if all channels are taken
    /// - `PinAlreadyRegistered` if `pin` already has a channel
    pub fn register_channel(
        &self,
        pin: u8,
        polarity: Polarity,
        handler: &'static dyn IrqHandler,
    ) -> Result<ChannelId, GpioError> {
        self.pin_mask(pin)?;
        let priority = self.config().irq_priority;

        let result = self.irq.lock(|state| -> Result<ChannelId, GpioError> {
            let id = {
                let mut state = state.borrow_mut();
                let id = state.channels.next_id(pin)?;

                if state.channels.is_empty() {
                    state
                        .lifecycle
                        .ensure_active(self.events(), self.line(), priority);
                }

                self.events().configure_channel(id.index(), pin, polarity);
                self.events().clear_channel_event(id.index());
                state.channels.push(pin, polarity, handler)?
            };

            // Slot is stored and the borrow released before unmasking
            self.events().enable_channel_interrupt(id.index());
            Ok(id)
        });

        match result {
            Ok(id) => debug!("pin {} bound to channel {}", pin, id.index()),
            Err(e) => warn!("pin {} not bound: {}", pin, e),
        }
        result
    }

    /// Trigger the SET task of a registered channel
    ///
    /// This drives the channel's task, not its interrupt mask. What the
    /// task does to a channel in event mode is up to the hardware.
    pub fn enable_channel(&self, id: ChannelId) -> Result<(), GpioError> {
        self.with_registered(id, |events, channel| events.trigger_set_task(channel))
    }

    /// Trigger the CLR task of a registered channel
    ///
    /// See [`Gpio::enable_channel`] for caveats.
    pub fn disable_channel(&self, id: ChannelId) -> Result<(), GpioError> {
        self.with_registered(id, |events, channel| events.trigger_clear_task(channel))
    }

    /// Bind the level-sense PORT interrupt to `handler`
    ///
    /// Replaces any previous PORT binding. `pin` must already be an input
    /// with a wake mode, otherwise the event never fires. The event
    /// controller is brought up if needed; once it is up, pending edge
    /// events are left alone.
    pub fn configure_port_interrupt(
        &self,
        pin: u8,
        handler: &'static dyn IrqHandler,
    ) -> Result<(), GpioError> {
        self.pin_mask(pin)?;
        let priority = self.config().irq_priority;

        self.irq.lock(|state| {
            {
                let mut state = state.borrow_mut();
                state
                    .lifecycle
                    .ensure_active(self.events(), self.line(), priority);
                self.events().clear_port_event();
                if let Some(previous) = state.port.set(pin, handler) {
                    debug!("PORT interrupt moved from pin {}", previous.pin);
                }
            }
            self.events().enable_port_interrupt();
        });

        debug!("PORT interrupt on pin {}", pin);
        Ok(())
    }

    /// Channel bound to `pin`, if any
    pub fn channel_for_pin(&self, pin: u8) -> Option<ChannelId> {
        self.irq.lock(|state| state.borrow().channels.find_pin(pin))
    }

    /// Number of registered edge channels
    pub fn channel_count(&self) -> usize {
        self.irq.lock(|state| state.borrow().channels.len())
    }

    /// Pin served by the PORT interrupt, if configured
    pub fn port_interrupt_pin(&self) -> Option<u8> {
        self.irq.lock(|state| state.borrow().port.pin())
    }

    fn with_registered(
        &self,
        id: ChannelId,
        f: impl FnOnce(&E, usize),
    ) -> Result<(), GpioError> {
        self.irq.lock(|state| {
            if state.borrow().channels.get(id).is_none() {
                return Err(GpioError::ChannelNotRegistered);
            }
            f(self.events(), id.index());
            Ok(())
        })
    }
}
