//! Event interrupt dispatcher

use edgeline_hal::{EventController, CHANNEL_COUNT};

use super::handler::IrqHandler;
use crate::driver::Gpio;

impl<P, E, L> Gpio<P, E, L>
where
    E: EventController,
{
    /// Service the event interrupt
    ///
    /// Call this from the event controller's interrupt vector. The PORT
    /// event is checked first, then every hardware channel in index order.
    /// Each latched flag is cleared before its handler runs so an edge
    /// arriving during the handler latches again instead of being lost.
    /// Flags on channels that were never registered are cleared and
    /// dropped.
    ///
    /// Handlers are called outside the critical section and may call back
    /// into the driver.
    pub fn on_interrupt(&self) {
        if let Some(handler) = self.take_port_event() {
            handler.on_irq();
        }

        for channel in 0..CHANNEL_COUNT {
            if let Some(handler) = self.take_channel_event(channel) {
                handler.on_irq();
            }
        }
    }

    fn take_port_event(&self) -> Option<&'static dyn IrqHandler> {
        self.irq.lock(|state| {
            if !self.events().port_event() {
                return None;
            }
            self.events().clear_port_event();
            trace!("PORT event");
            state.borrow().port.handler()
        })
    }

    fn take_channel_event(&self, channel: usize) -> Option<&'static dyn IrqHandler> {
        self.irq.lock(|state| {
            if !self.events().channel_event(channel) {
                return None;
            }
            self.events().clear_channel_event(channel);
            let handler = state.borrow().channels.handler(channel);
            if handler.is_none() {
                trace!("dropped event on unregistered channel {}", channel);
            }
            handler
        })
    }
}
