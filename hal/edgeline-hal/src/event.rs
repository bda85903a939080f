//! Pin event abstractions
//!
//! The event controller owns a small number of edge-detect channels, each
//! bound to one pin, plus a single PORT event raised by level sensing on
//! any pin. All sources share one interrupt line.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of edge-detect channels in the event controller
pub const CHANNEL_COUNT: usize = 8;

/// Edge that arms a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Low to high transition
    Rising,
    /// High to low transition
    Falling,
    /// Any transition
    Toggle,
}

/// Edge-detect event controller
///
/// `channel` is always below [`CHANNEL_COUNT`]; callers guarantee it.
pub trait EventController {
    /// Bind `channel` to `pin` in event mode with the given polarity
    fn configure_channel(&self, channel: usize, pin: u8, polarity: Polarity);

    /// Check the latched event flag for `channel`
    fn channel_event(&self, channel: usize) -> bool;

    /// Clear the latched event flag for `channel`
    fn clear_channel_event(&self, channel: usize);

    /// Check the latched PORT event flag
    fn port_event(&self) -> bool;

    /// Clear the latched PORT event flag
    fn clear_port_event(&self);

    /// Unmask the interrupt for `channel`
    fn enable_channel_interrupt(&self, channel: usize);

    /// Unmask the PORT interrupt
    fn enable_port_interrupt(&self);

    /// Trigger the SET task of `channel`
    fn trigger_set_task(&self, channel: usize);

    /// Trigger the CLR task of `channel`
    fn trigger_clear_task(&self, channel: usize);
}

/// The interrupt controller line shared by all event sources
pub trait InterruptLine {
    /// Set the line priority (0 is most urgent)
    fn set_priority(&self, priority: u8);

    /// Drop any pending request on the line
    fn clear_pending(&self);

    /// Enable the line
    fn enable(&self);
}
