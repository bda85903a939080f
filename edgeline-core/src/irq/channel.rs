//! Edge-detect channel table
//!
//! Channels are handed out in registration order, so a channel's position
//! in the table is also its hardware channel number. There is no way to
//! release a channel.

use core::fmt;

use edgeline_hal::{Polarity, CHANNEL_COUNT};
use heapless::Vec;

use super::handler::IrqHandler;
use crate::error::GpioError;

/// Hardware channel number of a registered edge interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(u8);

impl ChannelId {
    /// Wrap a raw channel number
    ///
    /// The number is not checked; operations on an id that was never
    /// returned by registration fail with [`GpioError::ChannelNotRegistered`].
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Channel number as an index
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One occupied slot of the table
#[derive(Clone, Copy)]
pub struct Channel {
    pub id: ChannelId,
    pub pin: u8,
    pub polarity: Polarity,
    pub handler: &'static dyn IrqHandler,
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("id", &self.id)
            .field("pin", &self.pin)
            .field("polarity", &self.polarity)
            .finish_non_exhaustive()
    }
}

/// Fixed-capacity table of registered edge channels
///
/// `slots[..len]` are occupied and pin-unique, the length never shrinks.
pub struct ChannelTable {
    slots: Vec<Channel, CHANNEL_COUNT>,
}

impl Default for ChannelTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of registered channels
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no channel has been registered yet
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if every hardware channel is taken
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Channel bound to `pin`, if any
    pub fn find_pin(&self, pin: u8) -> Option<ChannelId> {
        self.slots.iter().find(|ch| ch.pin == pin).map(|ch| ch.id)
    }

    /// Registered channel at `id`
    pub fn get(&self, id: ChannelId) -> Option<&Channel> {
        self.slots.get(id.index())
    }

    /// Handler for hardware channel `index`, `None` past the registered range
    pub fn handler(&self, index: usize) -> Option<&'static dyn IrqHandler> {
        self.slots.get(index).map(|ch| ch.handler)
    }

    /// Iterate registered channels in index order
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.slots.iter()
    }

    /// Id the next registration of `pin` would receive
    ///
    /// Checks capacity first, then pin uniqueness.
    pub fn next_id(&self, pin: u8) -> Result<ChannelId, GpioError> {
        if self.is_full() {
            return Err(GpioError::ChannelTableFull);
        }
        if self.find_pin(pin).is_some() {
            return Err(GpioError::PinAlreadyRegistered);
        }
        Ok(ChannelId(self.slots.len() as u8))
    }

    /// Append a channel for `pin`
    pub fn push(
        &mut self,
        pin: u8,
        polarity: Polarity,
        handler: &'static dyn IrqHandler,
    ) -> Result<ChannelId, GpioError> {
        let id = self.next_id(pin)?;
        self.slots
            .push(Channel {
                id,
                pin,
                polarity,
                handler,
            })
            .map_err(|_| GpioError::ChannelTableFull)?;
        Ok(id)
    }
}
