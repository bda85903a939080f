//! Level-sense PORT interrupt slot

use core::fmt;

use super::handler::IrqHandler;

/// The single pin/handler pair served by the PORT event
#[derive(Clone, Copy)]
pub struct PortBinding {
    pub pin: u8,
    pub handler: &'static dyn IrqHandler,
}

impl fmt::Debug for PortBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortBinding")
            .field("pin", &self.pin)
            .finish_non_exhaustive()
    }
}

/// At most one PORT binding; the last one set wins
#[derive(Debug, Default)]
pub struct PortSlot {
    binding: Option<PortBinding>,
}

impl PortSlot {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self { binding: None }
    }

    /// Replace the binding, returning the previous one
    pub fn set(&mut self, pin: u8, handler: &'static dyn IrqHandler) -> Option<PortBinding> {
        self.binding.replace(PortBinding { pin, handler })
    }

    /// Pin currently bound
    pub fn pin(&self) -> Option<u8> {
        self.binding.map(|b| b.pin)
    }

    /// Handler currently bound
    pub fn handler(&self) -> Option<&'static dyn IrqHandler> {
        self.binding.map(|b| b.handler)
    }
}
