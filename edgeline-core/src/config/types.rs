//! Driver configuration
//!
//! Settings fixed at construction time. The driver is usually built in a
//! `const` context, so everything here has a `const` constructor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest pin number on a single 32-bit port
pub const MAX_PIN: u8 = 31;

/// Default priority for the shared event interrupt (0..=7, 0 most urgent)
pub const DEFAULT_IRQ_PRIORITY: u8 = 3;

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Highest valid pin number, clamped to [`MAX_PIN`]
    pub max_pin: u8,
    /// Priority programmed into the shared interrupt line on activation
    pub irq_priority: u8,
}

impl DriverConfig {
    /// Full 32-pin port at the default priority
    pub const DEFAULT: Self = Self::new(MAX_PIN, DEFAULT_IRQ_PRIORITY);

    /// Create a new driver config
    pub const fn new(max_pin: u8, irq_priority: u8) -> Self {
        Self {
            max_pin: if max_pin > MAX_PIN { MAX_PIN } else { max_pin },
            irq_priority,
        }
    }

    /// Same config with a different interrupt priority
    pub const fn with_irq_priority(self, irq_priority: u8) -> Self {
        Self::new(self.max_pin, irq_priority)
    }

    /// Check if `pin` is addressable with this config
    ///
    /// Bounded by [`MAX_PIN`] as well, since `max_pin` is a public field
    /// and can be set without going through [`DriverConfig::new`].
    pub const fn is_valid_pin(&self, pin: u8) -> bool {
        pin <= self.max_pin && pin <= MAX_PIN
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
