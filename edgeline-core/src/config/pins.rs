//! Pin descriptions for board configuration
//!
//! Pins are named the way the nRF datasheets name them ("P0.13"), with
//! optional modifier prefixes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use edgeline_hal::PullMode;

use super::types::MAX_PIN;

/// A board pin with its polarity and pull-up
///
/// Build one with [`PinConfig::new`] and the modifiers, or from a
/// board-config string with [`parse_pin_string`]. Hand it to
/// [`Gpio::output_pin_from`](crate::Gpio::output_pin_from) or
/// [`Gpio::input_pin_from`](crate::Gpio::input_pin_from).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// P0 pin number
    pub pin: u8,
    /// Active state is the low level
    pub active_low: bool,
    /// Internal pull-up enabled
    pub pull_up: bool,
}

impl PinConfig {
    /// Active-high pin without pull
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            active_low: false,
            pull_up: false,
        }
    }

    /// Same pin, active-low
    pub const fn inverted(self) -> Self {
        Self {
            active_low: true,
            ..self
        }
    }

    /// Same pin, with the pull-up enabled
    pub const fn pulled_up(self) -> Self {
        Self {
            pull_up: true,
            ..self
        }
    }

    /// Pull resistor to configure for this pin
    pub const fn pull_mode(&self) -> PullMode {
        if self.pull_up {
            PullMode::PullUp
        } else {
            PullMode::None
        }
    }

    /// Electrical level for a logical state, or the reverse
    pub const fn level_for(&self, active: bool) -> bool {
        active != self.active_low
    }
}

/// Parse a board-config pin name
///
/// `"P0.13"` is pin 13. A leading `!` marks it active-low and a `^` after
/// that enables the pull-up, so `"!^P0.13"` sets both.
pub fn parse_pin_string(s: &str) -> Option<PinConfig> {
    let s = s.trim();
    let (s, active_low) = strip_flag(s, '!');
    let (s, pull_up) = strip_flag(s, '^');

    let pin: u8 = s.strip_prefix("P0.")?.parse().ok()?;
    if pin > MAX_PIN {
        return None;
    }

    Some(PinConfig {
        pin,
        active_low,
        pull_up,
    })
}

fn strip_flag(s: &str, flag: char) -> (&str, bool) {
    match s.strip_prefix(flag) {
        Some(rest) => (rest, true),
        None => (s, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin_string() {
        assert_eq!(parse_pin_string("P0.13"), Some(PinConfig::new(13)));
        assert_eq!(
            parse_pin_string("!P0.17"),
            Some(PinConfig::new(17).inverted())
        );
        assert_eq!(
            parse_pin_string("^P0.4"),
            Some(PinConfig::new(4).pulled_up())
        );
        assert_eq!(parse_pin_string(" P0.0 "), Some(PinConfig::new(0)));
        assert_eq!(parse_pin_string("P0.31"), Some(PinConfig::new(31)));
        assert_eq!(
            parse_pin_string("!^P0.2"),
            Some(PinConfig::new(2).inverted().pulled_up())
        );

        // Invalid
        assert_eq!(parse_pin_string("P0.32"), None);
        assert_eq!(parse_pin_string("P1.3"), None);
        assert_eq!(parse_pin_string("gpio11"), None);
        assert_eq!(parse_pin_string("^!P0.2"), None);
        assert_eq!(parse_pin_string(""), None);
    }

    #[test]
    fn test_pull_mode() {
        assert_eq!(PinConfig::new(1).pull_mode(), PullMode::None);
        assert_eq!(PinConfig::new(1).pulled_up().pull_mode(), PullMode::PullUp);
    }

    #[test]
    fn test_level_for_active_low() {
        let normal = PinConfig::new(5);
        assert!(normal.level_for(true));
        assert!(!normal.level_for(false));

        let inverted = PinConfig::new(5).inverted();
        assert!(!inverted.level_for(true));
        assert!(inverted.level_for(false));
    }
}
