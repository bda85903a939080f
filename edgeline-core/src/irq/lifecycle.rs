//! Event controller activation
//!
//! The event controller and its interrupt line stay dormant until the
//! first interrupt is configured. Activation wipes every latched event so
//! stale edges from before configuration never reach a handler.

use edgeline_hal::{EventController, InterruptLine, CHANNEL_COUNT};

/// Tracks whether the event controller has been brought up
#[derive(Debug, Default)]
pub struct Lifecycle {
    active: bool,
}

impl Lifecycle {
    /// Create a dormant lifecycle
    pub const fn new() -> Self {
        Self { active: false }
    }

    /// Check if activation has run
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clear every event flag and enable the shared interrupt line
    ///
    /// Always clears flags, even when already active.
    pub fn activate<E, L>(&mut self, events: &E, line: &L, priority: u8)
    where
        E: EventController,
        L: InterruptLine,
    {
        for channel in 0..CHANNEL_COUNT {
            events.clear_channel_event(channel);
        }
        events.clear_port_event();

        line.set_priority(priority);
        line.clear_pending();
        line.enable();

        self.active = true;
        debug!("event controller active, priority {}", priority);
    }

    /// Activate only if this has never run
    ///
    /// Returns true if activation happened now.
    pub fn ensure_active<E, L>(&mut self, events: &E, line: &L, priority: u8) -> bool
    where
        E: EventController,
        L: InterruptLine,
    {
        if self.active {
            return false;
        }
        self.activate(events, line, priority);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{GpioteOp, MockGpiote, MockLine};

    #[test]
    fn test_activate_clears_and_enables() {
        let events = MockGpiote::new();
        let line = MockLine::new();
        events.raise_channel_event(2);
        events.raise_port_event();

        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.is_active());
        lifecycle.activate(&events, &line, 5);

        assert!(lifecycle.is_active());
        assert!(!events.channel_event(2));
        assert!(!events.port_event());
        assert_eq!(line.priority(), Some(5));
        assert_eq!(line.clear_pending_calls(), 1);
        assert!(line.is_enabled());
    }

    #[test]
    fn test_ensure_active_runs_once() {
        let events = MockGpiote::new();
        let line = MockLine::new();
        let mut lifecycle = Lifecycle::new();

        assert!(lifecycle.ensure_active(&events, &line, 3));
        events.raise_channel_event(1);
        assert!(!lifecycle.ensure_active(&events, &line, 3));

        // Second call must not touch pending events
        assert!(events.channel_event(1));
        assert_eq!(line.enable_calls(), 1);
    }

    #[test]
    fn test_activate_always_clears() {
        let events = MockGpiote::new();
        let line = MockLine::new();
        let mut lifecycle = Lifecycle::new();

        lifecycle.activate(&events, &line, 3);
        events.raise_channel_event(6);
        lifecycle.activate(&events, &line, 3);

        assert!(!events.channel_event(6));
        assert!(line.is_enabled());
        assert_eq!(line.enable_calls(), 2);
        assert_eq!(
            events.ops().iter().filter(|op| **op == GpioteOp::ClearPort).count(),
            2
        );
    }
}
