//! P0 port registers for the nRF52832
//!
//! The port has dedicated OUTSET/OUTCLR registers, so level writes never
//! need a read-modify-write. There is no toggle register.

use edgeline_hal::{Direction, DriveMode, PinRegisters, PinSetup, PullMode, WakeMode};
use nrf52832_pac::{p0, P0};

fn regs() -> &'static p0::RegisterBlock {
    // SAFETY: P0 is always mapped and every access below is a single
    // register read or write.
    unsafe { &*P0::ptr() }
}

/// The P0 GPIO port
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Port0 {
    _private: (),
}

impl Port0 {
    /// Handle to P0
    ///
    /// Creating more than one is harmless; they all alias the same
    /// registers and every write is a single-register store.
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl PinRegisters for Port0 {
    fn set_outputs(&self, mask: u32) {
        regs().outset.write(|w| unsafe { w.bits(mask) });
    }

    fn clear_outputs(&self, mask: u32) {
        regs().outclr.write(|w| unsafe { w.bits(mask) });
    }

    fn outputs(&self) -> u32 {
        regs().out.read().bits()
    }

    fn inputs(&self) -> u32 {
        regs().in_.read().bits()
    }

    fn write_config(&self, pin: u8, setup: PinSetup) {
        regs().pin_cnf[pin as usize].write(|w| {
            match setup.direction {
                Direction::Input => w.dir().input(),
                Direction::Output => w.dir().output(),
            };
            if setup.input_connected {
                w.input().connect();
            } else {
                w.input().disconnect();
            }
            match setup.pull {
                PullMode::None => w.pull().disabled(),
                PullMode::PullDown => w.pull().pulldown(),
                PullMode::PullUp => w.pull().pullup(),
            };
            match setup.drive {
                DriveMode::PushPull => w.drive().s0s1(),
                DriveMode::OpenDrain => w.drive().s0d1(),
            };
            match setup.sense {
                WakeMode::Disabled => w.sense().disabled(),
                WakeMode::High => w.sense().high(),
                WakeMode::Low => w.sense().low(),
            }
        });
    }
}
