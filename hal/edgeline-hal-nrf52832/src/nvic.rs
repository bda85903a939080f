//! NVIC line of the GPIOTE interrupt

use cortex_m::peripheral::NVIC;
use edgeline_hal::InterruptLine;
use nrf52832_pac::{Interrupt, NVIC_PRIO_BITS};

/// Convert a logical priority (0..=7) to the NVIC register value
pub const fn hw_priority(priority: u8) -> u8 {
    let max = (1 << NVIC_PRIO_BITS) - 1;
    let priority = if priority > max { max } else { priority };
    priority << (8 - NVIC_PRIO_BITS)
}

/// The GPIOTE interrupt line
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioteLine {
    _private: (),
}

impl GpioteLine {
    /// Handle to the GPIOTE line
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterruptLine for GpioteLine {
    fn set_priority(&self, priority: u8) {
        // SAFETY: a single byte write to the GPIOTE priority register,
        // done before the line is enabled. Going through the register
        // block leaves the `cortex_m::Peripherals` singleton untaken.
        unsafe {
            (*NVIC::PTR).ipr[Interrupt::GPIOTE as usize].write(hw_priority(priority));
        }
    }

    fn clear_pending(&self) {
        NVIC::unpend(Interrupt::GPIOTE);
    }

    fn enable(&self) {
        // SAFETY: the dispatcher is in place before any channel or PORT
        // interrupt can be unmasked, so nothing unhandled can fire.
        unsafe { NVIC::unmask(Interrupt::GPIOTE) }
    }
}
