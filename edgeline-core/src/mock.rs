//! Mock hardware for host tests
//!
//! Registers are plain `Cell`s. The event controller also keeps a log of
//! every write so tests can check ordering.

use core::cell::{Cell, RefCell};
use core::sync::atomic::{AtomicU32, Ordering};

use edgeline_hal::{
    EventController, InterruptLine, PinRegisters, PinSetup, Polarity, CHANNEL_COUNT,
};
use heapless::Vec;

use crate::config::DriverConfig;
use crate::irq::IrqHandler;
use crate::Gpio;

pub type MockGpio = Gpio<MockPort, MockGpiote, MockLine>;

/// Driver over fresh mock hardware with the default config
pub fn mock_gpio() -> MockGpio {
    Gpio::new(
        MockPort::new(),
        MockGpiote::new(),
        MockLine::new(),
        DriverConfig::DEFAULT,
    )
}

/// Handler that counts invocations
pub struct Counter(AtomicU32);

impl Counter {
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    pub fn count(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl IrqHandler for Counter {
    fn on_irq(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// Mock GPIO port
pub struct MockPort {
    out: Cell<u32>,
    inputs: Cell<u32>,
    configs: RefCell<[Option<PinSetup>; 32]>,
    writes: Cell<u32>,
}

impl MockPort {
    pub fn new() -> Self {
        Self {
            out: Cell::new(0),
            inputs: Cell::new(0),
            configs: RefCell::new([None; 32]),
            writes: Cell::new(0),
        }
    }

    /// Drive the external level seen on `pin`
    pub fn set_input_level(&self, pin: u8, high: bool) {
        let mask = 1 << pin;
        if high {
            self.inputs.set(self.inputs.get() | mask);
        } else {
            self.inputs.set(self.inputs.get() & !mask);
        }
    }

    pub fn config(&self, pin: u8) -> Option<PinSetup> {
        self.configs.borrow()[pin as usize]
    }

    /// Number of OUTSET/OUTCLR writes so far
    pub fn output_writes(&self) -> u32 {
        self.writes.get()
    }
}

impl PinRegisters for MockPort {
    fn set_outputs(&self, mask: u32) {
        self.writes.set(self.writes.get() + 1);
        self.out.set(self.out.get() | mask);
    }

    fn clear_outputs(&self, mask: u32) {
        self.writes.set(self.writes.get() + 1);
        self.out.set(self.out.get() & !mask);
    }

    fn outputs(&self) -> u32 {
        self.out.get()
    }

    fn inputs(&self) -> u32 {
        self.inputs.get()
    }

    fn write_config(&self, pin: u8, setup: PinSetup) {
        self.configs.borrow_mut()[pin as usize] = Some(setup);
    }
}

/// Writes recorded by [`MockGpiote`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioteOp {
    Configure(usize),
    ClearEvent(usize),
    ClearPort,
    EnableChannel(usize),
    EnablePort,
    SetTask(usize),
    ClearTask(usize),
}

/// Mock event controller
pub struct MockGpiote {
    events: Cell<[bool; CHANNEL_COUNT]>,
    port_event: Cell<bool>,
    configs: Cell<[Option<(u8, Polarity)>; CHANNEL_COUNT]>,
    intenset: Cell<u32>,
    ops: RefCell<Vec<GpioteOp, 256>>,
    unmask_hook: Cell<Option<fn(usize)>>,
}

impl MockGpiote {
    pub fn new() -> Self {
        Self {
            events: Cell::new([false; CHANNEL_COUNT]),
            port_event: Cell::new(false),
            configs: Cell::new([None; CHANNEL_COUNT]),
            intenset: Cell::new(0),
            ops: RefCell::new(Vec::new()),
            unmask_hook: Cell::new(None),
        }
    }

    /// Latch the event flag of `channel` as the hardware would
    pub fn raise_channel_event(&self, channel: usize) {
        let mut events = self.events.get();
        events[channel] = true;
        self.events.set(events);
    }

    /// Latch the PORT event flag
    pub fn raise_port_event(&self) {
        self.port_event.set(true);
    }

    pub fn channel_config(&self, channel: usize) -> Option<(u8, Polarity)> {
        self.configs.get()[channel]
    }

    /// Interrupt enable mask, bit 31 is PORT
    pub fn interrupt_mask(&self) -> u32 {
        self.intenset.get()
    }

    pub fn ops(&self) -> Vec<GpioteOp, 256> {
        self.ops.borrow().clone()
    }

    /// Call `hook` from every channel unmask, after the write is logged
    pub fn set_unmask_hook(&self, hook: fn(usize)) {
        self.unmask_hook.set(Some(hook));
    }

    pub fn clear_ops(&self) {
        self.ops.borrow_mut().clear();
    }

    fn record(&self, op: GpioteOp) {
        // Overflowing the log only loses history, tests keep it short
        let _ = self.ops.borrow_mut().push(op);
    }
}

impl EventController for MockGpiote {
    fn configure_channel(&self, channel: usize, pin: u8, polarity: Polarity) {
        let mut configs = self.configs.get();
        configs[channel] = Some((pin, polarity));
        self.configs.set(configs);
        self.record(GpioteOp::Configure(channel));
    }

    fn channel_event(&self, channel: usize) -> bool {
        self.events.get()[channel]
    }

    fn clear_channel_event(&self, channel: usize) {
        let mut events = self.events.get();
        events[channel] = false;
        self.events.set(events);
        self.record(GpioteOp::ClearEvent(channel));
    }

    fn port_event(&self) -> bool {
        self.port_event.get()
    }

    fn clear_port_event(&self) {
        self.port_event.set(false);
        self.record(GpioteOp::ClearPort);
    }

    fn enable_channel_interrupt(&self, channel: usize) {
        self.intenset.set(self.intenset.get() | (1 << channel));
        self.record(GpioteOp::EnableChannel(channel));
        if let Some(hook) = self.unmask_hook.get() {
            hook(channel);
        }
    }

    fn enable_port_interrupt(&self) {
        self.intenset.set(self.intenset.get() | (1 << 31));
        self.record(GpioteOp::EnablePort);
    }

    fn trigger_set_task(&self, channel: usize) {
        self.record(GpioteOp::SetTask(channel));
    }

    fn trigger_clear_task(&self, channel: usize) {
        self.record(GpioteOp::ClearTask(channel));
    }
}

/// Mock interrupt controller line
pub struct MockLine {
    priority: Cell<Option<u8>>,
    clear_pending_calls: Cell<u32>,
    enable_calls: Cell<u32>,
}

impl MockLine {
    pub fn new() -> Self {
        Self {
            priority: Cell::new(None),
            clear_pending_calls: Cell::new(0),
            enable_calls: Cell::new(0),
        }
    }

    pub fn priority(&self) -> Option<u8> {
        self.priority.get()
    }

    pub fn clear_pending_calls(&self) -> u32 {
        self.clear_pending_calls.get()
    }

    pub fn enable_calls(&self) -> u32 {
        self.enable_calls.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.enable_calls.get() > 0
    }
}

impl InterruptLine for MockLine {
    fn set_priority(&self, priority: u8) {
        self.priority.set(Some(priority));
    }

    fn clear_pending(&self) {
        self.clear_pending_calls.set(self.clear_pending_calls.get() + 1);
    }

    fn enable(&self) {
        self.enable_calls.set(self.enable_calls.get() + 1);
    }
}
