//! Interrupt callbacks

/// Callback invoked from the event interrupt
///
/// Handlers run at interrupt priority with the event flag already cleared.
/// They must not block; every other event source waits until they return.
///
/// Any `Fn() + Sync` is a handler, so plain functions and statics work
/// directly:
///
/// ```ignore
/// fn on_button() { /* ... */ }
///
/// GPIO.register_channel(13, Polarity::Falling, &on_button)?;
/// ```
pub trait IrqHandler: Sync {
    /// Handle one event
    fn on_irq(&self);
}

impl<F> IrqHandler for F
where
    F: Fn() + Sync,
{
    fn on_irq(&self) {
        self()
    }
}
