//! Driver errors

/// Errors returned by the GPIO driver
///
/// Every failure is a precondition violation reported to the caller; the
/// driver state is left unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin number above the configured maximum
    InvalidPin,
    /// All edge-detect channels are in use
    ChannelTableFull,
    /// The pin already owns an edge-detect channel
    PinAlreadyRegistered,
    /// No channel has been registered at that index
    ChannelNotRegistered,
}
