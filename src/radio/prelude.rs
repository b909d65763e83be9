//! This module defines the traits that may
//! need to imported to use the radio driver.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24l01::radio::prelude::*;
//! ```

use crate::types::{FifoStatus, StatusFlags};

use super::RadioConfig;

/// A trait to represent bringing the radio into a configured operating state.
pub trait RadioInit {
    type ConfigErrorType;

    /// Store a new configuration.
    ///
    /// Nothing is written to the radio until [`RadioInit::configure()`] is called,
    /// and the radio is considered unconfigured until then.
    fn set_config(&mut self, config: RadioConfig);

    /// Run the configuration sequence.
    ///
    /// The sequence resets the radio's registers to known defaults, flushes both
    /// FIFOs, applies every setting in the stored [`RadioConfig`], powers the radio
    /// up, and finally asserts the CE pin.
    ///
    /// Running it again with the same configuration yields the same register contents.
    fn configure(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Has [`RadioInit::configure()`] completed since the last
    /// [`RadioInit::set_config()`]?
    fn is_configured(&self) -> bool;
}

/// A trait to represent moving payloads through the radio's FIFOs.
pub trait RadioData {
    type DataErrorType;

    /// Upload a payload into the TX FIFO.
    ///
    /// This does not wait for the transmission to finish. Watch the IRQ pin (or poll
    /// [`RadioStatus::status()`]) and call [`RadioStatus::handle_tx_irq()`] afterward.
    ///
    /// The payload is zero padded (or truncated) to the configured payload length.
    fn transmit(&mut self, payload: &[u8]) -> Result<(), Self::DataErrorType>;

    /// Download the payload at the top of the RX FIFO into `buf`, then clear the
    /// "RX Data Ready" flag.
    ///
    /// The configured payload length is always clocked out of the radio. Only as many
    /// bytes as fit in `buf` are copied; that count is returned.
    ///
    /// Call this only after the IRQ pin or [`RadioFifo::available()`] reported data.
    fn receive(&mut self, buf: &mut [u8]) -> Result<u8, Self::DataErrorType>;
}

/// A trait to represent inspection and acknowledgement of interrupt events.
pub trait RadioStatus {
    type StatusErrorType;

    /// Fetch the STATUS register using the NOP command.
    fn status(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Acknowledge the "TX Data Sent" event.
    fn clear_tx_ds(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Acknowledge the "max retransmits reached" event.
    ///
    /// The radio will not transmit again until this flag is cleared.
    fn clear_max_rt(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Acknowledge the "RX Data Ready" event.
    fn clear_rx_dr(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Service a transmit interrupt.
    ///
    /// Both "TX Data Sent" and "max retransmits reached" are checked and cleared
    /// independently, since the radio can latch both. The flags observed before
    /// clearing are returned.
    fn handle_tx_irq(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs.
pub trait RadioFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the FIFO_STATUS register.
    fn fifo_status(&mut self) -> Result<FifoStatus, Self::FifoErrorType>;

    /// Is there a payload available in the radio's RX FIFO?
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;
}

/// A trait to represent manipulation of the radio's power state.
pub trait RadioPower {
    type PowerErrorType;

    /// Set the PWR_UP bit and wait for the radio to reach standby.
    ///
    /// Other CONFIG bits are preserved.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Clear the PWR_UP bit.
    ///
    /// All register values are maintained and the SPI interface stays responsive
    /// while powered down.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Read back the PWR_UP bit.
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}
