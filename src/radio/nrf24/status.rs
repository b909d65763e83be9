use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::RadioStatus, Nrf24Error, Nrf24l01},
    types::StatusFlags,
};

use super::mnemonics;

impl<SPI, CSN, CE, DELAY> RadioStatus for Nrf24l01<SPI, CSN, CE, DELAY>
where
    SPI: SpiBus,
    CSN: OutputPin,
    CE: OutputPin<Error = CSN::Error>,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, CSN::Error>;

    fn status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.ensure_configured()?;
        self.nop()
    }

    fn clear_tx_ds(&mut self) -> Result<(), Self::StatusErrorType> {
        self.ensure_configured()?;
        self.clear_flag(mnemonics::MASK_TX_DS)
    }

    fn clear_max_rt(&mut self) -> Result<(), Self::StatusErrorType> {
        self.ensure_configured()?;
        self.clear_flag(mnemonics::MASK_MAX_RT)
    }

    fn clear_rx_dr(&mut self) -> Result<(), Self::StatusErrorType> {
        self.ensure_configured()?;
        self.clear_flag(mnemonics::MASK_RX_DR)
    }

    fn handle_tx_irq(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.ensure_configured()?;
        let flags = self.nop()?;
        if flags.tx_ds() {
            #[cfg(feature = "defmt")]
            defmt::trace!("TX data sent");
            self.clear_flag(mnemonics::MASK_TX_DS)?;
        }
        if flags.max_rt() {
            #[cfg(feature = "defmt")]
            defmt::debug!("TX max retransmits reached");
            self.clear_flag(mnemonics::MASK_MAX_RT)?;
        }
        Ok(flags)
    }
}
