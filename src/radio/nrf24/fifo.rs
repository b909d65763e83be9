use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::RadioFifo, Nrf24Error, Nrf24l01},
    types::FifoStatus,
};

use super::{commands, registers};

impl<SPI, CSN, CE, DELAY> RadioFifo for Nrf24l01<SPI, CSN, CE, DELAY>
where
    SPI: SpiBus,
    CSN: OutputPin,
    CE: OutputPin<Error = CSN::Error>,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, CSN::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_RX)
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_TX)
    }

    fn fifo_status(&mut self) -> Result<FifoStatus, Self::FifoErrorType> {
        self.ensure_configured()?;
        Ok(FifoStatus::from_bits(
            self.read_register(registers::FIFO_STATUS)?,
        ))
    }

    fn available(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(!self.fifo_status()?.rx_empty())
    }
}
