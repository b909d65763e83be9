use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiBus,
};

use crate::{
    radio::{
        prelude::{RadioData, RadioFifo, RadioStatus},
        Nrf24Error, Nrf24l01,
    },
    types::TxOutcome,
};

use super::constants::timing;

impl<SPI, CSN, CE, DELAY> RadioData for Nrf24l01<SPI, CSN, CE, DELAY>
where
    SPI: SpiBus,
    CSN: OutputPin,
    CE: OutputPin<Error = CSN::Error>,
    DELAY: DelayNs,
{
    type DataErrorType = Nrf24Error<SPI::Error, CSN::Error>;

    fn transmit(&mut self, payload: &[u8]) -> Result<(), Self::DataErrorType> {
        self.ensure_configured()?;
        #[cfg(feature = "defmt")]
        defmt::trace!("TX payload: {=[u8]}", payload);
        self.write_tx_fifo(payload)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<u8, Self::DataErrorType> {
        self.ensure_configured()?;
        let len = self.read_rx_fifo(buf)?;
        self.clear_rx_dr()?;
        #[cfg(feature = "defmt")]
        defmt::trace!("RX payload: {=[u8]}", &buf[..len as usize]);
        Ok(len)
    }
}

impl<SPI, CSN, CE, DELAY> Nrf24l01<SPI, CSN, CE, DELAY>
where
    SPI: SpiBus,
    CSN: OutputPin,
    CE: OutputPin<Error = CSN::Error>,
    DELAY: DelayNs,
{
    /// Transmit a payload and block until the radio reports the outcome.
    ///
    /// The `irq_pin` (active low) is sampled once per millisecond for up to
    /// `timeout_ms` milliseconds. When it asserts, the TX interrupt is serviced
    /// with [`RadioStatus::handle_tx_irq()`].
    ///
    /// If the receiver never acknowledged the payload, it is flushed from the TX FIFO
    /// and [`TxOutcome::MaxRetries`] is returned. [`Nrf24Error::Timeout`] is returned
    /// if the pin never asserts.
    pub fn transmit_polling<IRQ>(
        &mut self,
        payload: &[u8],
        irq_pin: &mut IRQ,
        timeout_ms: u32,
    ) -> Result<TxOutcome, Nrf24Error<SPI::Error, CSN::Error>>
    where
        IRQ: InputPin<Error = CSN::Error>,
    {
        self.transmit(payload)?;
        self.wait_for_irq(irq_pin, timeout_ms)?;
        let flags = self.handle_tx_irq()?;
        if flags.tx_ds() {
            Ok(TxOutcome::Delivered)
        } else {
            self.flush_tx()?;
            Ok(TxOutcome::MaxRetries)
        }
    }

    /// Block until the `irq_pin` (active low) asserts, then
    /// [`receive()`](fn@crate::radio::prelude::RadioData::receive) into `buf`.
    ///
    /// The pin is sampled once per millisecond for up to `timeout_ms` milliseconds.
    pub fn receive_polling<IRQ>(
        &mut self,
        buf: &mut [u8],
        irq_pin: &mut IRQ,
        timeout_ms: u32,
    ) -> Result<u8, Nrf24Error<SPI::Error, CSN::Error>>
    where
        IRQ: InputPin<Error = CSN::Error>,
    {
        self.ensure_configured()?;
        self.wait_for_irq(irq_pin, timeout_ms)?;
        self.receive(buf)
    }

    fn wait_for_irq<IRQ>(
        &mut self,
        irq_pin: &mut IRQ,
        timeout_ms: u32,
    ) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>>
    where
        IRQ: InputPin<Error = CSN::Error>,
    {
        let mut elapsed = 0;
        loop {
            if irq_pin.is_low().map_err(Nrf24Error::Gpo)? {
                return Ok(());
            }
            if elapsed >= timeout_ms {
                #[cfg(feature = "defmt")]
                defmt::debug!("no IRQ after {} ms", timeout_ms);
                return Err(Nrf24Error::Timeout);
            }
            self._delay_impl.delay_us(timing::IRQ_POLL_US);
            elapsed += 1;
        }
    }
}
