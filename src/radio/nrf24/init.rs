use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{
        prelude::{RadioFifo, RadioInit},
        Nrf24Error, Nrf24l01, RadioConfig,
    },
    TransceiverMode,
};

use super::{
    bit_fields::{address_width_bits, Config, RfSetup, SetupRetry},
    constants::{defaults, timing},
    registers,
};

/// Register values written (in order) before any configured setting is applied.
const RESET_SEQUENCE: [(u8, u8); 16] = [
    (registers::CONFIG, defaults::CONFIG),
    (registers::EN_AA, defaults::EN_AA),
    (registers::EN_RXADDR, defaults::EN_RXADDR),
    (registers::SETUP_AW, defaults::SETUP_AW),
    (registers::SETUP_RETR, defaults::SETUP_RETR),
    (registers::RF_CH, defaults::RF_CH),
    (registers::RF_SETUP, defaults::RF_SETUP),
    (registers::STATUS, defaults::STATUS),
    (registers::RX_PW_P0, 0),
    (registers::RX_PW_P0 + 1, 0),
    (registers::RX_PW_P0 + 2, 0),
    (registers::RX_PW_P0 + 3, 0),
    (registers::RX_PW_P0 + 4, 0),
    (registers::RX_PW_P0 + 5, 0),
    (registers::DYNPD, 0),
    (registers::FEATURE, 0),
];

impl<SPI, CSN, CE, DELAY> RadioInit for Nrf24l01<SPI, CSN, CE, DELAY>
where
    SPI: SpiBus,
    CSN: OutputPin,
    CE: OutputPin<Error = CSN::Error>,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, CSN::Error>;

    fn set_config(&mut self, config: RadioConfig) {
        self._config = config;
        self._configured = false;
    }

    fn is_configured(&self) -> bool {
        self._configured
    }

    /// The sequence runs in this order:
    ///
    /// 1. CSN released, CE deasserted.
    /// 2. Every register touched by the driver is written with its reset value
    ///    and all STATUS flags are cleared.
    /// 3. RX FIFO then TX FIFO flushed.
    /// 4. PRIM_RX set for [`TransceiverMode::Rx`], cleared for [`TransceiverMode::Tx`].
    /// 5. Powered up (blocks for 1.5 ms).
    /// 6. RX only: pipe 0 payload width.
    /// 7. Channel, data rate, PA level, CRC length, address width,
    ///    auto-retry count and delay.
    /// 8. CE asserted.
    ///
    /// Any failure aborts the sequence and leaves the radio unconfigured.
    fn configure(&mut self) -> Result<(), Self::ConfigErrorType> {
        self._configured = false;
        let config = self._config;
        #[cfg(feature = "defmt")]
        defmt::debug!("configuring radio: {}", config);

        self._csn_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        for (register, value) in RESET_SEQUENCE {
            self.spi_write_byte(register, value)?;
        }
        self.flush_rx()?;
        self.flush_tx()?;
        #[cfg(feature = "defmt")]
        defmt::trace!("registers reset, FIFOs flushed");

        let reg = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.spi_write_byte(registers::CONFIG, reg.with_mode(config.mode()).into_bits())?;

        self.set_power(true)?;
        self._delay_impl.delay_us(timing::POWER_UP_US);
        #[cfg(feature = "defmt")]
        defmt::trace!("powered up as {}", config.mode());

        if config.mode() == TransceiverMode::Rx {
            self.spi_write_byte(registers::RX_PW_P0, config.payload_length())?;
        }

        self.spi_write_byte(registers::RF_CH, config.channel())?;

        let reg = RfSetup::from_bits(self.read_register(registers::RF_SETUP)?);
        self.spi_write_byte(
            registers::RF_SETUP,
            reg.with_data_rate(config.data_rate()).into_bits(),
        )?;
        let reg = RfSetup::from_bits(self.read_register(registers::RF_SETUP)?);
        self.spi_write_byte(
            registers::RF_SETUP,
            reg.with_pa_level(config.pa_level()).into_bits(),
        )?;

        let reg = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.spi_write_byte(
            registers::CONFIG,
            reg.with_crc_length(config.crc_length()).into_bits(),
        )?;

        self.spi_write_byte(
            registers::SETUP_AW,
            address_width_bits(config.address_length()),
        )?;

        let reg = SetupRetry::from_bits(self.read_register(registers::SETUP_RETR)?);
        self.spi_write_byte(
            registers::SETUP_RETR,
            reg.with_retry_count(config.auto_retry_count()).into_bits(),
        )?;
        let reg = SetupRetry::from_bits(self.read_register(registers::SETUP_RETR)?);
        self.spi_write_byte(
            registers::SETUP_RETR,
            reg.with_retry_delay_us(config.auto_retry_delay_us())
                .into_bits(),
        )?;

        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._configured = true;
        #[cfg(feature = "defmt")]
        defmt::debug!("radio configured");
        Ok(())
    }
}
