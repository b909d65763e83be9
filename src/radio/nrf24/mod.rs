use core::fmt::{Debug, Display, Formatter};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
pub(crate) mod bit_fields;
mod constants;
mod fifo;
mod init;
mod power;
mod radio;
mod status;
pub use constants::{commands, registers};
use constants::mnemonics;

use super::RadioConfig;
use crate::StatusFlags;

/// An collection of error types to describe hardware malfunctions and misuse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    ///
    /// The failed command can be issued again.
    Spi(SPI),
    /// Represents a digital pin (CSN, CE or IRQ) error.
    Gpo(DO),
    /// A data-path operation was used before
    /// [`configure()`](fn@crate::radio::prelude::RadioInit::configure) succeeded.
    Unconfigured,
    /// The IRQ pin did not assert within the given timeout.
    Timeout,
}

impl<SPI: Debug, DO: Debug> Display for Nrf24Error<SPI, DO> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Nrf24Error::Spi(e) => write!(f, "SPI error: {e:?}"),
            Nrf24Error::Gpo(e) => write!(f, "GPIO error: {e:?}"),
            Nrf24Error::Unconfigured => write!(f, "radio not configured"),
            Nrf24Error::Timeout => write!(f, "IRQ timeout"),
        }
    }
}

#[cfg(feature = "std")]
impl<SPI: Debug, DO: Debug> std::error::Error for Nrf24Error<SPI, DO> {}

#[cfg(feature = "defmt")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "SPI error"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "GPIO error"),
            Nrf24Error::Unconfigured => defmt::write!(fmt, "radio not configured"),
            Nrf24Error::Timeout => defmt::write!(fmt, "IRQ timeout"),
        }
    }
}

/// The bytes exchanged after the command byte of a single SPI frame.
#[derive(Clone, Copy)]
enum Payload {
    None,
    /// Send the first `n` bytes of the internal buffer.
    Write(u8),
    /// Receive `n` bytes into the internal buffer.
    Read(u8),
}

/// This struct implements the [`Radio*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// The driver owns the SPI bus and drives the radio's CSN pin itself, so every
/// command is framed by exactly one CSN assertion and one release.
pub struct Nrf24l01<SPI, CSN, CE, DELAY> {
    _spi: SPI,
    _csn_pin: CSN,
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX/RX mode.
    /// [`configure()`](fn@crate::radio::prelude::RadioInit::configure) leaves it asserted.
    pub ce_pin: CE,
    _delay_impl: DELAY,
    _buf: [u8; 32],
    _status: StatusFlags,
    _config: RadioConfig,
    _configured: bool,
}

impl<SPI, CSN, CE, DELAY> Nrf24l01<SPI, CSN, CE, DELAY>
where
    SPI: SpiBus,
    CSN: OutputPin,
    CE: OutputPin<Error = CSN::Error>,
    DELAY: DelayNs,
{
    /// Instantiate an unconfigured [`Nrf24l01`] object for use on the specified
    /// `spi` bus with the given `csn_pin` and `ce_pin`.
    ///
    /// Nothing is sent to the radio here. Pass a [`RadioConfig`] to
    /// [`set_config()`](fn@crate::radio::prelude::RadioInit::set_config) (or keep the
    /// defaults) and call [`configure()`](fn@crate::radio::prelude::RadioInit::configure).
    pub fn new(spi: SPI, csn_pin: CSN, ce_pin: CE, delay_impl: DELAY) -> Self {
        Self {
            _spi: spi,
            _csn_pin: csn_pin,
            ce_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; 32],
            _status: StatusFlags::from_bits(0),
            _config: RadioConfig::default(),
            _configured: false,
        }
    }

    /// Give back the peripherals passed to [`Nrf24l01::new()`].
    ///
    /// The radio is left in whatever state it was in.
    pub fn release(self) -> (SPI, CSN, CE, DELAY) {
        (self._spi, self._csn_pin, self.ce_pin, self._delay_impl)
    }

    /// The configuration last given to
    /// [`set_config()`](fn@crate::radio::prelude::RadioInit::set_config).
    pub fn config(&self) -> &RadioConfig {
        &self._config
    }

    /// The STATUS byte clocked out during the most recent command.
    pub fn cached_status(&self) -> StatusFlags {
        self._status
    }

    fn ensure_configured(&self) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        if self._configured {
            Ok(())
        } else {
            Err(Nrf24Error::Unconfigured)
        }
    }

    /// Frame one command: assert CSN, exchange the command byte and `payload`,
    /// then release CSN.
    ///
    /// CSN is released even if the exchange fails; the first error is returned.
    fn spi_frame(
        &mut self,
        command: u8,
        payload: Payload,
    ) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        self._csn_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let result = self.spi_exchange(command, payload);
        let released = self._csn_pin.set_high().map_err(Nrf24Error::Gpo);
        result.and(released)
    }

    fn spi_exchange(
        &mut self,
        command: u8,
        payload: Payload,
    ) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        // STATUS is shifted out while the command byte is shifted in
        let mut cmd = [command];
        self._spi
            .transfer_in_place(&mut cmd)
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(cmd[0]);
        match payload {
            Payload::None => (),
            Payload::Write(len) => self
                ._spi
                .write(&self._buf[..len as usize])
                .map_err(Nrf24Error::Spi)?,
            Payload::Read(len) => self
                ._spi
                .read(&mut self._buf[..len as usize])
                .map_err(Nrf24Error::Spi)?,
        }
        self._spi.flush().map_err(Nrf24Error::Spi)
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(&mut self, len: u8, command: u8) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        if len == 0 {
            self.spi_frame(command, Payload::None)
        } else {
            self.spi_frame(command, Payload::Read(len))
        }
    }

    fn spi_write_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        self._buf[0] = byte;
        self.spi_frame(
            commands::W_REGISTER | (register & registers::ADDRESS_MASK),
            Payload::Write(1),
        )
    }

    /// Send the NOP command and return the STATUS byte it clocks out.
    ///
    /// This is raw register access; it is allowed on an unconfigured radio.
    pub fn nop(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, CSN::Error>> {
        self.spi_read(0, commands::NOP)?;
        Ok(self._status)
    }

    /// Read a single register.
    ///
    /// This is raw register access; it is allowed on an unconfigured radio.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Nrf24Error<SPI::Error, CSN::Error>> {
        self.spi_read(1, commands::R_REGISTER | (register & registers::ADDRESS_MASK))?;
        Ok(self._buf[0])
    }

    /// Write a single register.
    ///
    /// This is raw register access; it is allowed on an unconfigured radio.
    /// Writing the STATUS register clears every flag that is written as `1`.
    pub fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        self.spi_write_byte(register, value)
    }

    /// Clock exactly the configured payload length out of the RX FIFO.
    ///
    /// As many bytes as fit are copied into `buf` and that count is returned.
    /// The "RX Data Ready" flag is left untouched.
    pub fn read_rx_fifo(&mut self, buf: &mut [u8]) -> Result<u8, Nrf24Error<SPI::Error, CSN::Error>> {
        let len = self._config.payload_length();
        self.spi_read(len, commands::R_RX_PAYLOAD)?;
        let copied = buf.len().min(len as usize);
        buf[..copied].copy_from_slice(&self._buf[..copied]);
        Ok(copied as u8)
    }

    /// Clock exactly the configured payload length into the TX FIFO.
    ///
    /// A shorter `payload` is padded with zeros, a longer one is truncated.
    pub fn write_tx_fifo(&mut self, payload: &[u8]) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        let len = self._config.payload_length() as usize;
        let used = payload.len().min(len);
        self._buf[..used].copy_from_slice(&payload[..used]);
        self._buf[used..len].fill(0);
        self.spi_frame(commands::W_TX_PAYLOAD, Payload::Write(len as u8))
    }

    /// Read-modify-write the PWR_UP bit of the CONFIG register.
    fn set_power(&mut self, enable: bool) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        let config = bit_fields::Config::from_bits(self.read_register(registers::CONFIG)?);
        self.spi_write_byte(registers::CONFIG, config.with_power(enable).into_bits())
    }

    /// Read STATUS, then write back its non-flag bits plus only `flag`.
    ///
    /// STATUS flags are write-1-to-clear, so other pending flags (written as 0)
    /// stay latched.
    fn clear_flag(&mut self, flag: u8) -> Result<(), Nrf24Error<SPI::Error, CSN::Error>> {
        let status = self.read_register(registers::STATUS)?;
        self.spi_write_byte(
            registers::STATUS,
            status & !StatusFlags::IRQ_MASK | (flag & StatusFlags::IRQ_MASK),
        )
    }

    #[cfg(test)]
    pub(crate) fn assume_configured(&mut self, config: RadioConfig) {
        self._config = config;
        self._configured = true;
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, Nrf24Error};
    use crate::{
        radio::RadioConfig,
        test::{mk_radio, mk_sim_radio, Frame},
    };
    use std::vec;

    #[test]
    fn read_register() {
        let frames = [Frame::read_reg(registers::RF_CH, 76)];
        let mut mocks = mk_radio(&[], &frames);
        assert_eq!(mocks.0.read_register(registers::RF_CH), Ok(76));
        assert_eq!(mocks.0.cached_status().into_bits(), 0x0E);
        mocks.done();
    }

    #[test]
    fn write_register() {
        let frames = [Frame::write_reg(registers::SETUP_AW, 2)];
        let mut mocks = mk_radio(&[], &frames);
        // raw access is allowed before configure()
        mocks.0.write_register(registers::SETUP_AW, 2).unwrap();
        mocks.done();
    }

    #[test]
    fn register_index_is_masked() {
        let frames = [
            Frame::read_reg(registers::FIFO_STATUS, 0x11),
            Frame::write_reg(registers::FEATURE, 0),
        ];
        let mut mocks = mk_radio(&[], &frames);
        // upper command bits never leak into the opcode
        assert_eq!(mocks.0.read_register(registers::FIFO_STATUS | 0xE0), Ok(0x11));
        mocks.0.write_register(registers::FEATURE | 0xE0, 0).unwrap();
        mocks.done();
    }

    #[test]
    fn write_tx_fifo_pads_payload() {
        let frames = [
            Frame::write(commands::W_TX_PAYLOAD, 0x0E, &[1, 2, 3, 0, 0, 0]),
            Frame::write(commands::W_TX_PAYLOAD, 0x0E, &[9; 6]),
        ];
        let mut mocks = mk_radio(&[], &frames);
        mocks
            .0
            .assume_configured(RadioConfig::default().with_payload_length(6));
        mocks.0.write_tx_fifo(&[1, 2, 3]).unwrap();
        // longer payloads are truncated
        mocks.0.write_tx_fifo(&[9; 10]).unwrap();
        mocks.done();
    }

    #[test]
    fn read_rx_fifo_clocks_full_length() {
        let frames = [Frame::read(commands::R_RX_PAYLOAD, 0x40, &[5, 6, 7, 8])];
        let mut mocks = mk_radio(&[], &frames);
        mocks
            .0
            .assume_configured(RadioConfig::default().with_payload_length(4));
        let mut buf = [0u8; 2];
        assert_eq!(mocks.0.read_rx_fifo(&mut buf), Ok(2));
        assert_eq!(buf, [5, 6]);
        assert!(mocks.0.cached_status().rx_dr());
        mocks.done();
    }

    #[test]
    fn csn_released_after_spi_error() {
        use embedded_hal::spi::ErrorKind;

        let (mut radio, chip) = mk_sim_radio();
        chip.borrow_mut().fail_on_frame = Some(0);
        assert_eq!(
            radio.read_register(registers::RF_CH),
            Err(Nrf24Error::Spi(ErrorKind::Other))
        );
        assert!(!chip.borrow().csn_low);
        // the bus is usable again right away
        assert_eq!(radio.read_register(registers::RF_CH), Ok(2));
        assert_eq!(chip.borrow().violations, 0);
    }

    #[test]
    fn nop_returns_status() {
        let frames = [Frame::command(commands::NOP, 0x2E)];
        let mut mocks = mk_radio(&[], &frames);
        let flags = mocks.0.nop().unwrap();
        assert!(flags.tx_ds());
        assert_eq!(flags.rx_pipe(), 7);
        mocks.done();
    }

    #[test]
    fn error_display() {
        use embedded_hal::spi::ErrorKind;
        use std::{format, string::String};

        type Error = Nrf24Error<ErrorKind, core::convert::Infallible>;
        assert_eq!(
            format!("{}", Error::Spi(ErrorKind::Overrun)),
            String::from("SPI error: Overrun")
        );
        assert_eq!(
            format!("{}", Error::Unconfigured),
            String::from("radio not configured")
        );
        assert_eq!(format!("{}", Error::Timeout), String::from("IRQ timeout"));
    }

    #[test]
    #[cfg(feature = "std")]
    fn error_is_std_error() {
        use embedded_hal::spi::ErrorKind;
        use std::{boxed::Box, error::Error, string::ToString};

        let err: Box<dyn Error> =
            Box::new(Nrf24Error::<ErrorKind, core::convert::Infallible>::Timeout);
        assert_eq!(err.to_string(), "IRQ timeout");
    }

    #[test]
    fn csn_frames_every_command() {
        let (mut radio, chip) = mk_sim_radio();
        radio.write_register(registers::RF_CH, 12).unwrap();
        assert_eq!(radio.read_register(registers::RF_CH), Ok(12));
        let chip = chip.borrow();
        assert_eq!(chip.violations, 0);
        assert_eq!(chip.frames.len(), 2);
        assert_eq!(chip.frames[0], vec![commands::W_REGISTER | registers::RF_CH, 12]);
        assert_eq!(chip.frames[1][0], registers::RF_CH);
        assert!(!chip.csn_low);
    }
}
